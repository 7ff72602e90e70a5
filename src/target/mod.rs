/// Target module — render targets and the blur ping-pong pair.

// Module declarations
pub mod render_target;
pub mod ping_pong;

// Re-exports
pub use render_target::*;
pub use ping_pong::*;
