/// Pipeline module — the capture, blur and composite stages plus the
/// per-frame control flow connecting them.

// Module declarations
pub mod context;
pub mod quad;
pub mod shaders;
pub mod capture;
pub mod blur;
pub mod composite;
pub mod bloom_pipeline;

// Re-exports
pub use context::*;
pub use quad::*;
pub use capture::*;
pub use blur::*;
pub use composite::*;
pub use bloom_pipeline::*;
