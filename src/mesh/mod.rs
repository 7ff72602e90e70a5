/// Mesh module — vertex layout, material textures, the sampler binding
/// protocol, drawables and the drawable registry.

// Module declarations
pub mod vertex;
pub mod material;
pub mod binding;
pub mod drawable;
pub mod registry;

// Re-exports
pub use vertex::*;
pub use material::*;
pub use binding::*;
pub use drawable::*;
pub use registry::*;
