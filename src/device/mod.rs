/// Device module — the backend seam.
///
/// `GraphicsDevice` is the factory trait for GPU resources; `CommandList`
/// records state changes and draw calls. Backend implementations (GL, Vulkan,
/// mock) provide concrete types behind these traits.

// Module declarations
pub mod device;
pub mod texture;
pub mod buffer;
pub mod program;
pub mod framebuffer;
pub mod command_list;

#[cfg(test)]
pub mod mock_device;

// Re-exports
pub use device::*;
pub use texture::*;
pub use buffer::*;
pub use program::*;
pub use framebuffer::*;
pub use command_list::*;
