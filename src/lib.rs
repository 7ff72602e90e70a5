/*!
# Lumen Render

Offscreen HDR bloom rendering pipeline.

A scene is rasterized into an intermediate high-dynamic-range target with two
simultaneous color outputs (full-shaded base color and a luminance-thresholded
bright pass), the bright output is blurred through a repeated two-buffer
ping-pong pass, and the result is additively composited onto the visible
surface.

The crate is platform-agnostic: all GPU access goes through the
[`device::GraphicsDevice`] and [`device::CommandList`] traits (trait-based
dynamic polymorphism). Backend implementations provide concrete types that
implement these traits.

## Architecture

- **device**: backend seam — factory trait for GPU resources plus a command
  list trait for recording state changes and draws
- **target**: render targets (framebuffer + owned color/depth attachments) and
  the ping-pong pair used by the blur stage
- **mesh**: vertex layout, material textures, the sampler binding protocol,
  drawables and the drawable registry
- **pipeline**: the capture, blur and composite stages and the per-frame
  control flow that connects them
*/

// Internal modules
mod error;
pub mod log;
pub mod device;
pub mod target;
pub mod mesh;
pub mod pipeline;

// Error types at crate root
pub use error::{Error, Result};

// Re-export math library at crate root
pub use glam;
