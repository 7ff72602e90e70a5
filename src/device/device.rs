/// GraphicsDevice trait — main resource factory interface

use std::sync::Arc;

use crate::error::Result;
use super::buffer::{Buffer, BufferDesc};
use super::command_list::CommandList;
use super::framebuffer::{Framebuffer, FramebufferDesc};
use super::program::{Program, ProgramDesc};
use super::texture::{Texture, TextureDesc};

/// Main graphics device trait
///
/// This is the central factory interface for creating GPU resources.
/// Implemented by backend-specific devices. Resources are returned as shared
/// trait objects and release their GPU memory deterministically when the last
/// reference is dropped.
pub trait GraphicsDevice: Send + Sync {
    /// Create a texture
    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create a buffer
    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Create a shader program
    ///
    /// # Errors
    ///
    /// Returns `Error::Backend` on compile or link failure.
    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Arc<dyn Program>>;

    /// Create a framebuffer from existing attachments
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompleteTarget` if the attachment configuration is
    /// invalid (empty, size mismatch, non-renderable format).
    fn create_framebuffer(&mut self, desc: &FramebufferDesc) -> Result<Arc<dyn Framebuffer>>;

    /// Create a command list for recording a frame
    fn create_command_list(&self) -> Result<Box<dyn CommandList>>;

    /// Submit a recorded command list for execution
    fn submit(&mut self, commands: &dyn CommandList) -> Result<()>;

    /// Wait for all GPU operations to complete
    fn wait_idle(&self) -> Result<()>;
}
