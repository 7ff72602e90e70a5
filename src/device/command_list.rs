/// CommandList trait — for recording rendering commands

use std::sync::Arc;

use bitflags::bitflags;

use crate::error::Result;
use super::buffer::Buffer;
use super::framebuffer::Framebuffer;
use super::program::{Program, UniformValue};
use super::texture::Texture;

bitflags! {
    /// Which aspects of the bound draw destination to clear
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR   = 1 << 0;
        const DEPTH   = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-surface viewport with the default [0, 1] depth range
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// Command list for recording rendering commands
///
/// There is exactly one active draw destination at any time; binding a
/// framebuffer replaces it and `bind_default_framebuffer` restores the visible
/// surface. A texture that belongs to the currently bound framebuffer must not
/// be bound as a sampled input of the same draw — backends are free to reject
/// this aliasing with `Error::InvalidResource`.
pub trait CommandList: Send + Sync {
    /// Begin recording commands
    fn begin(&mut self) -> Result<()>;

    /// End recording commands
    fn end(&mut self) -> Result<()>;

    /// Bind a framebuffer as the active draw destination
    fn bind_framebuffer(&mut self, framebuffer: &Arc<dyn Framebuffer>) -> Result<()>;

    /// Restore the default visible surface as the active draw destination
    fn bind_default_framebuffer(&mut self) -> Result<()>;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Clear the active draw destination
    fn clear(&mut self, flags: ClearFlags, color: [f32; 4]) -> Result<()>;

    /// Enable or disable depth testing
    fn set_depth_test(&mut self, enabled: bool) -> Result<()>;

    /// Bind a shader program for subsequent uniform updates and draws
    fn bind_program(&mut self, program: &Arc<dyn Program>) -> Result<()>;

    /// Set a uniform by name on the currently bound program
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()>;

    /// Bind a texture to a texture unit for sampling
    fn bind_texture(&mut self, unit: u32, texture: &Arc<dyn Texture>) -> Result<()>;

    /// Bind a vertex buffer
    fn bind_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>) -> Result<()>;

    /// Bind an index buffer (32-bit indices)
    fn bind_index_buffer(&mut self, buffer: &Arc<dyn Buffer>) -> Result<()>;

    /// Draw non-indexed vertices
    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()>;

    /// Draw indexed vertices
    fn draw_indexed(&mut self, index_count: u32, first_index: u32) -> Result<()>;
}
