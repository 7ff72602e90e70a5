/// Drawable — a GPU-resident mesh with its material textures, program and
/// model transform.

use std::sync::Arc;

use glam::Mat4;

use crate::device::{
    Buffer, BufferDesc, BufferKind, CommandList, GraphicsDevice, Program, UniformValue,
};
use crate::error::Result;
use crate::render_trace;
use super::binding::sampler_bindings;
use super::material::MaterialTexture;
use super::vertex::Vertex;

/// A mesh uploaded to the GPU, ready to draw.
///
/// Vertex and index data are uploaded once at creation; per-frame state is
/// limited to the model transform. Drawing binds the material textures per
/// the sampler binding protocol, then issues one indexed draw.
pub struct Drawable {
    vertex_buffer: Arc<dyn Buffer>,
    index_buffer: Arc<dyn Buffer>,
    index_count: u32,
    /// Material textures, in binding order
    pub textures: Vec<MaterialTexture>,
    /// Program bound by the capture stage before this drawable is drawn
    pub program: Arc<dyn Program>,
    /// Object-to-world transform
    pub model: Mat4,
    label: String,
}

impl Drawable {
    /// Upload vertex and index data and build the drawable
    pub fn new(
        device: &mut dyn GraphicsDevice,
        label: &str,
        vertices: &[Vertex],
        indices: &[u32],
        textures: Vec<MaterialTexture>,
        program: Arc<dyn Program>,
    ) -> Result<Self> {
        let vertex_buffer = device.create_buffer(&BufferDesc {
            kind: BufferKind::Vertex,
            data: bytemuck::cast_slice(vertices).to_vec(),
        })?;
        let index_buffer = device.create_buffer(&BufferDesc {
            kind: BufferKind::Index,
            data: bytemuck::cast_slice(indices).to_vec(),
        })?;

        render_trace!("lumen::Drawable",
            "created drawable '{}' ({} vertices, {} indices, {} texture(s))",
            label, vertices.len(), indices.len(), textures.len());

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            textures,
            program,
            model: Mat4::IDENTITY,
            label: label.to_string(),
        })
    }

    /// Bind material textures and buffers, then draw.
    ///
    /// The full binding list is resolved before any command is recorded, so
    /// an unrecognized texture kind fails the draw without leaving texture
    /// units half-bound.
    pub fn draw(&self, cmd: &mut dyn CommandList) -> Result<()> {
        let bindings = sampler_bindings(&self.textures)?;

        for (binding, texture) in bindings.iter().zip(&self.textures) {
            cmd.bind_texture(binding.unit, &texture.texture)?;
            cmd.set_uniform(&binding.uniform, UniformValue::Int(binding.unit as i32))?;
        }

        cmd.bind_vertex_buffer(&self.vertex_buffer)?;
        cmd.bind_index_buffer(&self.index_buffer)?;
        cmd.draw_indexed(self.index_count, 0)
    }

    /// Number of indices drawn per draw call
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Debug label
    pub fn label(&self) -> &str {
        &self.label
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "drawable_tests.rs"]
mod tests;
