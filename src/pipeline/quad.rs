/// Fullscreen quad drawn by the blur and composite stages.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};

use crate::device::{Buffer, BufferDesc, BufferKind, CommandList, GraphicsDevice};
use crate::error::Result;

/// Clip-space position plus UV, the only attributes the quad passes need
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct QuadVertex {
    position: [f32; 2],
    uv: [f32; 2],
}

// Two triangles covering clip space, UVs spanning [0,1]²
const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { position: [-1.0, -1.0], uv: [0.0, 0.0] },
    QuadVertex { position: [1.0, -1.0], uv: [1.0, 0.0] },
    QuadVertex { position: [1.0, 1.0], uv: [1.0, 1.0] },
    QuadVertex { position: [1.0, 1.0], uv: [1.0, 1.0] },
    QuadVertex { position: [-1.0, 1.0], uv: [0.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0], uv: [0.0, 0.0] },
];

/// A 6-vertex fullscreen triangle pair, uploaded once and shared by every
/// quad pass in the pipeline.
pub struct FullscreenQuad {
    vertex_buffer: Arc<dyn Buffer>,
}

impl FullscreenQuad {
    pub fn new(device: &mut dyn GraphicsDevice) -> Result<Self> {
        let vertex_buffer = device.create_buffer(&BufferDesc {
            kind: BufferKind::Vertex,
            data: bytemuck::cast_slice(&QUAD_VERTICES).to_vec(),
        })?;
        Ok(Self { vertex_buffer })
    }

    /// Bind the quad's vertex buffer and draw it (non-indexed, 6 vertices)
    pub fn draw(&self, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.bind_vertex_buffer(&self.vertex_buffer)?;
        cmd.draw(6, 0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;
