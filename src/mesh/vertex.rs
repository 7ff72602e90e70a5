/// Vertex layout shared by every drawable in the pipeline.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// One vertex: position, normal, texture coordinates and tangent frame.
///
/// The layout is fixed at 56 bytes (14 floats) and matches attribute
/// locations 0 through 4 in the capture shaders. `#[repr(C)]` guarantees
/// field order on the GPU side; `Pod` lets vertex slices be reinterpreted
/// as raw bytes for buffer upload without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position (location 0)
    pub position: Vec3,
    /// Object-space normal (location 1)
    pub normal: Vec3,
    /// Texture coordinates (location 2)
    pub uv: Vec2,
    /// Tangent (location 3)
    pub tangent: Vec3,
    /// Bitangent (location 4)
    pub bitangent: Vec3,
}

impl Vertex {
    /// Size of one vertex in bytes (the buffer stride)
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Construct a vertex with a zero tangent frame
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
            tangent: Vec3::ZERO,
            bitangent: Vec3::ZERO,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
