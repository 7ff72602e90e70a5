/// Shader program trait, descriptor and uniform values

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Descriptor for creating a shader program
///
/// Source language is backend-defined (GLSL for the GL backend). Compilation
/// and link errors surface as `Error::Backend` from `create_program`.
#[derive(Debug, Clone)]
pub struct ProgramDesc {
    /// Vertex stage source
    pub vertex_source: String,
    /// Fragment stage source
    pub fragment_source: String,
    /// Debug label used in logs and backend error messages
    pub label: String,
}

/// A typed uniform value
///
/// Uniforms are set by name on the currently bound program; the backend
/// resolves each name to a location once and reuses it every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

/// Shader program resource trait
///
/// Implemented by backend-specific program types. Uniform state lives with the
/// program object, so values survive across frames until overwritten.
pub trait Program: Send + Sync {
    /// Debug label this program was created with
    fn label(&self) -> &str;
}
