/// Material textures and their kinds.
///
/// A drawable carries an ordered list of material textures; the kind of each
/// texture decides the shader uniform name it binds to (see the binding
/// module). Kinds originate from untrusted asset metadata, so an
/// unrecognized label is carried as data and rejected with a typed error at
/// binding time rather than at load time.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::device::Texture;
use crate::error::Result;

/// Role of a material texture, derived from asset metadata
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextureKind {
    /// Base color map
    Diffuse,
    /// Specular intensity map
    Specular,
    /// Tangent-space normal map
    Normal,
    /// Height/displacement map
    Height,
    /// A label outside the recognized set, kept verbatim for error reporting
    Unrecognized(String),
}

impl TextureKind {
    /// Parse an asset metadata label. Both the bare role name ("diffuse")
    /// and the full uniform prefix ("texture_diffuse") are accepted.
    pub fn from_label(label: &str) -> Self {
        match label.strip_prefix("texture_").unwrap_or(label) {
            "diffuse" => TextureKind::Diffuse,
            "specular" => TextureKind::Specular,
            "normal" => TextureKind::Normal,
            "height" => TextureKind::Height,
            _ => TextureKind::Unrecognized(label.to_string()),
        }
    }

    /// Shader uniform prefix for this kind, `None` for unrecognized kinds
    pub fn uniform_prefix(&self) -> Option<&'static str> {
        match self {
            TextureKind::Diffuse => Some("texture_diffuse"),
            TextureKind::Specular => Some("texture_specular"),
            TextureKind::Normal => Some("texture_normal"),
            TextureKind::Height => Some("texture_height"),
            TextureKind::Unrecognized(_) => None,
        }
    }
}

/// A GPU texture plus the metadata needed to bind it to a material sampler
#[derive(Clone)]
pub struct MaterialTexture {
    /// The GPU resource
    pub texture: Arc<dyn Texture>,
    /// Role, decides the uniform name
    pub kind: TextureKind,
    /// Source path, kept for error reporting and cache keys
    pub path: PathBuf,
}

impl MaterialTexture {
    pub fn new(texture: Arc<dyn Texture>, kind: TextureKind, path: impl Into<PathBuf>) -> Self {
        Self {
            texture,
            kind,
            path: path.into(),
        }
    }
}

/// Read a file into memory, mapping I/O failures to [`crate::Error::ResourceLoad`]
/// with the failing path attached.
pub fn read_resource_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        let msg = format!("'{}': {}", path.display(), e);
        crate::render_error!("lumen::Material", "resource load failed for {}", msg);
        crate::Error::ResourceLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
