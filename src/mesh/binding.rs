/// Sampler binding protocol.
///
/// The rule the capture shaders rely on: texture unit = position in the
/// drawable's texture list, uniform name = kind prefix plus a 1-based
/// counter that increments independently per kind. A list of
/// [diffuse, specular, diffuse] therefore binds `texture_diffuse1` to
/// unit 0, `texture_specular1` to unit 1 and `texture_diffuse2` to unit 2.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::render_bail;
use super::material::MaterialTexture;

/// One resolved sampler binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerBinding {
    /// Texture unit (list position)
    pub unit: u32,
    /// Shader uniform name, e.g. `texture_diffuse1`
    pub uniform: String,
}

/// Resolve the full binding list for a drawable's textures.
///
/// Pure: no GPU state is touched. Callers compute the bindings before
/// issuing any commands so an unrecognized kind fails the draw up front
/// instead of leaving units half-bound.
///
/// # Errors
///
/// Returns `Error::UnknownTextureKind` if any texture has an unrecognized
/// kind. Skipping it silently would shift the units of every texture after
/// it, so the whole list is rejected.
pub fn sampler_bindings(textures: &[MaterialTexture]) -> Result<Vec<SamplerBinding>> {
    let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
    let mut bindings = Vec::with_capacity(textures.len());

    for (unit, texture) in textures.iter().enumerate() {
        let Some(prefix) = texture.kind.uniform_prefix() else {
            render_bail!("lumen::Binding", UnknownTextureKind,
                "texture '{}' has unrecognized kind {:?}",
                texture.path.display(), texture.kind);
        };
        let count = counts.entry(prefix).or_insert(0);
        *count += 1;
        bindings.push(SamplerBinding {
            unit: unit as u32,
            uniform: format!("{}{}", prefix, count),
        });
    }

    Ok(bindings)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
