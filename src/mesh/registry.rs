/// Drawable registry — stable-keyed storage for everything the capture
/// stage draws each frame.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::error::Result;
use crate::{render_bail, render_debug};
use super::drawable::Drawable;

slotmap::new_key_type! {
    /// Stable handle to a registered drawable
    pub struct DrawableKey;
}

/// Storage for drawables with stable keys and a name index.
///
/// Keys stay valid across removals of other drawables. Names are unique;
/// iteration order is unspecified.
#[derive(Default)]
pub struct DrawableRegistry {
    drawables: SlotMap<DrawableKey, Drawable>,
    names: FxHashMap<String, DrawableKey>,
}

impl DrawableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a drawable under a unique name.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResource` if the name is already taken.
    pub fn insert(&mut self, name: &str, drawable: Drawable) -> Result<DrawableKey> {
        if self.names.contains_key(name) {
            render_bail!("lumen::Registry", InvalidResource,
                "drawable name '{}' is already registered", name);
        }
        let key = self.drawables.insert(drawable);
        self.names.insert(name.to_string(), key);
        render_debug!("lumen::Registry", "registered drawable '{}'", name);
        Ok(key)
    }

    /// Remove a drawable by key, dropping its GPU buffers. Returns it if the
    /// key was live.
    pub fn remove(&mut self, key: DrawableKey) -> Option<Drawable> {
        let removed = self.drawables.remove(key)?;
        self.names.retain(|_, k| *k != key);
        Some(removed)
    }

    pub fn get(&self, key: DrawableKey) -> Option<&Drawable> {
        self.drawables.get(key)
    }

    pub fn get_mut(&mut self, key: DrawableKey) -> Option<&mut Drawable> {
        self.drawables.get_mut(key)
    }

    /// Look up a drawable's key by name
    pub fn key_of(&self, name: &str) -> Option<DrawableKey> {
        self.names.get(name).copied()
    }

    /// Iterate all drawables (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = (DrawableKey, &Drawable)> {
        self.drawables.iter()
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
