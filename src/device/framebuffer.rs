/// Framebuffer trait and descriptor

use std::sync::Arc;

use super::texture::{Texture, TextureFormat};

/// Descriptor for creating a framebuffer
///
/// Color attachments are bound in list order (attachment 0 first). The
/// device validates completeness at creation time: at least one color
/// attachment, every attachment sized `width` x `height`, color formats on
/// color slots. An incomplete configuration fails with
/// `Error::IncompleteTarget`.
#[derive(Clone)]
pub struct FramebufferDesc {
    /// Width in pixels (must match every attachment)
    pub width: u32,
    /// Height in pixels (must match every attachment)
    pub height: u32,
    /// Ordered color attachments (attachment index = list position)
    pub color_attachments: Vec<Arc<dyn Texture>>,
    /// Optional combined depth/stencil attachment format.
    /// The backing storage is owned by the framebuffer (renderbuffer-style),
    /// never sampled by later stages.
    pub depth_stencil: Option<TextureFormat>,
    /// Debug label used in logs and backend error messages
    pub label: String,
}

/// Framebuffer resource trait
///
/// A framebuffer groups attachments into a bindable draw destination.
/// Implemented by backend-specific types.
pub trait Framebuffer: Send + Sync {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Number of color attachments
    fn color_attachment_count(&self) -> usize;
}
