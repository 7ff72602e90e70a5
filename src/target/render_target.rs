/// Render target — an owned set of GPU pixel buffers usable as a draw
/// destination.
///
/// A render target owns its color attachments (created from specs at
/// construction time) plus an optional combined depth/stencil attachment.
/// Attachments are render destinations while the target is bound and may be
/// sampled by later stages once it is released; the two roles must never
/// overlap within one draw call.

use std::sync::Arc;

use crate::device::{
    CommandList, FilterMode, Framebuffer, FramebufferDesc, GraphicsDevice, Texture, TextureDesc,
    TextureFormat, TextureUsage, Viewport, WrapMode,
};
use crate::error::Result;
use crate::{render_bail, render_debug};

/// Specification of one color attachment
#[derive(Debug, Clone)]
pub struct ColorAttachmentSpec {
    /// Pixel format (must be a color format)
    pub format: TextureFormat,
    /// Filtering used when a later stage samples the attachment
    pub filter: FilterMode,
    /// Wrap behavior used when a later stage samples the attachment
    pub wrap: WrapMode,
}

impl ColorAttachmentSpec {
    /// 16-bit float RGBA, linear filtering, clamped — the HDR intermediate
    /// format used by every offscreen target in the bloom pipeline.
    pub fn hdr() -> Self {
        Self {
            format: TextureFormat::Rgba16Float,
            filter: FilterMode::Linear,
            wrap: WrapMode::ClampToEdge,
        }
    }
}

/// Descriptor for creating a render target
#[derive(Debug, Clone)]
pub struct RenderTargetDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Ordered color attachments (attachment index = list position)
    pub colors: Vec<ColorAttachmentSpec>,
    /// Whether to attach a combined depth24/stencil8 buffer
    pub depth_stencil: bool,
    /// Debug label used in logs
    pub label: String,
}

/// An owned collection of GPU color buffers plus optional depth/stencil
/// buffer, bindable as the active draw destination.
///
/// Created once at startup sized to the window resolution; recreated only by
/// the between-frames resize path. All GPU memory is released
/// deterministically on drop.
pub struct RenderTarget {
    width: u32,
    height: u32,
    colors: Vec<Arc<dyn Texture>>,
    framebuffer: Arc<dyn Framebuffer>,
    label: String,
}

impl RenderTarget {
    /// Create a render target, validating completeness.
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompleteTarget` if the descriptor has no color
    /// attachments, a zero dimension, or a non-color attachment format —
    /// and propagates the device's own completeness verdict.
    pub fn create(device: &mut dyn GraphicsDevice, desc: &RenderTargetDesc) -> Result<Self> {
        if desc.colors.is_empty() {
            render_bail!("lumen::Target", IncompleteTarget,
                "render target '{}' has no color attachments", desc.label);
        }
        if desc.width == 0 || desc.height == 0 {
            render_bail!("lumen::Target", IncompleteTarget,
                "render target '{}' has zero dimension {}x{}",
                desc.label, desc.width, desc.height);
        }

        let mut colors: Vec<Arc<dyn Texture>> = Vec::with_capacity(desc.colors.len());
        for (i, spec) in desc.colors.iter().enumerate() {
            if !spec.format.is_color() {
                render_bail!("lumen::Target", IncompleteTarget,
                    "render target '{}' attachment {} has non-color format {:?}",
                    desc.label, i, spec.format);
            }
            let texture = device.create_texture(&TextureDesc {
                width: desc.width,
                height: desc.height,
                format: spec.format,
                usage: TextureUsage::SampledAndRenderTarget,
                filter: spec.filter,
                wrap: spec.wrap,
                data: None,
            })?;
            colors.push(texture);
        }

        let framebuffer = device.create_framebuffer(&FramebufferDesc {
            width: desc.width,
            height: desc.height,
            color_attachments: colors.clone(),
            depth_stencil: desc.depth_stencil.then_some(TextureFormat::Depth24Stencil8),
            label: desc.label.clone(),
        })?;

        render_debug!("lumen::Target",
            "created render target '{}' {}x{} ({} color attachment(s), depth: {})",
            desc.label, desc.width, desc.height, colors.len(), desc.depth_stencil);

        Ok(Self {
            width: desc.width,
            height: desc.height,
            colors,
            framebuffer,
            label: desc.label.clone(),
        })
    }

    /// Bind as the active draw destination and set the matching viewport.
    ///
    /// Binding changes global draw-destination state: callers must pair every
    /// bind with [`RenderTarget::release`] before the next stage starts.
    pub fn bind(&self, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.bind_framebuffer(&self.framebuffer)?;
        cmd.set_viewport(Viewport::full(self.width, self.height))
    }

    /// Restore the default visible surface as the active draw destination.
    pub fn release(cmd: &mut dyn CommandList) -> Result<()> {
        cmd.bind_default_framebuffer()
    }

    /// Get a color attachment by index, for sampling in a later stage
    pub fn color(&self, index: usize) -> Result<&Arc<dyn Texture>> {
        match self.colors.get(index) {
            Some(texture) => Ok(texture),
            None => render_bail!("lumen::Target", InvalidResource,
                "render target '{}' has no color attachment {} ({} present)",
                self.label, index, self.colors.len()),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of color attachments
    pub fn color_count(&self) -> usize {
        self.colors.len()
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
#[path = "render_target_tests.rs"]
mod tests;
