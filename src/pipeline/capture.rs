/// Capture stage — rasterizes the scene into a dual-output HDR target.
///
/// Color attachment 0 receives the full shaded color, attachment 1 the
/// luminance-thresholded bright pass. Both are produced by one draw per
/// drawable; the split happens in the scene fragment shader.

use std::sync::Arc;

use crate::device::{ClearFlags, CommandList, GraphicsDevice, Texture, UniformValue};
use crate::error::Result;
use crate::mesh::Drawable;
use crate::target::{ColorAttachmentSpec, RenderTarget, RenderTargetDesc};
use super::context::FrameContext;

/// Attachment index of the full shaded output
pub const BASE_ATTACHMENT: usize = 0;
/// Attachment index of the thresholded bright output
pub const BRIGHT_ATTACHMENT: usize = 1;

pub struct CaptureStage {
    target: RenderTarget,
}

impl CaptureStage {
    /// Create the capture target: two HDR color attachments plus a combined
    /// depth/stencil buffer, sized to the output resolution.
    pub fn new(device: &mut dyn GraphicsDevice, width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            target: Self::create_target(device, width, height)?,
        })
    }

    fn create_target(
        device: &mut dyn GraphicsDevice,
        width: u32,
        height: u32,
    ) -> Result<RenderTarget> {
        RenderTarget::create(device, &RenderTargetDesc {
            width,
            height,
            colors: vec![ColorAttachmentSpec::hdr(), ColorAttachmentSpec::hdr()],
            depth_stencil: true,
            label: "capture".to_string(),
        })
    }

    /// Recreate the target at a new resolution. Only valid between frames.
    pub fn resize(&mut self, device: &mut dyn GraphicsDevice, width: u32, height: u32) -> Result<()> {
        self.target = Self::create_target(device, width, height)?;
        Ok(())
    }

    /// Draw every drawable into the capture target.
    ///
    /// Binds the target, clears color and depth, enables depth testing, then
    /// for each drawable binds its program, uploads the scene uniforms and
    /// draws it. The default surface is restored before returning.
    pub fn run<'a>(
        &self,
        cmd: &mut dyn CommandList,
        ctx: &FrameContext,
        drawables: impl Iterator<Item = &'a Drawable>,
    ) -> Result<()> {
        self.target.bind(cmd)?;
        cmd.clear(ClearFlags::COLOR | ClearFlags::DEPTH, ctx.clear_color)?;
        cmd.set_depth_test(true)?;

        for drawable in drawables {
            cmd.bind_program(&drawable.program)?;
            upload_scene_uniforms(cmd, ctx, drawable)?;
            drawable.draw(cmd)?;
        }

        RenderTarget::release(cmd)
    }

    /// The full shaded output, for the composite stage
    pub fn base_output(&self) -> Result<&Arc<dyn Texture>> {
        self.target.color(BASE_ATTACHMENT)
    }

    /// The thresholded bright output, for the blur stage
    pub fn bright_output(&self) -> Result<&Arc<dyn Texture>> {
        self.target.color(BRIGHT_ATTACHMENT)
    }

    pub fn width(&self) -> u32 {
        self.target.width()
    }

    pub fn height(&self) -> u32 {
        self.target.height()
    }
}

fn upload_scene_uniforms(
    cmd: &mut dyn CommandList,
    ctx: &FrameContext,
    drawable: &Drawable,
) -> Result<()> {
    cmd.set_uniform("view", UniformValue::Mat4(ctx.view))?;
    cmd.set_uniform("projection", UniformValue::Mat4(ctx.projection))?;
    cmd.set_uniform("model", UniformValue::Mat4(drawable.model))?;
    cmd.set_uniform("viewPosition", UniformValue::Vec3(ctx.camera_position))?;
    cmd.set_uniform("viewDirection", UniformValue::Vec3(ctx.camera_front))?;
    cmd.set_uniform("brightThreshold", UniformValue::Float(ctx.bright_threshold))?;

    let light = &ctx.point_light;
    cmd.set_uniform("pointLight.position", UniformValue::Vec3(light.position))?;
    cmd.set_uniform("pointLight.ambient", UniformValue::Vec3(light.ambient))?;
    cmd.set_uniform("pointLight.diffuse", UniformValue::Vec3(light.diffuse))?;
    cmd.set_uniform("pointLight.specular", UniformValue::Vec3(light.specular))?;
    cmd.set_uniform("pointLight.constant", UniformValue::Float(light.constant))?;
    cmd.set_uniform("pointLight.linear", UniformValue::Float(light.linear))?;
    cmd.set_uniform("pointLight.quadratic", UniformValue::Float(light.quadratic))?;

    let spot = &ctx.spot_light;
    cmd.set_uniform("spotLight.enabled", UniformValue::Bool(spot.enabled))?;
    cmd.set_uniform("spotLight.cutOff", UniformValue::Float(spot.cut_off))?;
    cmd.set_uniform("spotLight.outerCutOff", UniformValue::Float(spot.outer_cut_off))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
