/// Composite stage — additively combines the base image and the blurred
/// highlights onto the default visible surface.

use std::sync::Arc;

use crate::device::{ClearFlags, CommandList, GraphicsDevice, Program, Texture, UniformValue, Viewport};
use crate::error::Result;
use super::quad::FullscreenQuad;
use super::shaders;

pub struct CompositeStage {
    program: Arc<dyn Program>,
}

impl CompositeStage {
    pub fn new(device: &mut dyn GraphicsDevice) -> Result<Self> {
        Ok(Self {
            program: shaders::create_composite_program(device)?,
        })
    }

    /// Draw one quad to the default surface with `base` on unit 0 and
    /// `highlights` on unit 1. Depth testing is off for the whole pass.
    pub fn run(
        &self,
        cmd: &mut dyn CommandList,
        quad: &FullscreenQuad,
        width: u32,
        height: u32,
        base: &Arc<dyn Texture>,
        highlights: &Arc<dyn Texture>,
    ) -> Result<()> {
        cmd.bind_default_framebuffer()?;
        cmd.set_viewport(Viewport::full(width, height))?;
        cmd.clear(ClearFlags::COLOR, [0.0, 0.0, 0.0, 1.0])?;
        cmd.set_depth_test(false)?;

        cmd.bind_program(&self.program)?;
        cmd.bind_texture(0, base)?;
        cmd.set_uniform("baseImage", UniformValue::Int(0))?;
        cmd.bind_texture(1, highlights)?;
        cmd.set_uniform("highlights", UniformValue::Int(1))?;

        quad.draw(cmd)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "composite_tests.rs"]
mod tests;
