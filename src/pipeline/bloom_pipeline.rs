/// Bloom pipeline — owns the three stages and runs them in order each
/// frame: capture, blur, composite.

use crate::device::{CommandList, GraphicsDevice};
use crate::error::Result;
use crate::mesh::DrawableRegistry;
use crate::render_info;
use super::blur::BlurStage;
use super::capture::CaptureStage;
use super::composite::CompositeStage;
use super::context::FrameContext;
use super::quad::FullscreenQuad;

/// Pipeline configuration, fixed at creation (resolution may change later
/// through [`BloomPipeline::resize`]).
#[derive(Debug, Clone, Copy)]
pub struct PipelineDesc {
    /// Output resolution width in pixels
    pub width: u32,
    /// Output resolution height in pixels
    pub height: u32,
    /// Number of blur passes over the bright output. Zero disables the
    /// blur entirely; the raw bright output is composited as-is.
    pub blur_iterations: u32,
}

impl Default for PipelineDesc {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            blur_iterations: 15,
        }
    }
}

/// The full offscreen bloom pipeline.
///
/// All GPU resources (targets, programs, the shared fullscreen quad) are
/// created up front; per-frame work is pure command recording.
pub struct BloomPipeline {
    desc: PipelineDesc,
    capture: CaptureStage,
    blur: BlurStage,
    composite: CompositeStage,
    quad: FullscreenQuad,
}

impl BloomPipeline {
    pub fn new(device: &mut dyn GraphicsDevice, desc: PipelineDesc) -> Result<Self> {
        let capture = CaptureStage::new(device, desc.width, desc.height)?;
        let blur = BlurStage::new(device, desc.width, desc.height)?;
        let composite = CompositeStage::new(device)?;
        let quad = FullscreenQuad::new(device)?;

        render_info!("lumen::Pipeline",
            "bloom pipeline ready at {}x{}, {} blur iteration(s)",
            desc.width, desc.height, desc.blur_iterations);

        Ok(Self {
            desc,
            capture,
            blur,
            composite,
            quad,
        })
    }

    /// Record one full frame into `cmd`: capture the scene, blur the bright
    /// output, composite onto the default surface.
    pub fn render_frame(
        &self,
        cmd: &mut dyn CommandList,
        ctx: &FrameContext,
        registry: &DrawableRegistry,
    ) -> Result<()> {
        cmd.begin()?;

        self.capture.run(cmd, ctx, registry.iter().map(|(_, d)| d))?;

        let bright = self.capture.bright_output()?;
        let blurred = self.blur.run(cmd, &self.quad, bright, self.desc.blur_iterations)?;

        let base = self.capture.base_output()?;
        self.composite.run(
            cmd,
            &self.quad,
            self.desc.width,
            self.desc.height,
            base,
            &blurred,
        )?;

        cmd.end()
    }

    /// Record and submit one frame through a fresh command list
    pub fn render(
        &self,
        device: &mut dyn GraphicsDevice,
        ctx: &FrameContext,
        registry: &DrawableRegistry,
    ) -> Result<()> {
        let mut cmd = device.create_command_list()?;
        self.render_frame(cmd.as_mut(), ctx, registry)?;
        device.submit(cmd.as_ref())
    }

    /// Recreate every offscreen target at a new resolution.
    ///
    /// Must only be called between frames: any texture previously obtained
    /// from the capture or blur stages is stale afterwards.
    pub fn resize(&mut self, device: &mut dyn GraphicsDevice, width: u32, height: u32) -> Result<()> {
        if width == self.desc.width && height == self.desc.height {
            return Ok(());
        }
        self.capture.resize(device, width, height)?;
        self.blur.resize(device, width, height)?;
        self.desc.width = width;
        self.desc.height = height;
        render_info!("lumen::Pipeline", "resized to {}x{}", width, height);
        Ok(())
    }

    pub fn desc(&self) -> &PipelineDesc {
        &self.desc
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "bloom_pipeline_tests.rs"]
mod tests;
