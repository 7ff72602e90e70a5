/// Blur stage — repeated single-direction Gaussian blur over a ping-pong
/// pair.
///
/// Each iteration draws one quad pass: the blur kernel runs along one axis,
/// flipped every iteration by the `horizontal` flag, while reads and writes
/// alternate between the two pair members. Iteration 0 samples the external
/// input (the capture stage's bright output); every later iteration samples
/// the member the previous one wrote. The iteration count therefore decides
/// both the softness and which member holds the result.

use std::sync::Arc;

use crate::device::{ClearFlags, CommandList, GraphicsDevice, Program, Texture, UniformValue};
use crate::error::Result;
use crate::target::{PingPongPair, RenderTarget};
use super::quad::FullscreenQuad;
use super::shaders;

pub struct BlurStage {
    pair: PingPongPair,
    program: Arc<dyn Program>,
}

impl BlurStage {
    pub fn new(device: &mut dyn GraphicsDevice, width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            pair: PingPongPair::create(device, width, height, "blur")?,
            program: shaders::create_blur_program(device)?,
        })
    }

    /// Recreate the ping-pong pair at a new resolution. Only valid between
    /// frames.
    pub fn resize(&mut self, device: &mut dyn GraphicsDevice, width: u32, height: u32) -> Result<()> {
        self.pair = PingPongPair::create(device, width, height, "blur")?;
        Ok(())
    }

    /// Run `iterations` blur passes over `input` and return the texture
    /// holding the result.
    ///
    /// Zero iterations is a true pass-through: no commands are recorded and
    /// the input itself is returned.
    pub fn run(
        &self,
        cmd: &mut dyn CommandList,
        quad: &FullscreenQuad,
        input: &Arc<dyn Texture>,
        iterations: u32,
    ) -> Result<Arc<dyn Texture>> {
        if iterations == 0 {
            return Ok(Arc::clone(input));
        }

        cmd.set_depth_test(false)?;
        cmd.bind_program(&self.program)?;
        cmd.set_uniform("sourceImage", UniformValue::Int(0))?;

        for i in 0..iterations {
            let destination = self.pair.target(PingPongPair::write_index(i));
            destination.bind(cmd)?;
            cmd.clear(ClearFlags::COLOR, [0.0, 0.0, 0.0, 1.0])?;
            cmd.set_uniform("horizontal", UniformValue::Bool(i % 2 == 0))?;

            let source = if i == 0 {
                input
            } else {
                self.pair.target(PingPongPair::read_index(i)).color(0)?
            };
            cmd.bind_texture(0, source)?;

            quad.draw(cmd)?;
        }

        RenderTarget::release(cmd)?;

        // iterations >= 1 here, terminal_index is always Some
        match PingPongPair::terminal_index(iterations) {
            Some(index) => Ok(Arc::clone(self.pair.target(index).color(0)?)),
            None => Ok(Arc::clone(input)),
        }
    }

    #[cfg(test)]
    pub(crate) fn pair_member_color(&self, index: u32) -> &Arc<dyn Texture> {
        self.pair.target(index).color(0).unwrap()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "blur_tests.rs"]
mod tests;
