/// Ping-pong pair — two identically shaped render targets, one read while
/// the other is written.
///
/// The blur stage alternates its write destination between the two members
/// every iteration. Which member holds the final blurred result depends only
/// on the iteration count, so the parity bookkeeping lives here as pure
/// functions the stage (and its tests) share.

use crate::device::GraphicsDevice;
use crate::error::Result;
use super::render_target::{ColorAttachmentSpec, RenderTarget, RenderTargetDesc};

/// Exactly two render targets of identical shape
pub struct PingPongPair {
    targets: [RenderTarget; 2],
}

impl PingPongPair {
    /// Create a pair of single-attachment HDR targets of the given size
    /// (no depth attachment — the blur passes draw a depth-less quad).
    pub fn create(
        device: &mut dyn GraphicsDevice,
        width: u32,
        height: u32,
        label: &str,
    ) -> Result<Self> {
        let member = |suffix: &str| RenderTargetDesc {
            width,
            height,
            colors: vec![ColorAttachmentSpec::hdr()],
            depth_stencil: false,
            label: format!("{}_{}", label, suffix),
        };
        Ok(Self {
            targets: [
                RenderTarget::create(device, &member("a"))?,
                RenderTarget::create(device, &member("b"))?,
            ],
        })
    }

    /// Get a member by index (0 or 1)
    pub fn target(&self, index: u32) -> &RenderTarget {
        &self.targets[(index % 2) as usize]
    }

    /// Member written during iteration `i` (0-indexed)
    pub fn write_index(iteration: u32) -> u32 {
        iteration % 2
    }

    /// Member read during iteration `i` (0-indexed).
    ///
    /// Iteration 0 reads the external bright-pass input instead; this is the
    /// member sampled for every later iteration.
    pub fn read_index(iteration: u32) -> u32 {
        (iteration + 1) % 2
    }

    /// Member holding the final result after `iterations` passes.
    ///
    /// Returns `None` for zero iterations: nothing was written and the
    /// original input is the result (true pass-through).
    pub fn terminal_index(iterations: u32) -> Option<u32> {
        if iterations == 0 {
            None
        } else {
            Some((iterations + 1) % 2)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "ping_pong_tests.rs"]
mod tests;
