//! Fixed-interval frame driver.

use std::time::Duration;

use super::animator::{CancelToken, Frame, Phase, ProgressAnimator};
use super::clock::Clock;

/// Ticks an animator at a fixed interval on the calling thread.
///
/// The loop owns its animator; dropping the loop cancels an unfinished run.
pub struct FrameLoop<C: Clock> {
    animator: ProgressAnimator<C>,
    interval: Duration,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(animator: ProgressAnimator<C>, interval: Duration) -> Self {
        Self {
            animator,
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.animator.cancel_token()
    }

    pub fn animator(&self) -> &ProgressAnimator<C> {
        &self.animator
    }

    /// Run to completion or cancellation, sleeping between frames.
    pub fn run(&mut self, on_frame: impl FnMut(Frame)) -> Phase {
        self.run_with(on_frame, std::thread::sleep)
    }

    /// Like [`run`](Self::run) with a custom wait between frames.
    pub fn run_with(
        &mut self,
        mut on_frame: impl FnMut(Frame),
        mut wait: impl FnMut(Duration),
    ) -> Phase {
        loop {
            let frame = self.animator.tick();
            on_frame(frame);
            if frame.phase.is_finished() {
                return frame.phase;
            }
            wait(self.interval);
        }
    }
}

impl<C: Clock> Drop for FrameLoop<C> {
    fn drop(&mut self) {
        self.animator.cancel();
    }
}
