//! Progressive-loading animation.
//!
//! A [`ProgressAnimator`] maps elapsed time on a [`Clock`] to a 0..=100
//! percentage and fires a completion callback once, shortly after reaching
//! 100. A [`FrameLoop`] ticks it at a fixed interval.

mod animator;
mod clock;
mod ease;
mod frame;

pub use animator::{CancelToken, Completion, Frame, Phase, ProgressAnimator};
pub use clock::{Clock, ManualClock, SystemClock};
pub use ease::Ease;
pub use frame::FrameLoop;
