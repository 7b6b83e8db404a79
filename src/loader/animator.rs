//! Time-driven 0→100 progress with a one-shot completion callback.
//!
//! ```text
//!  Running ──(progress hits 100)──► Settling ──(settle elapsed)──► Done
//!     │                                │                      (callback fires)
//!     └────────────(cancel)────────────┴──────► Cancelled
//! ```

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use crate::config::LoaderConfig;

use super::{clock::Clock, ease::Ease};

pub type Completion = Box<dyn FnOnce()>;

/// Where an animator is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Running,
    Settling,
    Done,
    Cancelled,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

/// Snapshot returned by each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub progress: u8,
    pub phase: Phase,
}

/// Cross-thread cancel flag shared between an animator and whoever stops it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drives progress from a [`Clock`].
///
/// Progress is `round(ease(elapsed / duration) * 100)`, never decreases and
/// reaches exactly 100 once `duration` has elapsed. The completion callback
/// runs once, `settle` after that, unless the run is cancelled first. With
/// reduced motion the first tick jumps straight to 100.
pub struct ProgressAnimator<C: Clock> {
    clock: C,
    ease: Ease,
    duration: Duration,
    settle: Duration,
    reduced_motion: bool,
    started: Duration,
    progress: u8,
    phase: Phase,
    reached_full: Option<Duration>,
    on_complete: Option<Completion>,
    cancel: CancelToken,
}

impl<C: Clock> ProgressAnimator<C> {
    /// Start a run now.
    pub fn new(clock: C, duration: Duration, settle: Duration) -> Self {
        let started = clock.now();
        Self {
            clock,
            ease: Ease::OutCubic,
            duration,
            settle,
            reduced_motion: false,
            started,
            progress: 0,
            phase: Phase::Running,
            reached_full: None,
            on_complete: None,
            cancel: CancelToken::new(),
        }
    }

    /// Start a run with the `[loader]` timings.
    pub fn from_config(clock: C, config: &LoaderConfig) -> Self {
        Self::new(clock, config.duration(), config.settle()).reduced_motion(config.reduced_motion)
    }

    pub fn reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Share an external cancel flag, e.g. one set from a signal handler.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Stop the run. Completion will not fire.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.stop();
    }

    /// Advance to the clock's current time.
    pub fn tick(&mut self) -> Frame {
        if self.cancel.is_cancelled() && !self.phase.is_finished() {
            self.stop();
        }

        let now = self.clock.now();

        if self.phase == Phase::Running {
            let elapsed = now.saturating_sub(self.started);
            let full = self.reduced_motion || elapsed >= self.duration;
            let progress = if full { 100 } else { self.progress_at(elapsed) };
            self.progress = self.progress.max(progress);
            if full {
                self.phase = Phase::Settling;
                self.reached_full = Some(now);
            }
        }

        if self.phase == Phase::Settling
            && self
                .reached_full
                .is_some_and(|at| now.saturating_sub(at) >= self.settle)
        {
            self.phase = Phase::Done;
            if let Some(f) = self.on_complete.take() {
                f();
            }
        }

        self.frame()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            progress: self.progress,
            phase: self.phase,
        }
    }

    /// Rounding can show 100 slightly before `duration`; the phase only
    /// changes once the full duration has elapsed.
    fn progress_at(&self, elapsed: Duration) -> u8 {
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.ease.percent(t)
    }

    fn stop(&mut self) {
        if self.phase.is_finished() {
            return;
        }
        self.phase = Phase::Cancelled;
        self.on_complete = None;
    }
}

impl<C: Clock> std::fmt::Debug for ProgressAnimator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressAnimator")
            .field("progress", &self.progress)
            .field("phase", &self.phase)
            .field("duration", &self.duration)
            .field("settle", &self.settle)
            .field("reduced_motion", &self.reduced_motion)
            .finish_non_exhaustive()
    }
}
