//! `[loader]` section configuration.
//!
//! Timing of the page loading animation.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `[loader]` section in site.toml.
///
/// # Example
/// ```toml
/// [loader]
/// duration_ms = 1800
/// reduced_motion = true   # skip straight to 100%
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Time for progress to go from 0 to 100.
    #[serde(default = "defaults::loader::duration_ms")]
    #[educe(Default = defaults::loader::duration_ms())]
    pub duration_ms: u64,

    /// Pause after reaching 100 before completion fires.
    #[serde(default = "defaults::loader::settle_ms")]
    #[educe(Default = defaults::loader::settle_ms())]
    pub settle_ms: u64,

    /// Pause before completion when motion is reduced.
    #[serde(default = "defaults::loader::reduced_motion_settle_ms")]
    #[educe(Default = defaults::loader::reduced_motion_settle_ms())]
    pub reduced_motion_settle_ms: u64,

    /// Honor a reduced-motion preference.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub reduced_motion: bool,

    /// Interval between animation frames.
    #[serde(default = "defaults::loader::frame_ms")]
    #[educe(Default = defaults::loader::frame_ms())]
    pub frame_ms: u64,
}

impl LoaderConfig {
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Trailing delay before completion, depending on the motion preference.
    pub const fn settle(&self) -> Duration {
        if self.reduced_motion {
            Duration::from_millis(self.reduced_motion_settle_ms)
        } else {
            Duration::from_millis(self.settle_ms)
        }
    }

    pub const fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
