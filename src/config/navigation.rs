//! `[navigation]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[navigation]` section in site.toml.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NavigationConfig {
    /// Scroll offset (px) past which the bar switches to its compact style.
    #[serde(default = "defaults::navigation::scrolled_offset")]
    #[educe(Default = defaults::navigation::scrolled_offset())]
    pub scrolled_offset: f64,
}
