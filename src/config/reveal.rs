//! `[reveal]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[reveal]` section in site.toml - scroll reveal tuning.
///
/// # Example
/// ```toml
/// [reveal]
/// threshold = 0.25   # a quarter of the section must be visible
/// stagger_ms = 80
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RevealConfig {
    /// Fraction of a section that must be visible before it reveals.
    #[serde(default = "defaults::reveal::threshold")]
    #[educe(Default = defaults::reveal::threshold())]
    pub threshold: f64,

    /// Delay step between consecutive list items of a revealed section.
    #[serde(default = "defaults::reveal::stagger_ms")]
    #[educe(Default = defaults::reveal::stagger_ms())]
    pub stagger_ms: u64,
}
