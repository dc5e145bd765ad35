use serde::{Deserialize, Serialize};

use super::defaults;

/// Category cutoffs for both scoring strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutoffConfig {
    /// Point total at or above which the additive strategy reports high.
    pub additive_high: f64,
    /// Point total at or above which the additive strategy reports medium.
    pub additive_medium: f64,
    /// Reference-distribution percentile used as the model high cutoff.
    pub high_percentile: f64,
    /// Reference-distribution percentile used as the model medium cutoff.
    pub medium_percentile: f64,
}

impl Default for CutoffConfig {
    fn default() -> Self {
        Self {
            additive_high: defaults::DEFAULT_ADDITIVE_HIGH_CUTOFF,
            additive_medium: defaults::DEFAULT_ADDITIVE_MEDIUM_CUTOFF,
            high_percentile: defaults::DEFAULT_HIGH_PERCENTILE,
            medium_percentile: defaults::DEFAULT_MEDIUM_PERCENTILE,
        }
    }
}
