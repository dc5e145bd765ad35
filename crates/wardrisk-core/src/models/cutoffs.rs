use serde::Serialize;
use ts_rs::TS;

use super::RiskCategory;
use crate::config::defaults;
use crate::errors::CutoffError;

/// Two raw-score thresholds partitioning the raw domain into
/// high / medium / low.
///
/// `medium <= high` always holds. When they are equal the medium band is
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct RiskCutoffs {
    high: f64,
    medium: f64,
}

impl Default for RiskCutoffs {
    /// The additive point cutoffs: high at 70, medium at 40.
    fn default() -> Self {
        Self {
            high: defaults::DEFAULT_ADDITIVE_HIGH_CUTOFF,
            medium: defaults::DEFAULT_ADDITIVE_MEDIUM_CUTOFF,
        }
    }
}

impl RiskCutoffs {
    pub fn new(high: f64, medium: f64) -> Result<Self, CutoffError> {
        if !high.is_finite() {
            return Err(CutoffError::NonFinite {
                name: "high".to_string(),
            });
        }
        if !medium.is_finite() {
            return Err(CutoffError::NonFinite {
                name: "medium".to_string(),
            });
        }
        if medium > high {
            return Err(CutoffError::Unordered { high, medium });
        }
        Ok(Self { high, medium })
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn medium(&self) -> f64 {
        self.medium
    }

    /// `High` iff `raw >= high`, `Medium` iff `medium <= raw < high`,
    /// `Low` otherwise (including NaN).
    pub fn categorize(&self, raw: f64) -> RiskCategory {
        if raw >= self.high {
            RiskCategory::High
        } else if raw >= self.medium {
            RiskCategory::Medium
        } else {
            RiskCategory::Low
        }
    }
}
