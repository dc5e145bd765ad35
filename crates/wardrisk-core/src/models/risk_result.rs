use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{DisplayScore, RiskCategory, RiskFactor, StrategyKind};

/// Output of one evaluation. Created fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    pub display_score: DisplayScore,
    /// Point total (additive) or probability (model), before clamping.
    pub raw_score: f64,
    pub category: RiskCategory,
    /// Triggered factors in rule declaration order.
    pub factors: Vec<RiskFactor>,
    pub strategy: StrategyKind,
}

impl RiskResult {
    /// The fail-closed result: score 0, lowest category.
    pub fn fail_closed(strategy: StrategyKind, factors: Vec<RiskFactor>) -> Self {
        Self {
            display_score: DisplayScore::MIN,
            raw_score: 0.0,
            category: RiskCategory::Low,
            factors,
            strategy,
        }
    }

    pub fn has_factor(&self, factor: RiskFactor) -> bool {
        self.factors.contains(&factor)
    }

    /// Factor labels in order, ready for display.
    pub fn factor_labels(&self) -> Vec<&'static str> {
        self.factors.iter().map(|f| f.label()).collect()
    }
}
