//! Scoring strategies.
//!
//! Both strategies honor the same contract: display score in [0, 99],
//! exactly one category, and an `Err` (never a panic) when a required
//! resource is missing so the evaluator can fail closed.

pub mod additive;
pub mod model;

pub use additive::AdditiveStrategy;
pub use model::{ModelResources, ModelStrategy};

use wardrisk_core::errors::WardRiskResult;
use wardrisk_core::models::{DisplayScore, RiskCategory, RiskCutoffs, StrategyKind};

use crate::rules::RuleHit;
use crate::sanitize::SanitizedInput;

/// Score produced by a strategy, before factors are attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub raw: f64,
    pub display: DisplayScore,
    pub category: RiskCategory,
}

/// A way of turning sanitized input into a score.
pub trait ScoringStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Score one patient. `hits` are the rule hits for the same input.
    fn score(&self, input: &SanitizedInput, hits: &[RuleHit]) -> WardRiskResult<Scored>;

    /// Cutoffs in use, if the strategy has any.
    fn cutoffs(&self) -> Option<RiskCutoffs>;

    /// Why the strategy cannot score, if it cannot.
    fn unavailable_reason(&self) -> Option<&str> {
        None
    }
}
