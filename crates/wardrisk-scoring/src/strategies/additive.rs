use wardrisk_core::errors::WardRiskResult;
use wardrisk_core::models::{DisplayScore, RiskCutoffs, StrategyKind};

use super::{Scored, ScoringStrategy};
use crate::rules::{self, RuleHit};
use crate::sanitize::SanitizedInput;

/// Fixed rule points summed; raw score is the unclamped total, display
/// score the total clamped to 99.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveStrategy {
    cutoffs: RiskCutoffs,
}

impl AdditiveStrategy {
    pub fn new(cutoffs: RiskCutoffs) -> Self {
        Self { cutoffs }
    }

    /// Score a hit list directly.
    pub fn score_hits(&self, hits: &[RuleHit]) -> Scored {
        let raw = f64::from(rules::total_points(hits));
        Scored {
            raw,
            display: DisplayScore::from_points(raw),
            category: self.cutoffs.categorize(raw),
        }
    }
}

impl ScoringStrategy for AdditiveStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Additive
    }

    fn score(&self, _input: &SanitizedInput, hits: &[RuleHit]) -> WardRiskResult<Scored> {
        Ok(self.score_hits(hits))
    }

    fn cutoffs(&self) -> Option<RiskCutoffs> {
        Some(self.cutoffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrisk_core::models::{RiskCategory, RiskFactor};

    fn hit(factor: RiskFactor, points: u32) -> RuleHit {
        RuleHit { factor, points }
    }

    #[test]
    fn empty_hits_score_zero_low() {
        let scored = AdditiveStrategy::default().score_hits(&[]);
        assert_eq!(scored.raw, 0.0);
        assert_eq!(scored.display.value(), 0);
        assert_eq!(scored.category, RiskCategory::Low);
    }

    #[test]
    fn total_above_99_clamps_display_not_raw() {
        let hits: Vec<RuleHit> = RiskFactor::ALL.iter().map(|f| hit(*f, 20)).collect();
        let scored = AdditiveStrategy::default().score_hits(&hits);
        assert_eq!(scored.raw, 200.0);
        assert_eq!(scored.display.value(), 99);
        assert_eq!(scored.category, RiskCategory::High);
    }

    #[test]
    fn medium_band() {
        let hits = [
            hit(RiskFactor::LowAlbumin, 20),
            hit(RiskFactor::Hypotension, 20),
        ];
        let scored = AdditiveStrategy::default().score_hits(&hits);
        assert_eq!(scored.raw, 40.0);
        assert_eq!(scored.category, RiskCategory::Medium);
    }
}
