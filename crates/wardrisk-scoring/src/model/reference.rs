//! Reference score distribution and percentile cutoffs.

use wardrisk_core::errors::CutoffError;
use wardrisk_core::models::RiskCutoffs;

/// Historical raw scores, sorted ascending. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDistribution {
    sorted: Vec<f64>,
}

impl ReferenceDistribution {
    /// Build from raw scores. Non-finite values are dropped.
    pub fn new(scores: impl IntoIterator<Item = f64>) -> Result<Self, CutoffError> {
        let mut sorted: Vec<f64> = scores.into_iter().filter(|s| s.is_finite()).collect();
        if sorted.is_empty() {
            return Err(CutoffError::EmptyReference);
        }
        sorted.sort_by(|a, b| a.total_cmp(b));
        Ok(Self { sorted })
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Percentile `q` in [0, 100], linearly interpolated between the two
    /// closest ranks (`rank = q / 100 × (n − 1)`).
    pub fn percentile(&self, q: f64) -> Result<f64, CutoffError> {
        if !(0.0..=100.0).contains(&q) {
            return Err(CutoffError::InvalidPercentile { value: q });
        }
        let rank = q / 100.0 * (self.sorted.len() - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let (a, b) = (self.sorted[lo], self.sorted[hi]);
        Ok(a + (b - a) * (rank - lo as f64))
    }

    /// Cutoffs at the given high / medium percentiles.
    pub fn cutoffs(&self, high_pct: f64, medium_pct: f64) -> Result<RiskCutoffs, CutoffError> {
        let high = self.percentile(high_pct)?;
        let medium = self.percentile(medium_pct)?;
        if medium_pct > high_pct {
            return Err(CutoffError::Unordered { high, medium });
        }
        RiskCutoffs::new(high, medium)
    }
}
