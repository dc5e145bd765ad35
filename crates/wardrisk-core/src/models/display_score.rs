use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::MAX_DISPLAY_SCORE;

/// The 0–99 "risk points" value rendered to nurses.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct DisplayScore(u8);

impl DisplayScore {
    pub const MIN: DisplayScore = DisplayScore(0);
    pub const MAX: DisplayScore = DisplayScore(MAX_DISPLAY_SCORE);

    /// Create a display score, clamping to [0, 99].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_DISPLAY_SCORE))
    }

    /// Map an additive point total to a display score.
    ///
    /// Floors, then clamps to [0, 99]. Non-finite totals map to 0.
    pub fn from_points(points: f64) -> Self {
        Self::from_scaled(points)
    }

    /// Map a probability in [0, 1] to a display score: `floor(p × 100)`,
    /// clamped to [0, 99].
    pub fn from_probability(probability: f64) -> Self {
        Self::from_scaled(probability * 100.0)
    }

    fn from_scaled(scaled: f64) -> Self {
        if !scaled.is_finite() {
            return Self::MIN;
        }
        let clamped = scaled.floor().clamp(0.0, f64::from(MAX_DISPLAY_SCORE));
        Self(clamped as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DisplayScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DisplayScore> for u8 {
    fn from(score: DisplayScore) -> Self {
        score.0
    }
}
