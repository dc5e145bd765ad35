//! Cutoff and reference-distribution errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CutoffError {
    #[error("reference distribution has no finite scores")]
    EmptyReference,

    #[error("percentile {value} outside [0, 100]")]
    InvalidPercentile { value: f64 },

    #[error("cutoffs out of order: medium {medium} above high {high}")]
    Unordered { high: f64, medium: f64 },

    #[error("cutoff {name} is not finite")]
    NonFinite { name: String },
}

impl ErrorCode for CutoffError {
    fn error_code(&self) -> &'static str {
        error_code::CUTOFF_ERROR
    }
}
