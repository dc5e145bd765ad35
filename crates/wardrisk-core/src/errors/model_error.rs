//! Classifier errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while loading or invoking a risk classifier.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid model weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("feature count mismatch: expected {expected}, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("probability {value} outside [0, 1]")]
    ProbabilityOutOfRange { value: f64 },
}

impl ErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
