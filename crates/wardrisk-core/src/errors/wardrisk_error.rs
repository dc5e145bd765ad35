use super::error_code::{self, ErrorCode};
use super::{ConfigError, CutoffError, ModelError, SchemaError};

/// Top-level error for the workspace.
///
/// None of these are fatal to an evaluation: `ConfigurationUnavailable`
/// makes the evaluator fail closed and `InvalidInput` is answered with a
/// default substitution. They surface as `Err` only from constructors.
#[derive(Debug, thiserror::Error)]
pub enum WardRiskError {
    #[error("configuration unavailable: {resource}: {reason}")]
    ConfigurationUnavailable { resource: String, reason: String },

    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cutoff(#[from] CutoffError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl WardRiskError {
    /// Whether this error means a required resource (model, schema,
    /// reference distribution) is missing or unusable.
    pub fn is_configuration_unavailable(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationUnavailable { .. }
                | Self::Cutoff(_)
                | Self::Model(_)
                | Self::Schema(_)
        )
    }
}

impl ErrorCode for WardRiskError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigurationUnavailable { .. } => error_code::CONFIGURATION_UNAVAILABLE,
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::Config(e) => e.error_code(),
            Self::Cutoff(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
        }
    }
}
