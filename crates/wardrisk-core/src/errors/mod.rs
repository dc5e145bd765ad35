//! Error handling for wardrisk.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod cutoff_error;
pub mod error_code;
pub mod model_error;
pub mod schema_error;
pub mod wardrisk_error;

pub use config_error::ConfigError;
pub use cutoff_error::CutoffError;
pub use error_code::ErrorCode;
pub use model_error::ModelError;
pub use schema_error::SchemaError;
pub use wardrisk_error::WardRiskError;

/// Convenience alias used across the workspace.
pub type WardRiskResult<T> = Result<T, WardRiskError>;
