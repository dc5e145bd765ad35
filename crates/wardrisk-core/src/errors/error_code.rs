//! Stable error codes for the host boundary.

/// Every error enum implements this to expose a structured code string
/// the host UI can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CUTOFF_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIGURATION_UNAVAILABLE: &str = "CONFIGURATION_UNAVAILABLE";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CUTOFF_ERROR: &str = "CUTOFF_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
