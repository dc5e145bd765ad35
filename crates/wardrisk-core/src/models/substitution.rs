use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{ErrorCode, WardRiskError};
use crate::patient::ObservationField;

/// Record of one input field replaced by its documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSubstitution {
    pub field: ObservationField,
    /// Code of the rejection, always `INVALID_INPUT`.
    pub error_code: String,
    /// Why the supplied value was rejected.
    pub reason: String,
    /// The value used instead. Continuous fields record the value itself;
    /// sex and mental status record the variant's `ordinal()`.
    pub substituted: f64,
}

impl FieldSubstitution {
    /// Record `field` as rejected for `reason` and replaced by `substituted`.
    pub fn invalid_input(
        field: ObservationField,
        reason: impl Into<String>,
        substituted: f64,
    ) -> Self {
        let error = WardRiskError::InvalidInput {
            field: field.as_str().to_string(),
            reason: reason.into(),
        };
        Self {
            field,
            error_code: error.error_code().to_string(),
            reason: error.to_string(),
            substituted,
        }
    }
}
