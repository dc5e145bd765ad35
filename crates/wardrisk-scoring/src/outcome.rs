//! Evaluation outcome: the result plus how it was obtained.

use chrono::Utc;
use serde::Serialize;
use wardrisk_core::constants::{EVALUATOR_COMPONENT, FAIL_CLOSED_FALLBACK};
use wardrisk_core::errors::{ErrorCode, WardRiskError};
use wardrisk_core::models::{DegradationEvent, FieldSubstitution, RiskResult};

/// How an evaluation was obtained. `Degraded` dominates `Defaulted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    /// Every field valid, every resource available.
    Normal,
    /// Scored, but at least one input field was replaced by its default.
    Defaulted,
    /// A required resource was unavailable; the result is the fail-closed one.
    Degraded,
}

/// Why an evaluation failed closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Degradation {
    pub error_code: &'static str,
    pub reason: String,
}

impl From<&WardRiskError> for Degradation {
    fn from(err: &WardRiskError) -> Self {
        Self {
            error_code: err.error_code(),
            reason: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub result: RiskResult,
    pub substitutions: Vec<FieldSubstitution>,
    pub degradation: Option<Degradation>,
}

impl Evaluation {
    pub fn status(&self) -> EvaluationStatus {
        if self.degradation.is_some() {
            EvaluationStatus::Degraded
        } else if !self.substitutions.is_empty() {
            EvaluationStatus::Defaulted
        } else {
            EvaluationStatus::Normal
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }

    pub fn used_defaults(&self) -> bool {
        !self.substitutions.is_empty()
    }

    /// Degradation event for a tracker, stamped now.
    pub fn degradation_event(&self) -> Option<DegradationEvent> {
        self.degradation.as_ref().map(|d| DegradationEvent {
            component: EVALUATOR_COMPONENT.to_string(),
            failure: d.reason.clone(),
            fallback_used: FAIL_CLOSED_FALLBACK.to_string(),
            timestamp: Utc::now(),
        })
    }

    pub fn into_result(self) -> RiskResult {
        self.result
    }
}
