use crate::models::RiskResult;
use crate::patient::{PatientObservation, PatientStatic};

/// Risk evaluation as seen by the host UI.
pub trait IRiskEvaluator: Send + Sync {
    /// Score one patient. Never fails: degraded evaluations return the
    /// fail-closed result.
    fn score(&self, patient: &PatientStatic, observation: &PatientObservation) -> RiskResult;
}
