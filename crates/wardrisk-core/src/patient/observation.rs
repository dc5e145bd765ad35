use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::MentalStatus;

/// Current vital signs and labs for one patient.
///
/// Values arrive straight from the host UI and are not trusted:
/// the evaluator sanitizes every field before any rule reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientObservation {
    /// Systolic blood pressure (mmHg).
    pub systolic_bp: f64,
    /// Diastolic blood pressure (mmHg).
    pub diastolic_bp: f64,
    /// Pulse rate (beats/min).
    pub pulse_rate: f64,
    /// Respiratory rate (breaths/min).
    pub respiratory_rate: f64,
    /// Body temperature (°C).
    pub body_temperature: f64,
    /// Serum albumin (g/dL).
    pub albumin: f64,
    /// C-reactive protein (mg/dL).
    pub crp: f64,
    pub mental_status: Option<MentalStatus>,
    /// Ward acuity class, 1 (self-care) to 5 (critical).
    pub severity_class: u8,
    /// A hypnotic or sedative was given this shift.
    pub sedative_administered: bool,
}

impl Default for PatientObservation {
    /// A stable adult with all values in the normal range.
    fn default() -> Self {
        use crate::config::defaults;
        Self {
            systolic_bp: defaults::DEFAULT_SYSTOLIC_BP,
            diastolic_bp: defaults::DEFAULT_DIASTOLIC_BP,
            pulse_rate: defaults::DEFAULT_PULSE_RATE,
            respiratory_rate: defaults::DEFAULT_RESPIRATORY_RATE,
            body_temperature: defaults::DEFAULT_BODY_TEMPERATURE,
            albumin: defaults::DEFAULT_ALBUMIN,
            crp: defaults::DEFAULT_CRP,
            mental_status: Some(MentalStatus::Alert),
            severity_class: defaults::DEFAULT_SEVERITY_CLASS,
            sedative_administered: false,
        }
    }
}
