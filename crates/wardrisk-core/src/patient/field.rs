use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Every input field the evaluator may replace with a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ObservationField {
    Age,
    Sex,
    SystolicBp,
    DiastolicBp,
    PulseRate,
    RespiratoryRate,
    BodyTemperature,
    Albumin,
    CReactiveProtein,
    MentalStatus,
    SeverityClass,
}

impl ObservationField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Sex => "sex",
            Self::SystolicBp => "systolic_bp",
            Self::DiastolicBp => "diastolic_bp",
            Self::PulseRate => "pulse_rate",
            Self::RespiratoryRate => "respiratory_rate",
            Self::BodyTemperature => "body_temperature",
            Self::Albumin => "albumin",
            Self::CReactiveProtein => "crp",
            Self::MentalStatus => "mental_status",
            Self::SeverityClass => "severity_class",
        }
    }
}

impl fmt::Display for ObservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
