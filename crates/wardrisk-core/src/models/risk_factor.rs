use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// One triggered risk condition.
///
/// Variant order is the order factors appear in a `RiskResult`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskFactor {
    AdvancedAge,
    Hypotension,
    LowAlbumin,
    SedativeMedication,
    AlteredMentalStatus,
    AbnormalPulse,
    AbnormalTemperature,
    HighAcuity,
    AbnormalRespiration,
    ElevatedCrp,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 10] = [
        Self::AdvancedAge,
        Self::Hypotension,
        Self::LowAlbumin,
        Self::SedativeMedication,
        Self::AlteredMentalStatus,
        Self::AbnormalPulse,
        Self::AbnormalTemperature,
        Self::HighAcuity,
        Self::AbnormalRespiration,
        Self::ElevatedCrp,
    ];

    /// Human-readable label shown next to the score.
    pub fn label(self) -> &'static str {
        match self {
            Self::AdvancedAge => "advanced age",
            Self::Hypotension => "hypotension",
            Self::LowAlbumin => "low albumin",
            Self::SedativeMedication => "sedative medication",
            Self::AlteredMentalStatus => "altered mental status",
            Self::AbnormalPulse => "abnormal pulse",
            Self::AbnormalTemperature => "abnormal temperature",
            Self::HighAcuity => "high acuity",
            Self::AbnormalRespiration => "abnormal respiration",
            Self::ElevatedCrp => "elevated CRP",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
