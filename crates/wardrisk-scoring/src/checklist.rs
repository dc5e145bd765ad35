//! Nursing intervention checklist driven by a risk result.
//!
//! Only the selection logic lives here; checklist wording is the host's.

use serde::{Deserialize, Serialize};
use wardrisk_core::models::{RiskCategory, RiskFactor, RiskResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intervention {
    /// Confirm side rails are raised.
    BedRailsRaised,
    /// Post the fall-risk sign at the bedside.
    FallRiskSignage,
    HourlyRounding,
    /// Observe for 30 minutes after a hypnotic or sedative.
    PostSedativeObservation,
    /// Refer to the nutrition team for low albumin.
    NutritionConsult,
    NeuroCheck,
}

impl Intervention {
    /// Stable identifier for the host's checklist templates.
    pub fn key(self) -> &'static str {
        match self {
            Self::BedRailsRaised => "bed_rails_raised",
            Self::FallRiskSignage => "fall_risk_signage",
            Self::HourlyRounding => "hourly_rounding",
            Self::PostSedativeObservation => "post_sedative_observation",
            Self::NutritionConsult => "nutrition_consult",
            Self::NeuroCheck => "neuro_check",
        }
    }
}

/// Interventions to render for one result, in display order.
pub fn recommended_interventions(result: &RiskResult) -> Vec<Intervention> {
    let mut out = Vec::new();
    if result.category >= RiskCategory::Medium {
        out.push(Intervention::BedRailsRaised);
        out.push(Intervention::FallRiskSignage);
    }
    if result.category == RiskCategory::High {
        out.push(Intervention::HourlyRounding);
    }
    if result.has_factor(RiskFactor::SedativeMedication) {
        out.push(Intervention::PostSedativeObservation);
    }
    if result.has_factor(RiskFactor::LowAlbumin) {
        out.push(Intervention::NutritionConsult);
    }
    if result.has_factor(RiskFactor::AlteredMentalStatus) {
        out.push(Intervention::NeuroCheck);
    }
    out
}
