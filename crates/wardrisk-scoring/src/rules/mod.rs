//! Rule factors.
//!
//! Each rule reads one sanitized field (or one pair of thresholds) and
//! decides whether its factor triggered. Rules never look at each other,
//! so each is testable by varying exactly one field.

pub mod acuity;
pub mod age;
pub mod albumin;
pub mod blood_pressure;
pub mod inflammation;
pub mod medication;
pub mod mental_status;
pub mod vitals;

use wardrisk_core::config::RuleConfig;
use wardrisk_core::models::RiskFactor;

use crate::sanitize::SanitizedInput;

/// A rule that evaluated true, with the points it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub factor: RiskFactor,
    pub points: u32,
}

/// The full rule set, bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    config: RuleConfig,
}

impl RuleSet {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Evaluate every rule. Hits come back in `RiskFactor` declaration order.
    pub fn evaluate(&self, input: &SanitizedInput) -> Vec<RuleHit> {
        let c = &self.config;
        let checks = [
            (
                RiskFactor::AdvancedAge,
                age::advanced_age(input, c),
                c.advanced_age_points,
            ),
            (
                RiskFactor::Hypotension,
                blood_pressure::hypotension(input, c),
                c.hypotension_points,
            ),
            (
                RiskFactor::LowAlbumin,
                albumin::low_albumin(input, c),
                c.low_albumin_points,
            ),
            (
                RiskFactor::SedativeMedication,
                medication::sedative(input),
                c.sedative_points,
            ),
            (
                RiskFactor::AlteredMentalStatus,
                mental_status::altered(input),
                c.altered_mental_status_points,
            ),
            (
                RiskFactor::AbnormalPulse,
                vitals::abnormal_pulse(input, c),
                c.abnormal_pulse_points,
            ),
            (
                RiskFactor::AbnormalTemperature,
                vitals::abnormal_temperature(input, c),
                c.abnormal_temperature_points,
            ),
            (
                RiskFactor::HighAcuity,
                acuity::high_acuity(input, c),
                c.high_acuity_points,
            ),
            (
                RiskFactor::AbnormalRespiration,
                vitals::abnormal_respiration(input, c),
                c.abnormal_respiration_points,
            ),
            (
                RiskFactor::ElevatedCrp,
                inflammation::elevated_crp(input, c),
                c.elevated_crp_points,
            ),
        ];

        checks
            .into_iter()
            .filter(|(_, triggered, _)| *triggered)
            .map(|(factor, _, points)| RuleHit { factor, points })
            .collect()
    }
}

/// Factors of a hit list, order preserved.
pub fn factors(hits: &[RuleHit]) -> Vec<RiskFactor> {
    hits.iter().map(|h| h.factor).collect()
}

/// Point total of a hit list, saturating at `u32::MAX`.
pub fn total_points(hits: &[RuleHit]) -> u32 {
    hits.iter().map(|h| h.points).fold(0, u32::saturating_add)
}
