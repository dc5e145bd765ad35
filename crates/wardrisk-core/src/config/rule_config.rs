use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds and point weights for every rule factor.
///
/// Comparison direction is fixed per rule (see `wardrisk-scoring::rules`);
/// only the threshold values and points are configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Age in years at or above which "advanced age" triggers.
    pub advanced_age_years: i32,
    pub advanced_age_points: u32,
    /// Systolic pressure strictly below which "hypotension" triggers.
    pub hypotension_systolic: f64,
    pub hypotension_points: u32,
    /// Serum albumin (g/dL) strictly below which "low albumin" triggers.
    pub low_albumin: f64,
    pub low_albumin_points: u32,
    pub sedative_points: u32,
    pub altered_mental_status_points: u32,
    /// Pulse outside `[pulse_low, pulse_high]` is abnormal.
    pub pulse_low: f64,
    pub pulse_high: f64,
    pub abnormal_pulse_points: u32,
    /// Temperature below `temperature_low` or at/above `temperature_high`.
    pub temperature_low: f64,
    pub temperature_high: f64,
    pub abnormal_temperature_points: u32,
    /// Severity class at or above which "high acuity" triggers.
    pub high_acuity_class: u8,
    pub high_acuity_points: u32,
    /// Respiratory rate outside `[respiration_low, respiration_high]`.
    pub respiration_low: f64,
    pub respiration_high: f64,
    pub abnormal_respiration_points: u32,
    /// CRP (mg/dL) strictly above which "elevated CRP" triggers.
    pub elevated_crp: f64,
    pub elevated_crp_points: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            advanced_age_years: defaults::DEFAULT_ADVANCED_AGE_YEARS,
            advanced_age_points: defaults::DEFAULT_ADVANCED_AGE_POINTS,
            hypotension_systolic: defaults::DEFAULT_HYPOTENSION_SYSTOLIC,
            hypotension_points: defaults::DEFAULT_HYPOTENSION_POINTS,
            low_albumin: defaults::DEFAULT_LOW_ALBUMIN,
            low_albumin_points: defaults::DEFAULT_LOW_ALBUMIN_POINTS,
            sedative_points: defaults::DEFAULT_SEDATIVE_POINTS,
            altered_mental_status_points: defaults::DEFAULT_ALTERED_MENTAL_STATUS_POINTS,
            pulse_low: defaults::DEFAULT_PULSE_LOW,
            pulse_high: defaults::DEFAULT_PULSE_HIGH,
            abnormal_pulse_points: defaults::DEFAULT_ABNORMAL_PULSE_POINTS,
            temperature_low: defaults::DEFAULT_TEMPERATURE_LOW,
            temperature_high: defaults::DEFAULT_TEMPERATURE_HIGH,
            abnormal_temperature_points: defaults::DEFAULT_ABNORMAL_TEMPERATURE_POINTS,
            high_acuity_class: defaults::DEFAULT_HIGH_ACUITY_CLASS,
            high_acuity_points: defaults::DEFAULT_HIGH_ACUITY_POINTS,
            respiration_low: defaults::DEFAULT_RESPIRATION_LOW,
            respiration_high: defaults::DEFAULT_RESPIRATION_HIGH,
            abnormal_respiration_points: defaults::DEFAULT_ABNORMAL_RESPIRATION_POINTS,
            elevated_crp: defaults::DEFAULT_ELEVATED_CRP,
            elevated_crp_points: defaults::DEFAULT_ELEVATED_CRP_POINTS,
        }
    }
}

impl RuleConfig {
    /// Sum of every rule's points: the largest raw total the additive
    /// strategy can produce. Saturates at `u32::MAX`.
    pub fn max_points(&self) -> u32 {
        [
            self.advanced_age_points,
            self.hypotension_points,
            self.low_albumin_points,
            self.sedative_points,
            self.altered_mental_status_points,
            self.abnormal_pulse_points,
            self.abnormal_temperature_points,
            self.high_acuity_points,
            self.abnormal_respiration_points,
            self.elevated_crp_points,
        ]
        .into_iter()
        .fold(0u32, u32::saturating_add)
    }
}
