//! Vital-sign rules. Each normal band is closed: values equal to a band
//! edge are normal, except the fever edge, which counts as fever.

use wardrisk_core::config::RuleConfig;

use crate::sanitize::SanitizedInput;

/// Pulse outside `[pulse_low, pulse_high]`.
pub fn abnormal_pulse(input: &SanitizedInput, rules: &RuleConfig) -> bool {
    input.pulse_rate < rules.pulse_low || input.pulse_rate > rules.pulse_high
}

/// Temperature below `temperature_low` or at/above `temperature_high`.
pub fn abnormal_temperature(input: &SanitizedInput, rules: &RuleConfig) -> bool {
    input.body_temperature < rules.temperature_low
        || input.body_temperature >= rules.temperature_high
}

/// Respiratory rate outside `[respiration_low, respiration_high]`.
pub fn abnormal_respiration(input: &SanitizedInput, rules: &RuleConfig) -> bool {
    input.respiratory_rate < rules.respiration_low
        || input.respiratory_rate > rules.respiration_high
}
