use wardrisk_core::config::RuleConfig;

use crate::sanitize::SanitizedInput;

/// High acuity: severity class at or above the configured class.
pub fn high_acuity(input: &SanitizedInput, rules: &RuleConfig) -> bool {
    input.severity_class >= rules.high_acuity_class
}
