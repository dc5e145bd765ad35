use wardrisk_core::config::RuleConfig;

use crate::sanitize::SanitizedInput;

/// Elevated CRP: strictly above the threshold (mg/dL).
pub fn elevated_crp(input: &SanitizedInput, rules: &RuleConfig) -> bool {
    input.crp > rules.elevated_crp
}
