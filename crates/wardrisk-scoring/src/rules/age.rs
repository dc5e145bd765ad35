use wardrisk_core::config::RuleConfig;

use crate::sanitize::SanitizedInput;

/// Advanced age: `age >= advanced_age_years` (inclusive).
pub fn advanced_age(input: &SanitizedInput, rules: &RuleConfig) -> bool {
    input.age >= rules.advanced_age_years
}
