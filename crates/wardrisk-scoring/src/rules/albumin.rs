use wardrisk_core::config::RuleConfig;

use crate::sanitize::SanitizedInput;

/// Low albumin: strictly below the threshold (3.0 g/dL by default).
pub fn low_albumin(input: &SanitizedInput, rules: &RuleConfig) -> bool {
    input.albumin < rules.low_albumin
}
