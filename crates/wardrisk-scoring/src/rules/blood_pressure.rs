use wardrisk_core::config::RuleConfig;

use crate::sanitize::SanitizedInput;

/// Hypotension: systolic strictly below the threshold.
/// A reading exactly at the threshold does not trigger.
pub fn hypotension(input: &SanitizedInput, rules: &RuleConfig) -> bool {
    input.systolic_bp < rules.hypotension_systolic
}
