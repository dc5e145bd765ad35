//! Structured log events for evaluator operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed evaluation.
pub fn evaluation_completed(
    strategy: &str,
    display_score: u8,
    category: &str,
    factor_count: usize,
    degraded: bool,
) {
    tracing::debug!(
        event = "evaluation_completed",
        strategy = %strategy,
        display_score = display_score,
        category = %category,
        factor_count = factor_count,
        degraded = degraded,
        "risk evaluation completed"
    );
}

/// Log an input field replaced by its default.
pub fn input_defaulted(field: &str, reason: &str, substituted: f64) {
    tracing::warn!(
        event = "input_defaulted",
        field = %field,
        reason = %reason,
        substituted = substituted,
        "input field replaced by default"
    );
}

/// Log cutoffs derived from a reference distribution.
pub fn cutoffs_derived(high: f64, medium: f64, reference_len: usize) {
    tracing::info!(
        event = "cutoffs_derived",
        high = high,
        medium = medium,
        reference_len = reference_len,
        "risk cutoffs derived from reference distribution"
    );
}

/// Log a classifier loaded and bound to an evaluator.
pub fn classifier_bound(name: &str, fingerprint: &str, feature_count: usize) {
    tracing::info!(
        event = "classifier_bound",
        classifier = %name,
        fingerprint = %fingerprint,
        feature_count = feature_count,
        "classifier bound to evaluator"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log recovery from degraded mode.
pub fn degradation_recovered(component: &str) {
    tracing::info!(
        event = "degradation_recovered",
        component = %component,
        "degradation recovered"
    );
}
