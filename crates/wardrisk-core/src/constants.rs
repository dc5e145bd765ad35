/// wardrisk version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of the display score shown to nurses as "risk points".
pub const MAX_DISPLAY_SCORE: u8 = 99;

/// Number of features in the declared classifier feature order.
pub const FEATURE_COUNT: usize = 11;

/// Degradation component name used when the evaluator fails closed.
pub const EVALUATOR_COMPONENT: &str = "risk_evaluator";

/// Fallback recorded when the evaluator fails closed.
pub const FAIL_CLOSED_FALLBACK: &str = "zero_score_low_category";
