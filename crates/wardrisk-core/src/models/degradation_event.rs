use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A degradation event when the evaluator falls back to its fail-closed result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
