use serde::{Deserialize, Serialize};

use crate::models::StrategyKind;

/// Scoring strategy selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub strategy: StrategyKind,
}
