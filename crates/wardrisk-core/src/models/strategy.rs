use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Which scoring strategy produced a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StrategyKind {
    /// Fixed rule points summed and clamped.
    #[default]
    #[serde(rename = "additive")]
    Additive,
    /// Classifier probability scaled to 0–99, percentile cutoffs.
    #[serde(rename = "model", alias = "model_probability")]
    ModelProbability,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::ModelProbability => "model",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" | "rules" => Ok(Self::Additive),
            "model" | "model_probability" => Ok(Self::ModelProbability),
            other => Err(format!("unknown scoring strategy: {other:?}")),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
