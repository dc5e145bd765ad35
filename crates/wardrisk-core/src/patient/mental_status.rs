use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Level of consciousness, ordered from fully alert to unresponsive.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MentalStatus {
    #[default]
    Alert,
    Drowsy,
    Stupor,
    Semicoma,
    Coma,
}

impl MentalStatus {
    /// All variants in order.
    pub const ALL: [MentalStatus; 5] = [
        Self::Alert,
        Self::Drowsy,
        Self::Stupor,
        Self::Semicoma,
        Self::Coma,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Drowsy => "drowsy",
            Self::Stupor => "stupor",
            Self::Semicoma => "semicoma",
            Self::Coma => "coma",
        }
    }

    /// Position in `ALL`: alert 0 through coma 4.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Alert => 0,
            Self::Drowsy => 1,
            Self::Stupor => 2,
            Self::Semicoma => 3,
            Self::Coma => 4,
        }
    }

    pub fn is_alert(self) -> bool {
        self == Self::Alert
    }

    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromStr for MentalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "").as_str() {
            "alert" | "명료" => Ok(Self::Alert),
            "drowsy" | "기면" => Ok(Self::Drowsy),
            "stupor" | "혼미" => Ok(Self::Stupor),
            "semicoma" | "반혼수" => Ok(Self::Semicoma),
            "coma" | "혼수" => Ok(Self::Coma),
            other => Err(format!("unknown mental status: {other:?}")),
        }
    }
}

impl fmt::Display for MentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
