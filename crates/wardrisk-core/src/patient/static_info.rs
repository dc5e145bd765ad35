use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Biological sex as recorded on admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Stable numeric code: female 0, male 1.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }

    /// Lenient parse of host strings; unknown spellings yield `None`
    /// so the caller can substitute the documented default.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "man" | "남" | "남성" => Ok(Self::Male),
            "f" | "female" | "woman" | "여" | "여성" => Ok(Self::Female),
            other => Err(format!("unknown sex: {other:?}")),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes that do not change during a stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientStatic {
    /// Age in years. Signed so that bad host input stays representable.
    pub age: i32,
    pub sex: Option<Sex>,
}

impl PatientStatic {
    pub fn new(age: i32, sex: Sex) -> Self {
        Self {
            age,
            sex: Some(sex),
        }
    }
}
