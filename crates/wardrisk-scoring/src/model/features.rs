//! Declared feature order and categorical encodings.
//!
//! The classifier sees a plain `&[f64]`; this module is the only place that
//! knows which position holds which observation.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;
use wardrisk_core::constants::FEATURE_COUNT;
use wardrisk_core::errors::SchemaError;
use wardrisk_core::patient::{MentalStatus, Sex};

use crate::sanitize::SanitizedInput;

/// One classifier input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Age,
    Sex,
    SystolicBp,
    DiastolicBp,
    PulseRate,
    RespiratoryRate,
    BodyTemperature,
    Albumin,
    Crp,
    MentalStatus,
    SeverityClass,
}

impl Feature {
    /// The declared feature order.
    pub const DECLARED_ORDER: [Feature; FEATURE_COUNT] = [
        Self::Age,
        Self::Sex,
        Self::SystolicBp,
        Self::DiastolicBp,
        Self::PulseRate,
        Self::RespiratoryRate,
        Self::BodyTemperature,
        Self::Albumin,
        Self::Crp,
        Self::MentalStatus,
        Self::SeverityClass,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Sex => "sex",
            Self::SystolicBp => "systolic_bp",
            Self::DiastolicBp => "diastolic_bp",
            Self::PulseRate => "pulse_rate",
            Self::RespiratoryRate => "respiratory_rate",
            Self::BodyTemperature => "body_temperature",
            Self::Albumin => "albumin",
            Self::Crp => "crp",
            Self::MentalStatus => "mental_status",
            Self::SeverityClass => "severity_class",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::DECLARED_ORDER
            .into_iter()
            .find(|f| f.name() == name.trim())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An encoded feature vector in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// On-disk shape of a schema, as handed over by the host.
#[derive(Debug, Deserialize)]
struct SchemaDef {
    feature_order: Vec<String>,
    sex: BTreeMap<String, f64>,
    mental_status: BTreeMap<String, f64>,
}

/// Feature order and categorical encodings the classifier was trained with.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSchema {
    order: Vec<Feature>,
    male: f64,
    female: f64,
    /// Indexed by `MentalStatus::ordinal`.
    mental_status: [f64; 5],
}

impl Default for FeatureSchema {
    /// Declared order, male = 1 / female = 0, mental status 0 (alert) to 4 (coma).
    fn default() -> Self {
        Self {
            order: Feature::DECLARED_ORDER.to_vec(),
            male: 1.0,
            female: 0.0,
            mental_status: [0.0, 1.0, 2.0, 3.0, 4.0],
        }
    }
}

impl FeatureSchema {
    /// Parse and validate a schema from JSON.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let def: SchemaDef = serde_json::from_str(json).map_err(|e| SchemaError::Parse {
            message: e.to_string(),
        })?;
        Self::from_def(def)
    }

    fn from_def(def: SchemaDef) -> Result<Self, SchemaError> {
        let mut order = Vec::with_capacity(def.feature_order.len());
        let mut seen = HashSet::new();
        for name in &def.feature_order {
            let feature = Feature::from_name(name).ok_or_else(|| SchemaError::UnknownFeature {
                name: name.clone(),
            })?;
            if !seen.insert(feature) {
                return Err(SchemaError::DuplicateFeature { name: name.clone() });
            }
            order.push(feature);
        }
        if let Some(missing) = Feature::DECLARED_ORDER
            .into_iter()
            .find(|f| !seen.contains(f))
        {
            return Err(SchemaError::MissingFeature {
                name: missing.name().to_string(),
            });
        }

        let mut male = None;
        let mut female = None;
        for (key, value) in &def.sex {
            let sex = key.parse::<Sex>().map_err(|message| SchemaError::Parse { message })?;
            let value = finite_encoding("sex", key, *value)?;
            match sex {
                Sex::Male => male = Some(value),
                Sex::Female => female = Some(value),
            }
        }
        let male = male.ok_or_else(|| missing_encoding("sex", Sex::Male.as_str()))?;
        let female = female.ok_or_else(|| missing_encoding("sex", Sex::Female.as_str()))?;

        let mut mental = [None; 5];
        for (key, value) in &def.mental_status {
            let status = key
                .parse::<MentalStatus>()
                .map_err(|message| SchemaError::Parse { message })?;
            mental[usize::from(status.ordinal())] = Some(finite_encoding("mental_status", key, *value)?);
        }
        let mut mental_status = [0.0; 5];
        for (slot, status) in mental_status.iter_mut().zip(MentalStatus::ALL) {
            *slot = mental[usize::from(status.ordinal())]
                .ok_or_else(|| missing_encoding("mental_status", status.as_str()))?;
        }

        Ok(Self {
            order,
            male,
            female,
            mental_status,
        })
    }

    pub fn order(&self) -> &[Feature] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn encode_sex(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }

    pub fn encode_mental_status(&self, status: MentalStatus) -> f64 {
        self.mental_status[usize::from(status.ordinal())]
    }

    /// Encode sanitized input into schema order.
    pub fn encode(&self, input: &SanitizedInput) -> FeatureVector {
        FeatureVector(self.order.iter().map(|f| self.value(*f, input)).collect())
    }

    fn value(&self, feature: Feature, input: &SanitizedInput) -> f64 {
        match feature {
            Feature::Age => f64::from(input.age),
            Feature::Sex => self.encode_sex(input.sex),
            Feature::SystolicBp => input.systolic_bp,
            Feature::DiastolicBp => input.diastolic_bp,
            Feature::PulseRate => input.pulse_rate,
            Feature::RespiratoryRate => input.respiratory_rate,
            Feature::BodyTemperature => input.body_temperature,
            Feature::Albumin => input.albumin,
            Feature::Crp => input.crp,
            Feature::MentalStatus => self.encode_mental_status(input.mental_status),
            Feature::SeverityClass => f64::from(input.severity_class),
        }
    }
}

fn finite_encoding(category: &str, key: &str, value: f64) -> Result<f64, SchemaError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SchemaError::Parse {
            message: format!("{category} encoding for {key:?} is not finite"),
        })
    }
}

fn missing_encoding(category: &str, value: &str) -> SchemaError {
    SchemaError::MissingEncoding {
        category: category.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{
        "feature_order": ["sex", "age", "systolic_bp", "diastolic_bp", "pulse_rate",
            "respiratory_rate", "body_temperature", "albumin", "crp",
            "mental_status", "severity_class"],
        "sex": {"M": 1.0, "F": 0.0},
        "mental_status": {"alert": 0, "drowsy": 1, "stupor": 2, "semicoma": 3, "coma": 4}
    }"#;

    fn input() -> SanitizedInput {
        SanitizedInput {
            age: 78,
            sex: Sex::Male,
            systolic_bp: 95.0,
            diastolic_bp: 60.0,
            pulse_rate: 88.0,
            respiratory_rate: 20.0,
            body_temperature: 36.9,
            albumin: 2.6,
            crp: 0.4,
            mental_status: MentalStatus::Drowsy,
            severity_class: 3,
            sedative_administered: false,
        }
    }

    #[test]
    fn schema_order_drives_encoding() {
        let schema = FeatureSchema::from_json(SCHEMA).unwrap();
        let v = schema.encode(&input());
        assert_eq!(v.len(), FEATURE_COUNT);
        assert_eq!(v.as_slice()[0], 1.0); // sex first
        assert_eq!(v.as_slice()[1], 78.0);
        assert_eq!(v.as_slice()[9], 1.0); // drowsy
    }

    #[test]
    fn default_schema_uses_declared_order() {
        let schema = FeatureSchema::default();
        assert_eq!(schema.order(), &Feature::DECLARED_ORDER);
        let v = schema.encode(&input());
        assert_eq!(v.as_slice()[0], 78.0);
        assert_eq!(v.as_slice()[7], 2.6);
    }

    #[test]
    fn unknown_feature_rejected() {
        let json = SCHEMA.replace("\"crp\"", "\"crp_mg_l\"");
        let err = FeatureSchema::from_json(&json).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownFeature { name } if name == "crp_mg_l"));
    }

    #[test]
    fn duplicate_feature_rejected() {
        let json = SCHEMA.replace("\"crp\"", "\"albumin\"");
        let err = FeatureSchema::from_json(&json).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateFeature { .. }));
    }

    #[test]
    fn missing_feature_rejected() {
        let json = SCHEMA.replace("\"crp\",", "");
        let err = FeatureSchema::from_json(&json).unwrap_err();
        assert!(matches!(err, SchemaError::MissingFeature { name } if name == "crp"));
    }

    #[test]
    fn missing_mental_status_encoding_rejected() {
        let json = SCHEMA.replace(", \"coma\": 4", "");
        let err = FeatureSchema::from_json(&json).unwrap_err();
        assert!(matches!(err, SchemaError::MissingEncoding { value, .. } if value == "coma"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            FeatureSchema::from_json("{"),
            Err(SchemaError::Parse { .. })
        ));
    }
}
