//! Bundled logistic-regression classifier.
//!
//! ```text
//! z = intercept + Σ coefficient_i × (x_i − mean_i) / scale_i
//! p = 1 / (1 + e^(−z))
//! ```
//!
//! Weights arrive as JSON exported from the training pipeline. The blake3
//! fingerprint of the canonical weights is logged when the model is bound
//! so a displayed score can be traced back to the exact weights.

use serde::{Deserialize, Serialize};
use wardrisk_core::errors::ModelError;
use wardrisk_core::traits::IRiskClassifier;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogisticDef {
    name: String,
    intercept: f64,
    coefficients: Vec<f64>,
    #[serde(default)]
    means: Vec<f64>,
    #[serde(default)]
    scales: Vec<f64>,
}

/// Standardized logistic regression.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    name: String,
    intercept: f64,
    coefficients: Vec<f64>,
    means: Vec<f64>,
    scales: Vec<f64>,
    fingerprint: String,
}

impl LogisticModel {
    /// Parse and validate weights from JSON.
    ///
    /// `means` and `scales` are optional; when omitted the inputs are used
    /// unstandardized.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let def: LogisticDef =
            serde_json::from_str(json).map_err(|e| ModelError::InvalidWeights {
                reason: e.to_string(),
            })?;
        Self::from_def(def)
    }

    /// Build from in-memory weights.
    pub fn new(
        name: impl Into<String>,
        intercept: f64,
        coefficients: Vec<f64>,
        means: Vec<f64>,
        scales: Vec<f64>,
    ) -> Result<Self, ModelError> {
        Self::from_def(LogisticDef {
            name: name.into(),
            intercept,
            coefficients,
            means,
            scales,
        })
    }

    fn from_def(mut def: LogisticDef) -> Result<Self, ModelError> {
        let n = def.coefficients.len();
        if n == 0 {
            return Err(invalid("no coefficients"));
        }
        if def.means.is_empty() {
            def.means = vec![0.0; n];
        }
        if def.scales.is_empty() {
            def.scales = vec![1.0; n];
        }
        if def.means.len() != n || def.scales.len() != n {
            return Err(invalid(&format!(
                "{} coefficients but {} means and {} scales",
                n,
                def.means.len(),
                def.scales.len()
            )));
        }
        if !def.intercept.is_finite()
            || def
                .coefficients
                .iter()
                .chain(&def.means)
                .chain(&def.scales)
                .any(|w| !w.is_finite())
        {
            return Err(invalid("non-finite weight"));
        }
        if def.scales.iter().any(|s| *s == 0.0) {
            return Err(invalid("zero scale"));
        }

        let canonical = serde_json::to_vec(&def).map_err(|e| invalid(&e.to_string()))?;
        let fingerprint = blake3::hash(&canonical).to_hex().to_string();

        Ok(Self {
            name: def.name,
            intercept: def.intercept,
            coefficients: def.coefficients,
            means: def.means,
            scales: def.scales,
            fingerprint,
        })
    }

    /// blake3 hex digest of the canonical weights.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Linear predictor `z` for one feature vector.
    pub fn logit(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::FeatureCountMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }
        let z = features
            .iter()
            .zip(&self.coefficients)
            .zip(self.means.iter().zip(&self.scales))
            .fold(self.intercept, |acc, ((x, c), (m, s))| {
                acc + c * (x - m) / s
            });
        if z.is_nan() {
            return Err(ModelError::InferenceFailed {
                reason: "linear predictor is NaN".to_string(),
            });
        }
        Ok(z)
    }
}

impl IRiskClassifier for LogisticModel {
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError> {
        let z = self.logit(features)?;
        Ok(1.0 / (1.0 + (-z).exp()))
    }

    fn feature_count(&self) -> usize {
        self.coefficients.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fingerprint(&self) -> Option<&str> {
        Some(&self.fingerprint)
    }
}

fn invalid(reason: &str) -> ModelError {
    ModelError::InvalidWeights {
        reason: reason.to_string(),
    }
}
