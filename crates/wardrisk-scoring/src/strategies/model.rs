//! Model-probability scoring.
//!
//! Sanitized input is encoded in the schema's feature order, the injected
//! classifier returns the probability of the adverse event, the display
//! score is `floor(p × 100)` clamped to 99, and the category comes from
//! percentile cutoffs derived once from the reference distribution.

use std::sync::Arc;

use tracing::warn;
use wardrisk_core::config::CutoffConfig;
use wardrisk_core::errors::{ModelError, WardRiskError, WardRiskResult};
use wardrisk_core::models::{DisplayScore, RiskCutoffs, StrategyKind};
use wardrisk_core::traits::IRiskClassifier;
use wardrisk_observability::events;

use super::{Scored, ScoringStrategy};
use crate::model::{FeatureSchema, ReferenceDistribution};
use crate::rules::RuleHit;
use crate::sanitize::SanitizedInput;

/// Externally loaded resources the model strategy needs. Any of them may
/// be missing; the strategy then reports itself unavailable.
#[derive(Clone, Default)]
pub struct ModelResources {
    pub classifier: Option<Arc<dyn IRiskClassifier>>,
    pub schema: Option<FeatureSchema>,
    pub reference: Option<ReferenceDistribution>,
}

impl ModelResources {
    pub fn new(
        classifier: Arc<dyn IRiskClassifier>,
        schema: FeatureSchema,
        reference: ReferenceDistribution,
    ) -> Self {
        Self {
            classifier: Some(classifier),
            schema: Some(schema),
            reference: Some(reference),
        }
    }
}

struct Ready {
    classifier: Arc<dyn IRiskClassifier>,
    schema: FeatureSchema,
    cutoffs: RiskCutoffs,
}

enum State {
    Ready(Ready),
    Unavailable { resource: String, reason: String },
}

pub struct ModelStrategy {
    state: State,
}

impl ModelStrategy {
    /// Build the strategy, failing closed: missing or inconsistent
    /// resources yield a strategy whose every `score` call errors.
    pub fn new(resources: ModelResources, cutoffs: &CutoffConfig) -> Self {
        match prepare(resources, cutoffs) {
            Ok(ready) => Self {
                state: State::Ready(ready),
            },
            Err(err) => {
                let resource = resource_of(&err).to_string();
                warn!(
                    resource = %resource,
                    error = %err,
                    "model strategy unavailable, evaluations will fail closed"
                );
                Self {
                    state: State::Unavailable {
                        resource,
                        reason: err.to_string(),
                    },
                }
            }
        }
    }

    /// Build the strategy, returning the first resource problem instead.
    pub fn try_new(resources: ModelResources, cutoffs: &CutoffConfig) -> WardRiskResult<Self> {
        Ok(Self {
            state: State::Ready(prepare(resources, cutoffs)?),
        })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }
}

impl ScoringStrategy for ModelStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ModelProbability
    }

    fn score(&self, input: &SanitizedInput, _hits: &[RuleHit]) -> WardRiskResult<Scored> {
        let ready = match &self.state {
            State::Ready(ready) => ready,
            State::Unavailable { resource, reason } => {
                return Err(WardRiskError::ConfigurationUnavailable {
                    resource: resource.clone(),
                    reason: reason.clone(),
                })
            }
        };

        let features = ready.schema.encode(input);
        let probability = ready.classifier.predict_proba(features.as_slice())?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ModelError::ProbabilityOutOfRange { value: probability }.into());
        }

        Ok(Scored {
            raw: probability,
            display: DisplayScore::from_probability(probability),
            category: ready.cutoffs.categorize(probability),
        })
    }

    fn cutoffs(&self) -> Option<RiskCutoffs> {
        match &self.state {
            State::Ready(ready) => Some(ready.cutoffs),
            State::Unavailable { .. } => None,
        }
    }

    fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            State::Ready(_) => None,
            State::Unavailable { reason, .. } => Some(reason),
        }
    }
}

fn prepare(resources: ModelResources, config: &CutoffConfig) -> WardRiskResult<Ready> {
    let classifier = resources
        .classifier
        .ok_or_else(|| unavailable("classifier", "not loaded"))?;
    let schema = resources
        .schema
        .ok_or_else(|| unavailable("feature_schema", "not loaded"))?;
    let reference = resources
        .reference
        .ok_or_else(|| unavailable("reference_scores", "not loaded"))?;

    if classifier.feature_count() != schema.len() {
        return Err(ModelError::FeatureCountMismatch {
            expected: schema.len(),
            actual: classifier.feature_count(),
        }
        .into());
    }

    let cutoffs = reference.cutoffs(config.high_percentile, config.medium_percentile)?;
    events::cutoffs_derived(cutoffs.high(), cutoffs.medium(), reference.len());
    events::classifier_bound(
        classifier.name(),
        classifier.fingerprint().unwrap_or("none"),
        classifier.feature_count(),
    );

    Ok(Ready {
        classifier,
        schema,
        cutoffs,
    })
}

fn unavailable(resource: &str, reason: &str) -> WardRiskError {
    WardRiskError::ConfigurationUnavailable {
        resource: resource.to_string(),
        reason: reason.to_string(),
    }
}

fn resource_of(err: &WardRiskError) -> &str {
    match err {
        WardRiskError::ConfigurationUnavailable { resource, .. } => resource,
        WardRiskError::Model(_) => "classifier",
        WardRiskError::Schema(_) => "feature_schema",
        WardRiskError::Cutoff(_) => "reference_scores",
        WardRiskError::Config(_) => "config",
        WardRiskError::InvalidInput { .. } => "input",
    }
}
