//! RiskEvaluator: the main entry point for wardrisk-scoring.
//!
//! Sanitizes input, evaluates the rule set for factors, delegates the score
//! to the configured strategy, and fails closed when the strategy cannot
//! score. Immutable after construction.

use tracing::{debug, info};
use wardrisk_core::config::{RuleConfig, WardRiskConfig};
use wardrisk_core::constants::{EVALUATOR_COMPONENT, FAIL_CLOSED_FALLBACK};
use wardrisk_core::errors::WardRiskResult;
use wardrisk_core::models::{RiskCutoffs, RiskResult, StrategyKind};
use wardrisk_core::patient::{PatientObservation, PatientStatic};
use wardrisk_core::traits::IRiskEvaluator;
use wardrisk_observability::events;

use crate::outcome::{Degradation, Evaluation};
use crate::rules::{self, RuleSet};
use crate::sanitize::sanitize;
use crate::strategies::{AdditiveStrategy, ModelResources, ModelStrategy, ScoringStrategy};

pub struct RiskEvaluator {
    rules: RuleSet,
    strategy: Box<dyn ScoringStrategy>,
}

impl RiskEvaluator {
    /// Create an evaluator from a rule configuration and any strategy.
    pub fn new(rules: RuleConfig, strategy: Box<dyn ScoringStrategy>) -> Self {
        let evaluator = Self {
            rules: RuleSet::new(rules),
            strategy,
        };
        info!(
            strategy = %evaluator.strategy.kind(),
            cutoffs = ?evaluator.strategy.cutoffs(),
            ready = evaluator.is_ready(),
            "RiskEvaluator initialized"
        );
        evaluator
    }

    /// Additive evaluator using the configured rules and point cutoffs.
    pub fn additive(config: &WardRiskConfig) -> WardRiskResult<Self> {
        let cutoffs =
            RiskCutoffs::new(config.cutoffs.additive_high, config.cutoffs.additive_medium)?;
        Ok(Self::new(
            config.rules.clone(),
            Box::new(AdditiveStrategy::new(cutoffs)),
        ))
    }

    /// Model-probability evaluator. Missing or inconsistent resources do
    /// not fail construction; every evaluation then fails closed.
    pub fn model(config: &WardRiskConfig, resources: ModelResources) -> Self {
        Self::new(
            config.rules.clone(),
            Box::new(ModelStrategy::new(resources, &config.cutoffs)),
        )
    }

    /// Build whichever strategy `config.scoring.strategy` selects.
    pub fn from_config(config: &WardRiskConfig, resources: ModelResources) -> WardRiskResult<Self> {
        match config.scoring.strategy {
            StrategyKind::Additive => Self::additive(config),
            StrategyKind::ModelProbability => Ok(Self::model(config, resources)),
        }
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn cutoffs(&self) -> Option<RiskCutoffs> {
        self.strategy.cutoffs()
    }

    pub fn rules(&self) -> &RuleConfig {
        self.rules.config()
    }

    /// Whether evaluations will be scored normally (not fail closed).
    pub fn is_ready(&self) -> bool {
        self.strategy.unavailable_reason().is_none()
    }

    /// Evaluate one patient. Pure: no input is mutated and identical
    /// inputs yield identical results.
    pub fn evaluate(&self, patient: &PatientStatic, observation: &PatientObservation) -> Evaluation {
        let (input, substitutions) = sanitize(patient, observation);
        let hits = self.rules.evaluate(&input);
        let factors = rules::factors(&hits);
        let kind = self.strategy.kind();

        let (result, degradation) = match self.strategy.score(&input, &hits) {
            Ok(scored) => (
                RiskResult {
                    display_score: scored.display,
                    raw_score: scored.raw,
                    category: scored.category,
                    factors,
                    strategy: kind,
                },
                None,
            ),
            Err(err) => {
                events::degradation_triggered(
                    EVALUATOR_COMPONENT,
                    &err.to_string(),
                    FAIL_CLOSED_FALLBACK,
                );
                (
                    RiskResult::fail_closed(kind, factors),
                    Some(Degradation::from(&err)),
                )
            }
        };

        debug!(
            raw_score = result.raw_score,
            substitutions = substitutions.len(),
            "evaluation scored"
        );
        events::evaluation_completed(
            kind.as_str(),
            result.display_score.value(),
            result.category.as_str(),
            result.factors.len(),
            degradation.is_some(),
        );

        Evaluation {
            result,
            substitutions,
            degradation,
        }
    }
}

impl Default for RiskEvaluator {
    /// Additive evaluator with default rules and cutoffs.
    fn default() -> Self {
        Self::new(RuleConfig::default(), Box::new(AdditiveStrategy::default()))
    }
}

impl IRiskEvaluator for RiskEvaluator {
    fn score(&self, patient: &PatientStatic, observation: &PatientObservation) -> RiskResult {
        self.evaluate(patient, observation).into_result()
    }
}

/// One-shot additive evaluation with default rules and caller cutoffs.
pub fn evaluate(
    patient: &PatientStatic,
    observation: &PatientObservation,
    cutoffs: &RiskCutoffs,
) -> RiskResult {
    let (input, _) = sanitize(patient, observation);
    let hits = RuleSet::default().evaluate(&input);
    let scored = AdditiveStrategy::new(*cutoffs).score_hits(&hits);
    RiskResult {
        display_score: scored.display,
        raw_score: scored.raw,
        category: scored.category,
        factors: rules::factors(&hits),
        strategy: StrategyKind::Additive,
    }
}
