//! Model-probability strategy: the ready path against golden resources,
//! and every fail-closed path.

use std::sync::Arc;

use wardrisk_core::config::{CutoffConfig, WardRiskConfig};
use wardrisk_core::errors::{error_code, ModelError};
use wardrisk_core::models::{DisplayScore, RiskCategory, RiskFactor, StrategyKind};
use wardrisk_core::patient::{PatientObservation, PatientStatic, Sex};
use wardrisk_core::traits::IRiskClassifier;
use wardrisk_scoring::{
    EvaluationStatus, FeatureSchema, LogisticModel, ModelResources, ModelStrategy,
    ReferenceDistribution, RiskEvaluator,
};

fn golden_model() -> LogisticModel {
    LogisticModel::from_json(&test_fixtures::load_fixture_str(
        "golden/model/logistic_fall_model.json",
    ))
    .unwrap()
}

fn golden_schema() -> FeatureSchema {
    FeatureSchema::from_json(&test_fixtures::load_fixture_str(
        "golden/model/feature_schema.json",
    ))
    .unwrap()
}

fn golden_reference() -> ReferenceDistribution {
    let value: serde_json::Value = test_fixtures::load_fixture("golden/model/reference_scores.json");
    let scores: Vec<f64> = value["scores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_f64().unwrap())
        .collect();
    ReferenceDistribution::new(scores).unwrap()
}

fn golden_resources() -> ModelResources {
    ModelResources::new(
        Arc::new(golden_model()),
        golden_schema(),
        golden_reference(),
    )
}

fn model_evaluator(resources: ModelResources) -> RiskEvaluator {
    RiskEvaluator::model(&WardRiskConfig::default(), resources)
}

fn elderly_post_op() -> (PatientStatic, PatientObservation) {
    (
        PatientStatic::new(78, Sex::Female),
        PatientObservation {
            systolic_bp: 95.0,
            diastolic_bp: 60.0,
            pulse_rate: 88.0,
            body_temperature: 36.7,
            albumin: 2.6,
            crp: 0.5,
            severity_class: 3,
            ..PatientObservation::default()
        },
    )
}

/// Classifier stub returning a fixed probability.
struct Fixed(f64);

impl IRiskClassifier for Fixed {
    fn predict_proba(&self, _features: &[f64]) -> Result<f64, ModelError> {
        Ok(self.0)
    }
    fn feature_count(&self) -> usize {
        11
    }
    fn name(&self) -> &str {
        "fixed"
    }
}

/// Classifier stub that always fails.
struct Broken;

impl IRiskClassifier for Broken {
    fn predict_proba(&self, _features: &[f64]) -> Result<f64, ModelError> {
        Err(ModelError::InferenceFailed {
            reason: "runtime crashed".to_string(),
        })
    }
    fn feature_count(&self) -> usize {
        11
    }
    fn name(&self) -> &str {
        "broken"
    }
}

fn with_classifier(classifier: Arc<dyn IRiskClassifier>) -> ModelResources {
    ModelResources {
        classifier: Some(classifier),
        ..golden_resources()
    }
}

fn assert_fail_closed(evaluator: &RiskEvaluator) {
    let (p, o) = elderly_post_op();
    let evaluation = evaluator.evaluate(&p, &o);
    assert_eq!(evaluation.status(), EvaluationStatus::Degraded);
    assert_eq!(evaluation.result.display_score, DisplayScore::MIN);
    assert_eq!(evaluation.result.category, RiskCategory::Low);
    assert_eq!(evaluation.result.strategy, StrategyKind::ModelProbability);
    // Factors still come from the rules.
    assert!(evaluation.result.has_factor(RiskFactor::LowAlbumin));
}

// ── Ready path ───────────────────────────────────────────────────────────

#[test]
fn cutoffs_come_from_reference_percentiles() {
    let evaluator = model_evaluator(golden_resources());
    assert!(evaluator.is_ready());
    let cutoffs = evaluator.cutoffs().unwrap();
    assert!((cutoffs.high() - 0.804).abs() < 1e-9);
    assert!((cutoffs.medium() - 0.608).abs() < 1e-9);
}

#[test]
fn elderly_post_op_scores_high() {
    let (p, o) = elderly_post_op();
    let evaluation = model_evaluator(golden_resources()).evaluate(&p, &o);
    let result = evaluation.result;

    assert_eq!(evaluation.degradation, None);
    assert!((result.raw_score - 0.93854).abs() < 1e-4);
    assert_eq!(result.display_score.value(), 93);
    assert_eq!(result.category, RiskCategory::High);
    assert_eq!(
        result.factors,
        vec![
            RiskFactor::AdvancedAge,
            RiskFactor::Hypotension,
            RiskFactor::LowAlbumin,
            RiskFactor::HighAcuity,
        ]
    );
}

#[test]
fn stable_adult_scores_low() {
    let p = PatientStatic::new(32, Sex::Male);
    let result = model_evaluator(golden_resources())
        .evaluate(&p, &PatientObservation::default())
        .result;
    assert_eq!(result.display_score.value(), 1);
    assert_eq!(result.category, RiskCategory::Low);
}

#[test]
fn probability_between_cutoffs_is_medium() {
    let evaluator = model_evaluator(with_classifier(Arc::new(Fixed(0.7))));
    let (p, o) = elderly_post_op();
    let result = evaluator.evaluate(&p, &o).result;
    assert_eq!(result.display_score.value(), 70);
    assert_eq!(result.category, RiskCategory::Medium);
}

#[test]
fn certain_probability_displays_ninety_nine() {
    let evaluator = model_evaluator(with_classifier(Arc::new(Fixed(1.0))));
    let (p, o) = elderly_post_op();
    let result = evaluator.evaluate(&p, &o).result;
    assert_eq!(result.display_score.value(), 99);
    assert_eq!(result.category, RiskCategory::High);
}

#[test]
fn try_new_accepts_complete_resources() {
    let strategy = ModelStrategy::try_new(golden_resources(), &CutoffConfig::default()).unwrap();
    assert!(strategy.is_ready());
}

// ── Fail closed ──────────────────────────────────────────────────────────

#[test]
fn missing_classifier_fails_closed() {
    let resources = ModelResources {
        classifier: None,
        ..golden_resources()
    };
    let evaluator = model_evaluator(resources);
    assert!(!evaluator.is_ready());
    assert_eq!(evaluator.cutoffs(), None);
    assert_fail_closed(&evaluator);

    let (p, o) = elderly_post_op();
    let degradation = evaluator.evaluate(&p, &o).degradation.unwrap();
    assert_eq!(degradation.error_code, error_code::CONFIGURATION_UNAVAILABLE);
    assert!(degradation.reason.contains("classifier"));
}

#[test]
fn missing_schema_fails_closed() {
    let resources = ModelResources {
        schema: None,
        ..golden_resources()
    };
    assert_fail_closed(&model_evaluator(resources));
}

#[test]
fn missing_reference_fails_closed() {
    let resources = ModelResources {
        reference: None,
        ..golden_resources()
    };
    assert_fail_closed(&model_evaluator(resources));
}

#[test]
fn no_resources_at_all_fails_closed() {
    assert_fail_closed(&model_evaluator(ModelResources::default()));
}

#[test]
fn classifier_error_fails_closed() {
    let evaluator = model_evaluator(with_classifier(Arc::new(Broken)));
    assert!(evaluator.is_ready());
    assert_fail_closed(&evaluator);

    let (p, o) = elderly_post_op();
    let degradation = evaluator.evaluate(&p, &o).degradation.unwrap();
    assert_eq!(degradation.error_code, error_code::MODEL_ERROR);
}

#[test]
fn out_of_range_probability_fails_closed() {
    for bad in [1.5, -0.1, f64::NAN] {
        let evaluator = model_evaluator(with_classifier(Arc::new(Fixed(bad))));
        assert_fail_closed(&evaluator);
    }
}

#[test]
fn feature_count_mismatch_fails_closed() {
    let short = LogisticModel::new("short", 0.0, vec![0.1; 5], vec![], vec![]).unwrap();
    let evaluator = model_evaluator(with_classifier(Arc::new(short)));
    assert!(!evaluator.is_ready());
    assert_fail_closed(&evaluator);
    assert!(ModelStrategy::try_new(
        with_classifier(Arc::new(
            LogisticModel::new("short", 0.0, vec![0.1; 5], vec![], vec![]).unwrap()
        )),
        &CutoffConfig::default()
    )
    .is_err());
}

#[test]
fn degraded_evaluation_yields_tracker_event() {
    let evaluator = model_evaluator(ModelResources::default());
    let (p, o) = elderly_post_op();
    let event = evaluator.evaluate(&p, &o).degradation_event().unwrap();
    assert_eq!(event.component, "risk_evaluator");
    assert_eq!(event.fallback_used, "zero_score_low_category");
    assert!(event.failure.contains("classifier"));
}

#[test]
fn tracker_follows_degradation_and_recovery() {
    use wardrisk_core::constants::EVALUATOR_COMPONENT;
    use wardrisk_observability::DegradationTracker;

    let (p, o) = elderly_post_op();
    let mut tracker = DegradationTracker::new();

    let degraded = model_evaluator(ModelResources::default()).evaluate(&p, &o);
    tracker.observe(EVALUATOR_COMPONENT, degraded.degradation_event());
    assert!(tracker.is_degraded(EVALUATOR_COMPONENT));

    let healthy = model_evaluator(golden_resources()).evaluate(&p, &o);
    tracker.observe(EVALUATOR_COMPONENT, healthy.degradation_event());
    assert!(!tracker.is_degraded(EVALUATOR_COMPONENT));
}

/// Counts tracing events by their `event` field.
#[derive(Clone, Default)]
struct EventNames(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

impl EventNames {
    fn count(&self, name: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|n| *n == name).count()
    }
}

struct NameVisitor(Option<String>);

impl tracing::field::Visit for NameVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "event" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "event" {
            self.0 = Some(format!("{value:?}").trim_matches('"').to_string());
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventNames {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = NameVisitor(None);
        event.record(&mut visitor);
        if let Some(name) = visitor.0 {
            self.0.lock().unwrap().push(name);
        }
    }
}

#[test]
fn each_degraded_evaluation_is_logged_once() {
    use tracing_subscriber::layer::SubscriberExt;
    use wardrisk_core::constants::EVALUATOR_COMPONENT;
    use wardrisk_observability::DegradationTracker;

    let evaluator = model_evaluator(ModelResources::default());
    let (p, o) = elderly_post_op();
    let names = EventNames::default();
    let subscriber = tracing_subscriber::registry().with(names.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut tracker = DegradationTracker::new();
        for _ in 0..3 {
            let evaluation = evaluator.evaluate(&p, &o);
            tracker.observe(EVALUATOR_COMPONENT, evaluation.degradation_event());
        }
        assert_eq!(tracker.events().len(), 1);
        assert_eq!(tracker.events()[0].occurrences, 3);
    });

    assert_eq!(names.count("degradation_triggered"), 3);
    assert_eq!(names.count("evaluation_completed"), 3);
}
