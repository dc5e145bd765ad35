//! RiskEvaluator end-to-end: scoring, categories, substitutions, checklist.

use wardrisk_core::config::WardRiskConfig;
use wardrisk_core::models::{RiskCategory, RiskCutoffs, RiskFactor, StrategyKind};
use wardrisk_core::patient::{MentalStatus, ObservationField, PatientObservation, PatientStatic, Sex};
use wardrisk_core::traits::IRiskEvaluator;
use wardrisk_scoring::{
    evaluate, recommended_interventions, EvaluationStatus, Intervention, ModelResources,
    RiskEvaluator,
};

fn elderly_post_op() -> (PatientStatic, PatientObservation) {
    (
        PatientStatic::new(78, Sex::Female),
        PatientObservation {
            systolic_bp: 95.0,
            albumin: 2.6,
            severity_class: 3,
            ..PatientObservation::default()
        },
    )
}

#[test]
fn elderly_post_op_is_high_risk() {
    let (p, o) = elderly_post_op();
    let evaluation = RiskEvaluator::default().evaluate(&p, &o);
    let result = &evaluation.result;

    assert_eq!(result.raw_score, 75.0);
    assert_eq!(result.display_score.value(), 75);
    assert_eq!(result.category, RiskCategory::High);
    assert_eq!(
        result.factor_labels(),
        vec!["advanced age", "hypotension", "low albumin", "high acuity"]
    );
    assert_eq!(result.strategy, StrategyKind::Additive);
    assert_eq!(evaluation.status(), EvaluationStatus::Normal);
}

#[test]
fn stable_young_adult_is_low_risk() {
    let p = PatientStatic::new(32, Sex::Male);
    let result = RiskEvaluator::default().score(&p, &PatientObservation::default());
    assert_eq!(result.display_score.value(), 0);
    assert_eq!(result.category, RiskCategory::Low);
    assert!(result.factors.is_empty());
}

#[test]
fn display_score_clamps_at_ninety_nine() {
    let p = PatientStatic::new(90, Sex::Male);
    let o = PatientObservation {
        systolic_bp: 80.0,
        pulse_rate: 120.0,
        respiratory_rate: 30.0,
        body_temperature: 38.5,
        albumin: 2.0,
        crp: 8.0,
        mental_status: Some(MentalStatus::Stupor),
        severity_class: 4,
        sedative_administered: true,
        ..PatientObservation::default()
    };
    let result = RiskEvaluator::default().score(&p, &o);
    assert_eq!(result.raw_score, 135.0);
    assert_eq!(result.display_score.value(), 99);
    assert_eq!(result.factors.len(), RiskFactor::ALL.len());
}

#[test]
fn evaluation_is_idempotent() {
    let (p, o) = elderly_post_op();
    let evaluator = RiskEvaluator::default();
    let first = evaluator.evaluate(&p, &o);
    let second = evaluator.evaluate(&p, &o);
    assert_eq!(first, second);
}

#[test]
fn out_of_range_fields_are_defaulted_and_recorded() {
    let p = PatientStatic { age: -4, sex: None };
    let o = PatientObservation {
        albumin: f64::NAN,
        systolic_bp: 0.0,
        mental_status: None,
        ..PatientObservation::default()
    };
    let evaluation = RiskEvaluator::default().evaluate(&p, &o);

    assert_eq!(evaluation.status(), EvaluationStatus::Defaulted);
    assert!(evaluation.used_defaults());
    let fields: Vec<ObservationField> = evaluation.substitutions.iter().map(|s| s.field).collect();
    for field in [
        ObservationField::Age,
        ObservationField::Sex,
        ObservationField::SystolicBp,
        ObservationField::Albumin,
        ObservationField::MentalStatus,
    ] {
        assert!(fields.contains(&field), "missing substitution for {field}");
    }
    // Defaults are normal-range values, so nothing triggers.
    assert!(evaluation.result.factors.is_empty());
    assert_eq!(evaluation.result.category, RiskCategory::Low);
}

#[test]
fn inputs_are_not_mutated() {
    let (p, o) = elderly_post_op();
    let (p_before, o_before) = (p.clone(), o.clone());
    let _ = RiskEvaluator::default().evaluate(&p, &o);
    assert_eq!(p, p_before);
    assert_eq!(o, o_before);
}

#[test]
fn custom_cutoffs_move_the_category() {
    let (p, o) = elderly_post_op();
    let strict = RiskCutoffs::new(90.0, 80.0).unwrap();
    assert_eq!(evaluate(&p, &o, &strict).category, RiskCategory::Low);
    let lenient = RiskCutoffs::new(20.0, 10.0).unwrap();
    assert_eq!(evaluate(&p, &o, &lenient).category, RiskCategory::High);
}

#[test]
fn free_evaluate_matches_default_evaluator() {
    let (p, o) = elderly_post_op();
    assert_eq!(
        evaluate(&p, &o, &RiskCutoffs::default()),
        RiskEvaluator::default().score(&p, &o)
    );
}

#[test]
fn configured_points_are_honored() {
    let config = WardRiskConfig::from_toml(
        r#"
        [rules]
        advanced_age_points = 40

        [cutoffs]
        additive_high = 60.0
        additive_medium = 30.0
        "#,
    )
    .unwrap();
    let evaluator = RiskEvaluator::additive(&config).unwrap();
    let result = evaluator.score(&PatientStatic::new(75, Sex::Male), &PatientObservation::default());
    assert_eq!(result.display_score.value(), 40);
    assert_eq!(result.category, RiskCategory::Medium);
}

#[test]
fn from_config_selects_strategy() {
    let config = WardRiskConfig::default();
    let evaluator = RiskEvaluator::from_config(&config, ModelResources::default()).unwrap();
    assert_eq!(evaluator.strategy_kind(), StrategyKind::Additive);
    assert!(evaluator.is_ready());
    assert_eq!(evaluator.cutoffs(), Some(RiskCutoffs::default()));

    let mut config = WardRiskConfig::default();
    config.scoring.strategy = StrategyKind::ModelProbability;
    let evaluator = RiskEvaluator::from_config(&config, ModelResources::default()).unwrap();
    assert_eq!(evaluator.strategy_kind(), StrategyKind::ModelProbability);
    assert!(!evaluator.is_ready());
}

#[test]
fn checklist_for_high_risk_patient() {
    let (p, mut o) = elderly_post_op();
    o.sedative_administered = true;
    let result = RiskEvaluator::default().score(&p, &o);
    assert_eq!(
        recommended_interventions(&result),
        vec![
            Intervention::BedRailsRaised,
            Intervention::FallRiskSignage,
            Intervention::HourlyRounding,
            Intervention::PostSedativeObservation,
            Intervention::NutritionConsult,
        ]
    );
}

#[test]
fn evaluation_serializes_for_the_host() {
    let (p, o) = elderly_post_op();
    let evaluation = RiskEvaluator::default().evaluate(&p, &o);
    let json = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(json["result"]["category"], "high");
    assert_eq!(json["result"]["strategy"], "additive");
    assert_eq!(json["result"]["factors"][0], "advanced_age");
    assert!(json["degradation"].is_null());
}
