//! Golden ward patients: expected additive results at default cutoffs.

use serde::Deserialize;
use wardrisk_core::models::{RiskCategory, RiskFactor};
use wardrisk_core::patient::{PatientObservation, PatientStatic};
use wardrisk_scoring::RiskEvaluator;

#[derive(Debug, Deserialize)]
struct GoldenFile {
    cases: Vec<GoldenCase>,
}

#[derive(Debug, Deserialize)]
struct GoldenCase {
    name: String,
    patient: PatientStatic,
    observation: PatientObservation,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    display_score: u8,
    category: RiskCategory,
    factors: Vec<RiskFactor>,
    substitutions: usize,
}

#[test]
fn golden_ward_patients() {
    let golden: GoldenFile = test_fixtures::load_fixture("golden/ward/patients.json");
    assert_eq!(golden.cases.len(), 7);

    let evaluator = RiskEvaluator::default();
    for case in &golden.cases {
        let evaluation = evaluator.evaluate(&case.patient, &case.observation);
        let result = &evaluation.result;
        assert_eq!(
            result.display_score.value(),
            case.expected.display_score,
            "{}: display score",
            case.name
        );
        assert_eq!(result.category, case.expected.category, "{}: category", case.name);
        assert_eq!(result.factors, case.expected.factors, "{}: factors", case.name);
        assert_eq!(
            evaluation.substitutions.len(),
            case.expected.substitutions,
            "{}: substitutions",
            case.name
        );
        assert!(!evaluation.is_degraded(), "{}: degraded", case.name);
    }
}
