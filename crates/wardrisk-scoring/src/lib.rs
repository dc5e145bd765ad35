//! # wardrisk-scoring
//!
//! Ward fall-risk evaluator.
//! Sanitizes patient input, evaluates rule factors, and scores with either
//! additive rule points or an injected classifier's probability against
//! percentile cutoffs. Fails closed when model resources are unavailable.

pub mod checklist;
pub mod engine;
pub mod model;
pub mod outcome;
pub mod rules;
pub mod sanitize;
pub mod strategies;

pub use checklist::{recommended_interventions, Intervention};
pub use engine::{evaluate, RiskEvaluator};
pub use model::{FeatureSchema, LogisticModel, ReferenceDistribution};
pub use outcome::{Degradation, Evaluation, EvaluationStatus};
pub use strategies::{AdditiveStrategy, ModelResources, ModelStrategy, ScoringStrategy};
