//! # wardrisk-core
//!
//! Foundation crate for ward fall-risk evaluation.
//! Defines patient inputs, result models, traits, errors, config, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod patient;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WardRiskConfig;
pub use errors::{WardRiskError, WardRiskResult};
pub use models::{
    DisplayScore, FieldSubstitution, RiskCategory, RiskCutoffs, RiskFactor, RiskResult,
    StrategyKind,
};
pub use patient::{MentalStatus, ObservationField, PatientObservation, PatientStatic, Sex};
