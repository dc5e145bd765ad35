pub mod cutoffs;
pub mod degradation_event;
pub mod display_score;
pub mod risk_category;
pub mod risk_factor;
pub mod risk_result;
pub mod strategy;
pub mod substitution;

pub use cutoffs::RiskCutoffs;
pub use degradation_event::DegradationEvent;
pub use display_score::DisplayScore;
pub use risk_category::RiskCategory;
pub use risk_factor::RiskFactor;
pub use risk_result::RiskResult;
pub use strategy::StrategyKind;
pub use substitution::FieldSubstitution;
