pub mod cutoff_config;
pub mod defaults;
pub mod observability_config;
pub mod rule_config;
pub mod scoring_config;
pub mod wardrisk_config;

pub use cutoff_config::CutoffConfig;
pub use observability_config::ObservabilityConfig;
pub use rule_config::RuleConfig;
pub use scoring_config::ScoringConfig;
pub use wardrisk_config::WardRiskConfig;
