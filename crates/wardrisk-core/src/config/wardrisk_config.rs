//! Top-level wardrisk configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, CutoffConfig, ObservabilityConfig, RuleConfig, ScoringConfig};
use crate::errors::ConfigError;
use crate::models::StrategyKind;

/// Environment variable overriding `scoring.strategy`.
pub const STRATEGY_ENV_VAR: &str = "WARDRISK_STRATEGY";
/// Environment variable overriding `observability.log_level`.
pub const LOG_LEVEL_ENV_VAR: &str = "WARDRISK_LOG_LEVEL";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`WARDRISK_*`)
/// 2. TOML supplied by the host
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WardRiskConfig {
    pub rules: RuleConfig,
    pub cutoffs: CutoffConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl WardRiskConfig {
    /// Load configuration from a TOML string. Missing keys keep defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `WARDRISK_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (environment, test map).
    pub fn apply_overrides_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(STRATEGY_ENV_VAR) {
            self.scoring.strategy =
                raw.parse::<StrategyKind>()
                    .map_err(|message| ConfigError::ValidationFailed {
                        field: STRATEGY_ENV_VAR.to_string(),
                        message,
                    })?;
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV_VAR) {
            self.observability.log_level = level.trim().to_ascii_lowercase();
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rules = &self.rules;
        let finite_thresholds = [
            ("rules.hypotension_systolic", rules.hypotension_systolic),
            ("rules.low_albumin", rules.low_albumin),
            ("rules.pulse_low", rules.pulse_low),
            ("rules.pulse_high", rules.pulse_high),
            ("rules.temperature_low", rules.temperature_low),
            ("rules.temperature_high", rules.temperature_high),
            ("rules.respiration_low", rules.respiration_low),
            ("rules.respiration_high", rules.respiration_high),
            ("rules.elevated_crp", rules.elevated_crp),
            ("cutoffs.additive_high", self.cutoffs.additive_high),
            ("cutoffs.additive_medium", self.cutoffs.additive_medium),
        ];
        for (field, value) in finite_thresholds {
            if !value.is_finite() {
                return Err(validation(field, "must be finite"));
            }
        }

        let ranges = [
            ("rules.pulse_low", rules.pulse_low, rules.pulse_high),
            (
                "rules.temperature_low",
                rules.temperature_low,
                rules.temperature_high,
            ),
            (
                "rules.respiration_low",
                rules.respiration_low,
                rules.respiration_high,
            ),
        ];
        for (field, low, high) in ranges {
            if low >= high {
                return Err(validation(field, "must be below its upper bound"));
            }
        }

        if rules.max_points() > defaults::MAX_TOTAL_RULE_POINTS {
            return Err(ConfigError::ValidationFailed {
                field: "rules".to_string(),
                message: format!(
                    "rule points sum to {}, above the limit of {}",
                    rules.max_points(),
                    defaults::MAX_TOTAL_RULE_POINTS
                ),
            });
        }

        if self.cutoffs.additive_medium > self.cutoffs.additive_high {
            return Err(validation(
                "cutoffs.additive_medium",
                "must not exceed cutoffs.additive_high",
            ));
        }
        for (field, pct) in [
            ("cutoffs.high_percentile", self.cutoffs.high_percentile),
            ("cutoffs.medium_percentile", self.cutoffs.medium_percentile),
        ] {
            if !(0.0..=100.0).contains(&pct) {
                return Err(validation(field, "must be between 0 and 100"));
            }
        }
        if self.cutoffs.medium_percentile > self.cutoffs.high_percentile {
            return Err(validation(
                "cutoffs.medium_percentile",
                "must not exceed cutoffs.high_percentile",
            ));
        }

        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(validation(
                "observability.log_level",
                "must be one of trace, debug, info, warn, error",
            ));
        }
        Ok(())
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
