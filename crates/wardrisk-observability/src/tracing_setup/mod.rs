//! Tracing setup: structured logging and event types.

pub mod events;

use tracing_subscriber::EnvFilter;
use wardrisk_core::config::{defaults, ObservabilityConfig};

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `WARDRISK_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Initialize tracing from the `[observability]` config section.
/// `WARDRISK_LOG` still wins when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .init();
}

/// Initialize tracing with a custom filter string (for testing or embedding).
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
