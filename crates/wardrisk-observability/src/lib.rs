//! # wardrisk-observability
//!
//! Structured tracing setup, one event function per evaluator milestone,
//! and a tracker for fail-closed degradations.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{
    DegradationTracker, RecoveryStatus, TrackedDegradation, HISTORY_CAPACITY,
};
pub use tracing_setup::events;
