//! Degradation tracking for fail-closed evaluations.

pub mod tracker;

pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation, HISTORY_CAPACITY};
