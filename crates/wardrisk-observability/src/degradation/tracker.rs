//! Record degradation episodes: component, failure mode, fallback used,
//! first and last occurrence, recovery status.
//!
//! Repeated degradations of a component that is already degraded fold into
//! its active episode, and the history keeps at most `HISTORY_CAPACITY`
//! episodes, so a permanently degraded evaluator does not grow the tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wardrisk_core::models::DegradationEvent;

use crate::tracing_setup::events;

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still in degraded mode.
    Active,
    /// Recovered to normal operation.
    Recovered,
}

/// Maximum number of episodes kept; the oldest is dropped first.
pub const HISTORY_CAPACITY: usize = 128;

/// One degradation episode with recovery status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    /// The event that opened the episode.
    pub event: DegradationEvent,
    /// Degradations folded into this episode, including the first.
    pub occurrences: u64,
    pub last_seen: DateTime<Utc>,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Tracks degradation events so the host can show a degraded-mode banner.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a degradation event. The evaluator has already logged it.
    ///
    /// If the component has an active episode the event is folded into it;
    /// otherwise a new episode opens.
    pub fn record(&mut self, event: DegradationEvent) {
        if let Some(active) = self.events.iter_mut().find(|t| {
            t.event.component == event.component && t.recovery_status == RecoveryStatus::Active
        }) {
            active.occurrences = active.occurrences.saturating_add(1);
            active.last_seen = active.last_seen.max(event.timestamp);
            return;
        }

        if self.events.len() >= HISTORY_CAPACITY {
            self.events.remove(0);
        }
        self.events.push(TrackedDegradation {
            last_seen: event.timestamp,
            event,
            occurrences: 1,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
    }

    /// Feed the outcome of one evaluation: a degradation is recorded, a
    /// clean evaluation marks the component recovered.
    pub fn observe(&mut self, component: &str, degradation: Option<DegradationEvent>) {
        match degradation {
            Some(event) => self.record(event),
            None => self.mark_recovered(component),
        }
    }

    /// Mark every active degradation of a component as recovered.
    pub fn mark_recovered(&mut self, component: &str) {
        let now = Utc::now();
        let mut recovered = false;
        for tracked in self.events.iter_mut() {
            if tracked.event.component == component
                && tracked.recovery_status == RecoveryStatus::Active
            {
                tracked.recovery_status = RecoveryStatus::Recovered;
                tracked.recovered_at = Some(now);
                recovered = true;
            }
        }
        if recovered {
            events::degradation_recovered(component);
        }
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    /// Get active (unrecovered) degradations.
    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.events.iter().any(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        })
    }

    /// Count episodes of a component seen in the last N seconds.
    pub fn count_recent(&self, component: &str, window_secs: i64) -> usize {
        let cutoff = Utc::now() - chrono::Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.event.component == component && t.last_seen > cutoff)
            .count()
    }

    /// Duration a component has been continuously degraded, or None if not degraded.
    pub fn degraded_duration(&self, component: &str) -> Option<chrono::Duration> {
        let opened = self
            .events
            .iter()
            .find(|t| {
                t.event.component == component && t.recovery_status == RecoveryStatus::Active
            })?
            .event
            .timestamp;
        Some(Utc::now() - opened)
    }
}
