//! Degradation history: which component fell back, to what, and whether it
//! has since recovered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sift_core::config::defaults::DEFAULT_MAX_TRACKED_DEGRADATIONS;
use sift_core::models::DegradationEvent;
use sift_retrieval::{RetrievalOutcome, RetrievalStage, RERANK_COMPONENT};

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

/// A degradation event with its recovery status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// In-memory degradation log, bounded to `max_events` entries.
#[derive(Debug, Clone)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
    max_events: usize,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            max_events: DEFAULT_MAX_TRACKED_DEGRADATIONS,
        }
    }
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `max_events` entries (minimum 1). Recovered entries are
    /// evicted before active ones, oldest first.
    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events.max(1);
        self.prune();
        self
    }

    /// Record a new degradation event.
    pub fn record(&mut self, event: DegradationEvent) {
        events::degradation_triggered(&event.component, &event.failure, &event.fallback_used);
        self.events.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
        self.prune();
    }

    /// Feed the result of one retrieval. Only a run that actually reranked
    /// closes an active rerank degradation; runs that stopped before the
    /// rerank stage, or ran without a configured reranker, leave state alone.
    pub fn observe(&mut self, outcome: &RetrievalOutcome) {
        match outcome.stage {
            RetrievalStage::Reranked => {
                self.mark_recovered(RERANK_COMPONENT);
            }
            RetrievalStage::MmrFallback => {
                if let Some(event) = &outcome.degradation {
                    self.record(event.clone());
                }
            }
            RetrievalStage::NoHits | RetrievalStage::NoEligibleCandidates => {}
        }
    }

    fn prune(&mut self) {
        while self.events.len() > self.max_events {
            let idx = self
                .events
                .iter()
                .position(|t| t.recovery_status == RecoveryStatus::Recovered)
                .unwrap_or(0);
            self.events.remove(idx);
        }
    }

    /// Mark every active degradation of `component` as recovered.
    /// Returns how many entries changed.
    pub fn mark_recovered(&mut self, component: &str) -> usize {
        let since = self.degraded_since(component);
        let now = Utc::now();
        let mut recovered = 0;
        for tracked in self.events.iter_mut().filter(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        }) {
            tracked.recovery_status = RecoveryStatus::Recovered;
            tracked.recovered_at = Some(now);
            recovered += 1;
        }
        if let Some(since) = since {
            events::degradation_recovered(component, (now - since).num_seconds());
        }
        recovered
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    /// Active (unrecovered) degradations.
    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.degraded_since(component).is_some()
    }

    /// Count events in the last N seconds for a given component.
    pub fn count_recent(&self, component: &str, window_secs: i64) -> usize {
        let cutoff = Utc::now() - chrono::Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.event.component == component && t.event.timestamp > cutoff)
            .count()
    }

    /// Earliest timestamp of an active degradation for `component`.
    fn degraded_since(&self, component: &str) -> Option<DateTime<Utc>> {
        self.events
            .iter()
            .filter(|t| {
                t.event.component == component && t.recovery_status == RecoveryStatus::Active
            })
            .map(|t| t.event.timestamp)
            .min()
    }
}
