//! Transition history tracking.
//!
//! Provides immutable tracking of committed transitions over time. The
//! machine records one entry per successful event; failed events leave
//! the history untouched.

use super::event::WeaponEvent;
use super::state::WeaponState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// Records are immutable values capturing the move between two states,
/// the event that caused it, and the durability on both sides of the
/// commit.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state transitioned from.
    pub from: WeaponState,
    /// The state transitioned to.
    pub to: WeaponState,
    /// The event that drove the transition.
    pub event: WeaponEvent,
    /// Durability before the delta was applied.
    pub durability_before: i32,
    /// Durability after the delta was applied.
    pub durability_after: i32,
    /// When the transition was committed.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// History is immutable - `record` returns a new history with the entry
/// appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use tempered::core::{TransitionHistory, TransitionRecord, WeaponEvent, WeaponState};
/// use chrono::Utc;
///
/// let history = TransitionHistory::new();
/// let history = history.record(TransitionRecord {
///     from: WeaponState::Idle,
///     to: WeaponState::Upgrading,
///     event: WeaponEvent::UpgradeStart,
///     durability_before: 100,
///     durability_after: 90,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.records().len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: Vec<TransitionRecord>,
}

impl TransitionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed: the initial `from`, then the
    /// `to` state of each transition in order.
    pub fn path(&self) -> Vec<WeaponState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Total duration from first to last committed transition.
    ///
    /// Returns `None` while the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    /// All recorded transitions in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of committed transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether no transitions have been committed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
