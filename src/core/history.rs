//! Record of fired transitions.
//!
//! The driver itself keeps no history. [`StateMachine`](crate::machine::StateMachine)
//! records every transition it observes here, which is handy for debugging
//! AI behavior or asserting on a sequence of states in tests.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// A single fired transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: StateId,
    pub to: StateId,
    pub from_name: String,
    pub to_name: String,
    /// Index of the transition in the source's outgoing list
    pub transition: usize,
    /// Seconds spent in the source state, including the firing tick
    pub elapsed: f32,
    /// Frames spent in the source state, including the firing tick
    pub frames: u64,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, optionally bounded history of fired transitions.
///
/// When a limit is set the oldest records are dropped first.
///
/// # Example
///
/// ```rust
/// use tickstate::core::TransitionHistory;
///
/// let history = TransitionHistory::new();
/// assert!(history.is_empty());
/// assert!(history.get_path().is_empty());
/// assert!(history.duration().is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    limit: Option<usize>,
}

impl TransitionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            records: VecDeque::new(),
            limit,
        }
    }

    pub fn record(&mut self, record: TransitionRecord) {
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit {
            while self.records.len() >= limit {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    /// States traversed: the first recorded source, then every target.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    /// Wall-clock time between the first and the last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
