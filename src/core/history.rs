//! Transition history tracking.
//!
//! A machine can optionally keep a log of every transition it fires. The log
//! is a runtime trace for diagnostics; it never records the machine's
//! definition, only what happened while it ran.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use reflex::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "closed",
///     to: "open",
///     trigger: 'o',
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "open");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord<S, T> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The trigger that selected the transition
    pub trigger: T,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of fired transitions, optionally bounded.
///
/// When a limit is set, recording past it drops the oldest record first.
///
/// # Example
///
/// ```rust
/// use reflex::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(TransitionRecord { from: 1, to: 2, trigger: 'a', timestamp: Utc::now() });
/// history.record(TransitionRecord { from: 2, to: 3, trigger: 'b', timestamp: Utc::now() });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&1, &2, &3]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, T> {
    records: VecDeque<TransitionRecord<S, T>>,
    limit: Option<usize>,
}

impl<S, T> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> StateHistory<S, T> {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` records.
    ///
    /// A limit of zero records nothing.
    ///
    /// ```rust
    /// use reflex::{StateHistory, TransitionRecord};
    /// use chrono::Utc;
    ///
    /// let mut history = StateHistory::with_limit(2);
    /// for to in 1..=3 {
    ///     history.record(TransitionRecord {
    ///         from: to - 1,
    ///         to,
    ///         trigger: (),
    ///         timestamp: Utc::now(),
    ///     });
    /// }
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(history.get_path(), vec![&1, &2, &3]);
    /// ```
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Maximum number of records kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a record, evicting the oldest one if the limit is reached.
    pub fn record(&mut self, record: TransitionRecord<S, T>) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.records.len() >= limit {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record, then the `to`
    /// state of each record in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        path.extend(self.records.iter().map(|record| &record.to));
        path
    }

    /// Time between the oldest and newest retained records.
    ///
    /// Returns `None` if the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Iterate over retained records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord<S, T>> {
        self.records.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord<S, T>> {
        self.records.back()
    }

    /// Number of records kept.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record, keeping the limit.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
