//! Bounded log of committed transitions.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use fsm::core::TransitionRecord;
/// use fsm::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Task { Pending, Running }
/// }
/// event_enum! {
///     enum Cmd { Start }
/// }
///
/// let record = TransitionRecord {
///     from: Task::Pending,
///     to: Task::Running,
///     event: Cmd::Start,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that caused the transition
    pub event: E,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, size-bounded history of committed transitions.
///
/// Once `limit` records are held, recording a new one evicts the oldest.
///
/// # Example
///
/// ```rust
/// use fsm::core::{StateHistory, TransitionRecord};
/// use fsm::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Step { A, B, C }
/// }
/// event_enum! {
///     enum Next { Advance }
/// }
///
/// let mut history = StateHistory::with_limit(2);
/// for (from, to) in [(Step::A, Step::B), (Step::B, Step::C), (Step::C, Step::A)] {
///     history.record(TransitionRecord {
///         from,
///         to,
///         event: Next::Advance,
///         timestamp: Utc::now(),
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec![&Step::B, &Step::C, &Step::A]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", from = "HistoryFields<S, E>")]
pub struct StateHistory<S: State, E: Event> {
    records: VecDeque<TransitionRecord<S, E>>,
    limit: usize,
}

/// Serialized form of [`StateHistory`], bounded on the way in.
#[derive(Deserialize)]
#[serde(bound = "")]
struct HistoryFields<S: State, E: Event> {
    records: VecDeque<TransitionRecord<S, E>>,
    limit: usize,
}

impl<S: State, E: Event> From<HistoryFields<S, E>> for StateHistory<S, E> {
    fn from(fields: HistoryFields<S, E>) -> Self {
        let HistoryFields { mut records, limit } = fields;
        let excess = records.len().saturating_sub(limit);
        records.drain(..excess);
        Self { records, limit }
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create an empty history retaining at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: TransitionRecord<S, E>) {
        if self.limit == 0 {
            return;
        }
        while self.records.len() >= self.limit {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of every record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Time between the oldest and newest retained record.
    ///
    /// Returns `None` if there are no records. Timestamps come from the
    /// wall clock, so a newest record older than the oldest one yields zero.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        let elapsed = last.timestamp.signed_duration_since(first.timestamp);
        Some(elapsed.to_std().unwrap_or(Duration::ZERO))
    }

    /// Records from oldest to newest.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord<S, E>> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord<S, E>> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
