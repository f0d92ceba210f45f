//! Transition rules and the ordered table the engine searches.

use super::state::{Event, State};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A legal move: on `event`, a machine in `src` moves to `dst`.
///
/// # Example
///
/// ```rust
/// use fsm::core::Transition;
/// use fsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door { Opened, Closed }
/// }
/// event_enum! {
///     enum Push { PushOpen, PullShut }
/// }
///
/// let t = Transition::new(Door::Opened, Push::PullShut, Door::Closed);
/// assert_eq!(t.src, Door::Opened);
/// assert_eq!(t.dst, Door::Closed);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, E: Event> {
    /// The state the machine must be in
    pub src: S,
    /// The state the machine moves to
    pub dst: S,
    /// The event that triggers the move
    pub event: E,
}

impl<S: State, E: Event> Transition<S, E> {
    pub fn new(src: S, event: E, dst: S) -> Self {
        Self { src, dst, event }
    }

    /// Check if this transition fires for `event` in `state` (pure)
    pub fn matches(&self, state: &S, event: &E) -> bool {
        self.event == *event && self.src == *state
    }
}

/// Diagnostics reported by [`TransitionTable::audit`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableWarning {
    #[error("Transition #{index} ({src} on {event}) is shadowed by transition #{shadowed_by}")]
    Shadowed {
        index: usize,
        shadowed_by: usize,
        src: String,
        event: String,
    },
}

/// Ordered list of transitions.
///
/// Lookup scans in insertion order and the first match wins. Later entries
/// repeating an earlier `(src, event)` pair are legal but never fire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct TransitionTable<S: State, E: Event> {
    transitions: Vec<Transition<S, E>>,
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<S: State, E: Event> From<Vec<Transition<S, E>>> for TransitionTable<S, E> {
    fn from(transitions: Vec<Transition<S, E>>) -> Self {
        Self::new(transitions)
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    pub fn new(transitions: Vec<Transition<S, E>>) -> Self {
        Self { transitions }
    }

    /// Append a transition after every existing one.
    pub fn push(&mut self, transition: Transition<S, E>) {
        self.transitions.push(transition);
    }

    /// Find the first transition for `event` out of `state`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm::core::{Transition, TransitionTable};
    /// use fsm::{event_enum, state_enum};
    ///
    /// state_enum! {
    ///     enum Light { Red, Green, Blue }
    /// }
    /// event_enum! {
    ///     enum Tick { Next }
    /// }
    ///
    /// let table = TransitionTable::new(vec![
    ///     Transition::new(Light::Red, Tick::Next, Light::Green),
    ///     Transition::new(Light::Red, Tick::Next, Light::Blue),
    /// ]);
    ///
    /// let found = table.find(&Light::Red, &Tick::Next).unwrap();
    /// assert_eq!(found.dst, Light::Green);
    /// assert!(table.find(&Light::Blue, &Tick::Next).is_none());
    /// ```
    pub fn find(&self, state: &S, event: &E) -> Option<&Transition<S, E>> {
        self.transitions.iter().find(|t| t.matches(state, event))
    }

    fn position(&self, state: &S, event: &E) -> Option<usize> {
        self.transitions.iter().position(|t| t.matches(state, event))
    }

    /// Events that have a transition out of `state`, in table order.
    pub fn events_from(&self, state: &S) -> Vec<&E> {
        let mut events: Vec<&E> = Vec::new();
        for t in self.transitions.iter().filter(|t| t.src == *state) {
            if !events.contains(&&t.event) {
                events.push(&t.event);
            }
        }
        events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition<S, E>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Report every entry that can never fire, accumulating all of them
    /// rather than stopping at the first.
    ///
    /// Shadowing is allowed; this is a diagnostic for table authors and is
    /// never checked by the engine.
    pub fn audit(&self) -> Validation<(), NonEmptyVec<TableWarning>> {
        let checks: Vec<Validation<(), NonEmptyVec<TableWarning>>> = self
            .transitions
            .iter()
            .enumerate()
            .map(|(index, t)| match self.position(&t.src, &t.event) {
                Some(winner) if winner < index => Validation::fail(TableWarning::Shadowed {
                    index,
                    shadowed_by: winner,
                    src: t.src.name().to_string(),
                    event: t.event.name().to_string(),
                }),
                _ => Validation::success(()),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<'a, S: State, E: Event> IntoIterator for &'a TransitionTable<S, E> {
    type Item = &'a Transition<S, E>;
    type IntoIter = std::slice::Iter<'a, Transition<S, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.transitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum TestState {
            Start,
            Middle,
            End,
        }
    }

    event_enum! {
        enum TestEvent {
            Go,
            Back,
        }
    }

    fn table() -> TransitionTable<TestState, TestEvent> {
        TransitionTable::new(vec![
            Transition::new(TestState::Start, TestEvent::Go, TestState::Middle),
            Transition::new(TestState::Middle, TestEvent::Go, TestState::End),
            Transition::new(TestState::Middle, TestEvent::Back, TestState::Start),
        ])
    }

    #[test]
    fn matches_requires_both_state_and_event() {
        let t = Transition::new(TestState::Start, TestEvent::Go, TestState::Middle);

        assert!(t.matches(&TestState::Start, &TestEvent::Go));
        assert!(!t.matches(&TestState::Start, &TestEvent::Back));
        assert!(!t.matches(&TestState::Middle, &TestEvent::Go));
    }

    #[test]
    fn find_returns_first_match() {
        let mut table = table();
        table.push(Transition::new(
            TestState::Start,
            TestEvent::Go,
            TestState::End,
        ));

        let found = table.find(&TestState::Start, &TestEvent::Go).unwrap();
        assert_eq!(found.dst, TestState::Middle);
    }

    #[test]
    fn find_misses_unknown_pairs() {
        let table = table();

        assert!(table.find(&TestState::End, &TestEvent::Go).is_none());
        assert!(table.find(&TestState::Start, &TestEvent::Back).is_none());
    }

    #[test]
    fn events_from_lists_outgoing_events_once() {
        let mut table = table();
        table.push(Transition::new(
            TestState::Middle,
            TestEvent::Go,
            TestState::Start,
        ));

        assert_eq!(
            table.events_from(&TestState::Middle),
            vec![&TestEvent::Go, &TestEvent::Back]
        );
        assert!(table.events_from(&TestState::End).is_empty());
    }

    #[test]
    fn audit_passes_for_unambiguous_table() {
        assert!(table().audit().is_success());
        assert!(TransitionTable::<TestState, TestEvent>::default()
            .audit()
            .is_success());
    }

    #[test]
    fn audit_accumulates_all_shadowed_entries() {
        let table = TransitionTable::new(vec![
            Transition::new(TestState::Start, TestEvent::Go, TestState::Middle),
            Transition::new(TestState::Start, TestEvent::Go, TestState::End),
            Transition::new(TestState::Middle, TestEvent::Go, TestState::End),
            Transition::new(TestState::Start, TestEvent::Go, TestState::Start),
        ]);

        match table.audit() {
            Validation::Failure(warnings) => {
                assert_eq!(warnings.len(), 2);
                assert!(warnings.iter().any(|w| matches!(
                    w,
                    TableWarning::Shadowed {
                        index: 1,
                        shadowed_by: 0,
                        ..
                    }
                )));
                assert!(warnings.iter().any(|w| matches!(
                    w,
                    TableWarning::Shadowed {
                        index: 3,
                        shadowed_by: 0,
                        ..
                    }
                )));
            }
            Validation::Success(_) => panic!("Expected shadowing warnings"),
        }
    }

    #[test]
    fn warning_renders_names() {
        let warning = TableWarning::Shadowed {
            index: 2,
            shadowed_by: 0,
            src: "Start".to_string(),
            event: "Go".to_string(),
        };

        assert_eq!(
            warning.to_string(),
            "Transition #2 (Start on Go) is shadowed by transition #0"
        );
    }

    #[test]
    fn table_serializes_as_list() {
        let table = table();
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.starts_with('['));

        let deserialized: TransitionTable<TestState, TestEvent> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(table, deserialized);
    }
}
