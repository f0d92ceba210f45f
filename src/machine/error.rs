//! Failure values returned by [`Machine::occur`](super::Machine::occur).

use crate::core::{Event, State};
use thiserror::Error;

/// No transition matches the current state and the incoming event.
///
/// Returned only when the machine is not ignoring unexpected events. The
/// machine is left untouched and remains usable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unexpected event {} for state {}", .event.name(), .state.name())]
pub struct UnexpectedEventError<S: State, E: Event> {
    /// The event that had no matching transition
    pub event: E,
    /// The machine's state when the event occurred
    pub state: S,
}

/// Default error type for machines whose hooks don't need their own.
///
/// Any error type works as a machine's error as long as it can be built
/// from an [`UnexpectedEventError`]; hook failures are returned exactly as
/// the hook produced them.
#[derive(Debug, Error)]
pub enum MachineError<S: State, E: Event> {
    #[error(transparent)]
    UnexpectedEvent(#[from] UnexpectedEventError<S, E>),

    #[error("{0}")]
    Hook(Box<dyn std::error::Error + Send + Sync>),
}

impl<S: State, E: Event> MachineError<S, E> {
    /// Wrap a hook failure.
    ///
    /// ```rust
    /// use fsm::machine::MachineError;
    /// use fsm::{event_enum, state_enum};
    ///
    /// state_enum! {
    ///     enum Lock { Locked }
    /// }
    /// event_enum! {
    ///     enum Key { Turn }
    /// }
    ///
    /// let err: MachineError<Lock, Key> = MachineError::hook("jammed");
    /// assert_eq!(err.to_string(), "jammed");
    /// ```
    pub fn hook(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Hook(err.into())
    }

    /// The unexpected-event payload, if that is what this error is.
    pub fn as_unexpected_event(&self) -> Option<&UnexpectedEventError<S, E>> {
        match self {
            Self::UnexpectedEvent(err) => Some(err),
            Self::Hook(_) => None,
        }
    }
}
