//! The transition engine.

use super::error::{MachineError, UnexpectedEventError};
use super::hooks::{HookContext, HookRegistry};
use crate::core::{Event, State, StateHistory, TransitionRecord, TransitionTable};
use chrono::Utc;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A finite state machine driven by [`occur`](Machine::occur).
///
/// All machine data sits behind one lock that is held for the whole of
/// each `occur` call, so concurrent callers serialize and never observe a
/// half-applied transition. Hooks run while the lock is held: a hook must
/// not call back into the machine that invoked it.
///
/// `Err` is the error type shared by hooks and `occur`. Hook failures are
/// returned unchanged; an unexpected event is converted into `Err` via
/// `From`.
///
/// # Example
///
/// ```rust
/// use fsm::core::Transition;
/// use fsm::machine::Machine;
/// use fsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door { Opened, Closed }
/// }
/// event_enum! {
///     enum Push { PushOpen, PullShut }
/// }
///
/// let door: Machine<Door, Push> = Machine::new(
///     Door::Opened,
///     vec![
///         Transition::new(Door::Opened, Push::PullShut, Door::Closed),
///         Transition::new(Door::Closed, Push::PushOpen, Door::Opened),
///     ],
/// );
///
/// door.occur(Push::PullShut).unwrap();
/// assert_eq!(door.state(), Door::Closed);
///
/// let err = door.occur(Push::PullShut).unwrap_err();
/// assert_eq!(err.to_string(), "unexpected event PullShut for state Closed");
/// assert_eq!(door.state(), Door::Closed);
/// ```
pub struct Machine<S: State, E: Event, Err = MachineError<S, E>> {
    inner: Mutex<Inner<S, E, Err>>,
}

struct Inner<S: State, E: Event, Err> {
    current: S,
    table: TransitionTable<S, E>,
    hooks: HookRegistry<S, E, Err>,
    ignore_unexpected_events: bool,
    history: Option<StateHistory<S, E>>,
}

impl<S: State, E: Event, Err: 'static> Machine<S, E, Err> {
    /// Create a machine in `initial` with no hooks.
    ///
    /// Unexpected events are reported as errors until
    /// [`ignore_unexpected_events`](Self::ignore_unexpected_events) says
    /// otherwise.
    pub fn new(initial: S, table: impl Into<TransitionTable<S, E>>) -> Self {
        Self::with_hooks(initial, table, HookRegistry::new())
    }

    /// Create a machine in `initial` with the given hooks.
    pub fn with_hooks(
        initial: S,
        table: impl Into<TransitionTable<S, E>>,
        hooks: HookRegistry<S, E, Err>,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                current: initial,
                table: table.into(),
                hooks,
                ignore_unexpected_events: false,
                history: None,
            }),
        }
    }

    /// Set whether events without a matching transition succeed silently.
    pub fn ignore_unexpected_events(mut self, ignore: bool) -> Self {
        self.inner_mut().ignore_unexpected_events = ignore;
        self
    }

    /// Keep a log of committed transitions.
    ///
    /// A history with a limit of zero could never hold a record, so it
    /// leaves tracking off.
    pub fn track_history(mut self, history: StateHistory<S, E>) -> Self {
        self.inner_mut().history = (history.limit() > 0).then_some(history);
        self
    }

    // Hooks only run after lookup and state is only written after every
    // hook returned, so data behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Inner<S, E, Err>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn inner_mut(&mut self) -> &mut Inner<S, E, Err> {
        self.inner.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state.
    ///
    /// Blocks while a transition is in progress.
    pub fn state(&self) -> S {
        self.lock().current.clone()
    }

    /// Whether `event` has a transition out of the current state.
    pub fn can_occur(&self, event: &E) -> bool {
        let inner = self.lock();
        inner.table.find(&inner.current, event).is_some()
    }

    pub fn is_ignoring_unexpected_events(&self) -> bool {
        self.lock().ignore_unexpected_events
    }

    pub fn set_ignore_unexpected_events(&self, ignore: bool) {
        self.lock().ignore_unexpected_events = ignore;
    }

    /// Snapshot of the transition table.
    pub fn transitions(&self) -> TransitionTable<S, E> {
        self.lock().table.clone()
    }

    /// Snapshot of the transition log, if one is kept.
    pub fn history(&self) -> Option<StateHistory<S, E>> {
        self.lock().history.clone()
    }
}

impl<S, E, Err> Machine<S, E, Err>
where
    S: State,
    E: Event,
    Err: From<UnexpectedEventError<S, E>> + 'static,
{
    /// Handle an event that may cause a transition.
    ///
    /// The order of operations is:
    /// 1. find the first transition out of the current state for `event`
    /// 2. run the exit hooks of the current state
    /// 3. run the entry hooks of the destination state
    /// 4. update the current state
    ///
    /// The first failing hook aborts the call and its error is returned;
    /// the state is then unchanged. Without a matching transition the call
    /// fails with [`UnexpectedEventError`], or succeeds without doing
    /// anything when unexpected events are ignored.
    pub fn occur(&self, event: E) -> Result<(), Err> {
        self.lock().occur(event)
    }
}

impl<S: State, E: Event, Err> Inner<S, E, Err>
where
    Err: From<UnexpectedEventError<S, E>> + 'static,
{
    fn occur(&mut self, event: E) -> Result<(), Err> {
        let Some(transition) = self.table.find(&self.current, &event) else {
            if self.ignore_unexpected_events {
                tracing::trace!(
                    state = self.current.name(),
                    event = event.name(),
                    "ignoring unexpected event"
                );
                return Ok(());
            }
            return Err(UnexpectedEventError {
                event,
                state: self.current.clone(),
            }
            .into());
        };

        let ctx = HookContext {
            event: &event,
            from: &self.current,
            to: &transition.dst,
        };
        self.hooks.run_exit(&ctx)?;
        self.hooks.run_entry(&ctx)?;

        let from = std::mem::replace(&mut self.current, transition.dst.clone());
        tracing::debug!(
            from = from.name(),
            to = self.current.name(),
            event = event.name(),
            "transition committed"
        );

        if let Some(history) = self.history.as_mut() {
            history.record(TransitionRecord {
                from,
                to: self.current.clone(),
                event,
                timestamp: Utc::now(),
            });
        }
        Ok(())
    }
}
