//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{Event, State, StateHistory, Transition, TransitionTable};
use crate::machine::{HookContext, HookRegistry, Machine, MachineError};

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```
/// use fsm::builder::MachineBuilder;
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
/// let door: Machine<Door, Push> = MachineBuilder::new()
///     .initial(Door::Opened)
///     .transition(Door::Opened, Push::PullShut, Door::Closed)
///     .transition(Door::Closed, Push::PushOpen, Door::Opened)
///     .on_exit(Door::Opened, |_| {
///         println!("Slam!");
///         Ok(())
///     })
///     .ignore_unexpected_events(true)
///     .build()
///     .unwrap();
///
/// door.occur(Push::PushOpen).unwrap();
/// assert_eq!(door.state(), Door::Opened);
/// ```
pub struct MachineBuilder<S: State, E: Event, Err = MachineError<S, E>> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E>>,
    hooks: HookRegistry<S, E, Err>,
    ignore_unexpected_events: bool,
    history_limit: Option<usize>,
}

impl<S: State, E: Event, Err: 'static> MachineBuilder<S, E, Err> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            hooks: HookRegistry::new(),
            ignore_unexpected_events: false,
            history_limit: None,
        }
    }

    /// Start from a declarative configuration. Hooks are added afterwards.
    pub fn from_config(config: MachineConfig<S, E>) -> Self {
        Self {
            initial: Some(config.initial),
            transitions: config.transitions,
            hooks: HookRegistry::new(),
            ignore_unexpected_events: config.ignore_unexpected_events,
            history_limit: config.history_limit,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition after all previously added ones.
    pub fn transition(self, src: S, event: E, dst: S) -> Self {
        self.add_transition(Transition::new(src, event, dst))
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Replace every hook registered so far.
    pub fn hooks(mut self, hooks: HookRegistry<S, E, Err>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn on_exit<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut(&E) -> Result<(), Err> + Send + 'static,
    {
        self.hooks = self.hooks.on_exit(state, hook);
        self
    }

    pub fn on_exit_with<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut(&HookContext<'_, S, E>) -> Result<(), Err> + Send + 'static,
    {
        self.hooks = self.hooks.on_exit_with(state, hook);
        self
    }

    pub fn on_entry<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut(&E) -> Result<(), Err> + Send + 'static,
    {
        self.hooks = self.hooks.on_entry(state, hook);
        self
    }

    pub fn on_entry_with<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut(&HookContext<'_, S, E>) -> Result<(), Err> + Send + 'static,
    {
        self.hooks = self.hooks.on_entry_with(state, hook);
        self
    }

    /// Set whether events without a matching transition succeed silently.
    /// Defaults to `false`.
    pub fn ignore_unexpected_events(mut self, ignore: bool) -> Self {
        self.ignore_unexpected_events = ignore;
        self
    }

    /// Keep the last `limit` committed transitions.
    pub fn track_history(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<S, E, Err>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let machine = Machine::with_hooks(
            initial,
            TransitionTable::new(self.transitions),
            self.hooks,
        )
        .ignore_unexpected_events(self.ignore_unexpected_events);

        match self.history_limit {
            Some(0) => Err(BuildError::InvalidHistoryLimit),
            Some(limit) => Ok(machine.track_history(StateHistory::with_limit(limit))),
            None => Ok(machine),
        }
    }
}

impl<S: State, E: Event, Err: 'static> Default for MachineBuilder<S, E, Err> {
    fn default() -> Self {
        Self::new()
    }
}
