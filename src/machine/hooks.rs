//! Per-state exit and entry hooks.

use crate::core::{Event, State};
use std::collections::HashMap;

/// What a hook sees of the transition that invoked it.
#[derive(Clone, Copy, Debug)]
pub struct HookContext<'a, S, E> {
    /// The event being handled
    pub event: &'a E,
    /// The state being left
    pub from: &'a S,
    /// The state being entered
    pub to: &'a S,
}

/// A boxed hook as stored in the registry.
pub type Hook<S, E, Err> = Box<dyn FnMut(&HookContext<'_, S, E>) -> Result<(), Err> + Send>;

/// Two mappings from state to ordered hook sequences.
///
/// Exit hooks of a state run when a transition leaves it, entry hooks when
/// a transition enters it. A state with no registered hooks behaves as an
/// empty sequence.
///
/// # Example
///
/// ```rust
/// use fsm::machine::{HookRegistry, MachineError};
/// use fsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door { Opened, Closed }
/// }
/// event_enum! {
///     enum Push { PushOpen, PullShut }
/// }
///
/// let hooks: HookRegistry<Door, Push, MachineError<Door, Push>> = HookRegistry::new()
///     .on_exit(Door::Opened, |_event| {
///         println!("Slam!");
///         Ok(())
///     })
///     .on_entry_with(Door::Closed, |ctx| {
///         println!("{:?} -> {:?}", ctx.from, ctx.to);
///         Ok(())
///     });
///
/// assert_eq!(hooks.exit_hook_count(&Door::Opened), 1);
/// assert_eq!(hooks.entry_hook_count(&Door::Opened), 0);
/// ```
pub struct HookRegistry<S: State, E: Event, Err> {
    on_exit: HashMap<S, Vec<Hook<S, E, Err>>>,
    on_entry: HashMap<S, Vec<Hook<S, E, Err>>>,
}

impl<S: State, E: Event, Err: 'static> Default for HookRegistry<S, E, Err> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event, Err: 'static> HookRegistry<S, E, Err> {
    pub fn new() -> Self {
        Self {
            on_exit: HashMap::new(),
            on_entry: HashMap::new(),
        }
    }

    /// Append an exit hook for `state` that receives the event.
    pub fn on_exit<F>(self, state: S, mut hook: F) -> Self
    where
        F: FnMut(&E) -> Result<(), Err> + Send + 'static,
    {
        self.on_exit_with(state, move |ctx| hook(ctx.event))
    }

    /// Append an exit hook for `state` that receives the full transition.
    pub fn on_exit_with<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut(&HookContext<'_, S, E>) -> Result<(), Err> + Send + 'static,
    {
        self.on_exit.entry(state).or_default().push(Box::new(hook));
        self
    }

    /// Append an entry hook for `state` that receives the event.
    pub fn on_entry<F>(self, state: S, mut hook: F) -> Self
    where
        F: FnMut(&E) -> Result<(), Err> + Send + 'static,
    {
        self.on_entry_with(state, move |ctx| hook(ctx.event))
    }

    /// Append an entry hook for `state` that receives the full transition.
    pub fn on_entry_with<F>(mut self, state: S, hook: F) -> Self
    where
        F: FnMut(&HookContext<'_, S, E>) -> Result<(), Err> + Send + 'static,
    {
        self.on_entry.entry(state).or_default().push(Box::new(hook));
        self
    }

    pub fn exit_hook_count(&self, state: &S) -> usize {
        self.on_exit.get(state).map_or(0, Vec::len)
    }

    pub fn entry_hook_count(&self, state: &S) -> usize {
        self.on_entry.get(state).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.on_exit.values().all(Vec::is_empty) && self.on_entry.values().all(Vec::is_empty)
    }

    /// Run the exit hooks of `ctx.from` in order, stopping at the first failure.
    pub(crate) fn run_exit(&mut self, ctx: &HookContext<'_, S, E>) -> Result<(), Err> {
        run_all(self.on_exit.get_mut(ctx.from), ctx)
    }

    /// Run the entry hooks of `ctx.to` in order, stopping at the first failure.
    pub(crate) fn run_entry(&mut self, ctx: &HookContext<'_, S, E>) -> Result<(), Err> {
        run_all(self.on_entry.get_mut(ctx.to), ctx)
    }
}

fn run_all<S, E, Err>(
    hooks: Option<&mut Vec<Hook<S, E, Err>>>,
    ctx: &HookContext<'_, S, E>,
) -> Result<(), Err> {
    for hook in hooks.into_iter().flatten() {
        hook(ctx)?;
    }
    Ok(())
}
