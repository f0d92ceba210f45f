//! The transition engine and its hooks.
//!
//! A [`Machine`] owns its current state, a [`TransitionTable`], a
//! [`HookRegistry`] and the policy for events with no matching transition.
//! [`Machine::occur`] is the only way to drive it.
//!
//! # Ordering
//!
//! For each event that matches a transition:
//!
//! - every exit hook of the current state runs, in registration order
//! - then every entry hook of the destination state, in registration order
//! - then the state is updated
//!
//! The first hook that fails aborts the call and leaves the state as it
//! was.
//!
//! [`TransitionTable`]: crate::core::TransitionTable

mod error;
mod hooks;
#[allow(clippy::module_inception)]
mod machine;

pub use error::{MachineError, UnexpectedEventError};
pub use hooks::{Hook, HookContext, HookRegistry};
pub use machine::Machine;
