//! Core data model: identifiers, transitions and the transition log.
//!
//! Everything here is plain data with pure lookups; the locking engine
//! that drives it lives in [`crate::machine`].

mod history;
mod state;
mod transition;

pub use history::{StateHistory, TransitionRecord};
pub use state::{Event, State};
pub use transition::{TableWarning, Transition, TransitionTable};
