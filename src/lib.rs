//! A minimal finite state machine with ordered exit and entry hooks.
//!
//! Events cause transitions between states, and leaving or entering a
//! state may be hooked by registering one or more functions to be called.
//! A machine is safe to drive from many threads at once: each event is
//! handled to completion under a single lock.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: caller-defined identifiers via the `State` and
//!   `Event` traits (or the `state_enum!` / `event_enum!` macros)
//! - **Transition table**: ordered `(src, event, dst)` rules, first match wins
//! - **Hooks**: exit hooks of the old state run before entry hooks of the new
//!   one; the first failure aborts the transition and nothing changes
//! - **Machine**: owns the current state and exposes `occur(event)`
//!
//! # Example
//!
//! ```rust
//! use fsm::builder::MachineBuilder;
//! use fsm::machine::Machine;
//! use fsm::{event_enum, state_enum};
//!
//! state_enum! {
//!     pub enum DoorState {
//!         Opened,
//!         Closed,
//!     }
//! }
//!
//! event_enum! {
//!     pub enum DoorEvent {
//!         PushOpen,
//!         PullShut,
//!     }
//! }
//!
//! let door: Machine<DoorState, DoorEvent> = MachineBuilder::new()
//!     .initial(DoorState::Opened)
//!     .transition(DoorState::Opened, DoorEvent::PullShut, DoorState::Closed)
//!     .transition(DoorState::Closed, DoorEvent::PushOpen, DoorState::Opened)
//!     .on_exit(DoorState::Opened, |_| {
//!         println!("Slam!");
//!         Ok(())
//!     })
//!     .on_exit(DoorState::Closed, |_| {
//!         println!("Creaaak!");
//!         Ok(())
//!     })
//!     .ignore_unexpected_events(true)
//!     .build()
//!     .unwrap();
//!
//! door.occur(DoorEvent::PushOpen).unwrap(); // no transition, ignored
//! assert_eq!(door.state(), DoorState::Opened);
//!
//! door.occur(DoorEvent::PullShut).unwrap();
//! assert_eq!(door.state(), DoorState::Closed);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use config::{ConfigError, MachineConfig};
pub use self::core::{Event, State, Transition, TransitionTable};
pub use machine::{HookContext, HookRegistry, Machine, MachineError, UnexpectedEventError};
