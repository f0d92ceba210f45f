//! Declarative machine definitions.
//!
//! A [`MachineConfig`] describes everything about a machine except its
//! hooks: the initial state, the ordered transitions, the unexpected-event
//! policy and the transition log size. Hooks are code and are attached with
//! [`MachineBuilder`](crate::builder::MachineBuilder) after loading.
//!
//! ```json
//! {
//!   "initial": "Opened",
//!   "transitions": [
//!     { "src": "Opened", "dst": "Closed", "event": "PullShut" },
//!     { "src": "Closed", "dst": "Opened", "event": "PushOpen" }
//!   ],
//!   "ignore_unexpected_events": true
//! }
//! ```

use crate::builder::{BuildError, MachineBuilder};
use crate::core::{Event, State, Transition};
use crate::machine::Machine;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Serializable definition of a machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State, E: Event> {
    /// State the machine starts in
    pub initial: S,

    /// Transitions in lookup order
    #[serde(default)]
    pub transitions: Vec<Transition<S, E>>,

    /// Whether events with no matching transition succeed silently
    #[serde(default)]
    pub ignore_unexpected_events: bool,

    /// Number of committed transitions to keep, if any
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    /// A strict configuration with no transitions and no history.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            transitions: Vec::new(),
            ignore_unexpected_events: false,
            history_limit: None,
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm::config::MachineConfig;
    /// use fsm::{event_enum, state_enum};
    ///
    /// state_enum! {
    ///     enum Door { Opened, Closed }
    /// }
    /// event_enum! {
    ///     enum Push { PushOpen, PullShut }
    /// }
    ///
    /// let config: MachineConfig<Door, Push> = MachineConfig::from_json(
    ///     r#"{
    ///         "initial": "Opened",
    ///         "transitions": [{ "src": "Opened", "dst": "Closed", "event": "PullShut" }]
    ///     }"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.initial, Door::Opened);
    /// assert!(!config.ignore_unexpected_events);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    /// Build a machine with no hooks from this configuration.
    pub fn build<Err: 'static>(self) -> Result<Machine<S, E, Err>, BuildError> {
        MachineBuilder::from_config(self).build()
    }
}
