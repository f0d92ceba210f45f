//! Identifier traits for machine states and events.
//!
//! Both are opaque, comparable values with no behaviour of their own. The
//! caller picks the universe (usually a closed enum) and the engine stays
//! generic over it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed out by value
/// - `Eq` + `Hash`: states key the hook registry and are matched in the table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: tables and transition logs are serializable
///
/// # Example
///
/// ```rust
/// use fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Opened,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Opened => "Opened",
///             Self::Closed => "Closed",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for events that drive transitions.
///
/// Same nature as [`State`]: a named, comparable identifier.
///
/// # Example
///
/// ```rust
/// use fsm::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorEvent {
///     PushOpen,
///     PullShut,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::PushOpen => "PushOpen",
///             Self::PullShut => "PullShut",
///         }
///     }
/// }
/// ```
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            "Start"
        }
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestEvent::Start.name(), "Start");
    }

    #[test]
    fn states_are_hashable() {
        let mut seen = HashSet::new();
        seen.insert(TestState::Idle);
        seen.insert(TestState::Idle);
        seen.insert(TestState::Running);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Running;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
