//! Macros for declaring state and event identifier enums.
//!
//! The generated enums derive everything the [`State`](crate::core::State)
//! and [`Event`](crate::core::Event) traits require, so the calling crate
//! needs `serde` (with `derive`) among its dependencies.

#[doc(hidden)]
#[macro_export]
macro_rules! __identifier_enum {
    (
        $trait:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $trait for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a state enum implementing [`State`](crate::core::State).
///
/// # Example
///
/// ```
/// use fsm::core::State;
/// use fsm::state_enum;
///
/// state_enum! {
///     pub enum DoorState {
///         Opened,
///         Closed,
///     }
/// }
///
/// assert_eq!(DoorState::Opened.name(), "Opened");
/// ```
#[macro_export]
macro_rules! state_enum {
    ($($body:tt)*) => {
        $crate::__identifier_enum! { $crate::core::State; $($body)* }
    };
}

/// Generate an event enum implementing [`Event`](crate::core::Event).
///
/// # Example
///
/// ```
/// use fsm::core::Event;
/// use fsm::event_enum;
///
/// event_enum! {
///     pub enum DoorEvent {
///         PushOpen,
///         PullShut,
///     }
/// }
///
/// assert_eq!(DoorEvent::PullShut.name(), "PullShut");
/// ```
#[macro_export]
macro_rules! event_enum {
    ($($body:tt)*) => {
        $crate::__identifier_enum! { $crate::core::Event; $($body)* }
    };
}
