//! Value traits for machine states and triggers.
//!
//! States and triggers are plain values owned by the embedding application.
//! The engine only needs to compare them, hash states for table lookup, and
//! print them in diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Every state type designates exactly one initial value through
/// [`State::INITIAL`]. A [`Machine`](crate::Machine) starts there and
/// [`Machine::reset`](crate::Machine::reset) returns there.
///
/// # Required Traits
///
/// - `Clone`: the engine copies target states into the current slot
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states appear in log events
///
/// # Example
///
/// ```rust
/// use reflex::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Closed,
///     Open,
///     Locked,
/// }
///
/// impl State for DoorState {
///     const INITIAL: Self = DoorState::Closed;
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::INITIAL, DoorState::Closed);
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// ```
pub trait State: Clone + Eq + Hash + Debug {
    /// The designated initial state for this type.
    const INITIAL: Self;

    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this value is the designated initial state.
    fn is_initial(&self) -> bool {
        *self == Self::INITIAL
    }
}

/// Trait for external stimuli presented to a machine.
///
/// Blanket-implemented for every `Clone + PartialEq + Debug` type, so
/// `char`, integers, string slices and fieldless enums all work directly.
pub trait Trigger: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> Trigger for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Running,
        Stopped,
    }

    impl State for TestState {
        const INITIAL: Self = TestState::Idle;

        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Stopped => "Stopped",
            }
        }
    }

    fn assert_trigger<T: Trigger>(_: T) {}

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Stopped.name(), "Stopped");
    }

    #[test]
    fn is_initial_matches_designated_value() {
        assert!(TestState::Idle.is_initial());
        assert!(!TestState::Running.is_initial());
        assert!(!TestState::Stopped.is_initial());
    }

    #[test]
    fn primitive_types_are_triggers() {
        assert_trigger('a');
        assert_trigger(7u32);
        assert_trigger("start");
        assert_trigger(TestState::Running);
    }
}
