//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders, helper constructors and the
//! `state_enum!` macro for declaring machines with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{State, Trigger};
use crate::engine::Transition;

/// Create an unguarded transition with no action.
///
/// # Example
///
/// ```
/// use reflex::builder::simple_transition;
/// use reflex::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
///     initial: Start
/// }
///
/// let transition = simple_transition(MyState::Start, MyState::End, 'x');
/// assert!(transition.guard_passes());
/// ```
pub fn simple_transition<'a, S, T>(from: S, to: S, trigger: T) -> Transition<'a, S, T>
where
    S: State,
    T: Trigger,
{
    Transition::new(from, to, trigger)
}

/// Create a transition gated by a guard predicate.
///
/// # Example
///
/// ```
/// use reflex::builder::guarded_transition;
/// use reflex::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
///     initial: Start
/// }
///
/// let transition = guarded_transition(MyState::Start, MyState::End, 'x', || false);
/// assert!(!transition.guard_passes());
/// ```
pub fn guarded_transition<'a, S, T, F>(from: S, to: S, trigger: T, guard: F) -> Transition<'a, S, T>
where
    S: State,
    T: Trigger,
    F: Fn() -> bool + 'a,
{
    Transition::new(from, to, trigger).when(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    crate::state_enum! {
        enum TestState {
            Start,
            Middle,
            End,
        }
        initial: Start
    }

    #[test]
    fn simple_transition_builds() {
        let transition = simple_transition(TestState::Start, TestState::Middle, 'a');

        assert_eq!(transition.from, TestState::Start);
        assert_eq!(transition.to, TestState::Middle);
        assert!(transition.matches(&'a'));
        assert!(transition.guard_passes());
    }

    #[test]
    fn guarded_transition_respects_guard() {
        let ready = Cell::new(false);
        let transition = guarded_transition(TestState::Middle, TestState::End, 'b', || ready.get());

        assert!(!transition.guard_passes());
        ready.set(true);
        assert!(transition.guard_passes());
    }
}
