//! Callables attached to transitions: guards, actions and observers.
//!
//! All three are boxed closures owned by the engine. The `'a` lifetime lets a
//! closure borrow caller state; the borrow checker then guarantees that state
//! outlives every call that might run the closure.

use std::fmt;

/// Predicate that decides whether a transition may fire.
///
/// Guards take no arguments and must be idempotent: evaluating one twice
/// against the same underlying condition returns the same answer, and
/// evaluation never changes engine state.
///
/// # Example
///
/// ```rust
/// use reflex::Guard;
/// use std::cell::Cell;
///
/// let ready = Cell::new(false);
/// let guard = Guard::new(|| ready.get());
///
/// assert!(!guard.check());
/// ready.set(true);
/// assert!(guard.check());
/// ```
pub struct Guard<'a> {
    predicate: Box<dyn Fn() -> bool + 'a>,
}

impl<'a> Guard<'a> {
    /// Create a guard from a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'a,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

/// Side effect run exactly once when its transition is selected.
///
/// Actions run before the current state is updated.
///
/// # Example
///
/// ```rust
/// use reflex::Action;
/// use std::cell::Cell;
///
/// let hits = Cell::new(0);
/// let mut action = Action::new(|| hits.set(hits.get() + 1));
///
/// action.run();
/// action.run();
/// assert_eq!(hits.get(), 2);
/// ```
pub struct Action<'a> {
    effect: Box<dyn FnMut() + 'a>,
}

impl<'a> Action<'a> {
    /// Create an action from an effect closure.
    pub fn new<F>(effect: F) -> Self
    where
        F: FnMut() + 'a,
    {
        Action {
            effect: Box::new(effect),
        }
    }

    /// Run the effect.
    pub fn run(&mut self) {
        (self.effect)()
    }
}

impl fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Hook called after every fired transition with `(from, to, trigger)`.
pub type Observer<'a, S, T> = Box<dyn FnMut(&S, &S, &T) + 'a>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn guard_reflects_captured_condition() {
        let open = Cell::new(true);
        let guard = Guard::new(|| open.get());

        assert!(guard.check());
        open.set(false);
        assert!(!guard.check());
    }

    #[test]
    fn guard_is_deterministic() {
        let limit = 3;
        let guard = Guard::new(move || limit > 2);

        let result1 = guard.check();
        let result2 = guard.check();

        assert_eq!(result1, result2);
    }

    #[test]
    fn action_mutates_owned_state() {
        let mut calls = 0;
        {
            let mut action = Action::new(|| calls += 1);
            action.run();
            action.run();
            action.run();
        }
        assert_eq!(calls, 3);
    }

    #[test]
    fn callables_have_opaque_debug() {
        let guard = Guard::new(|| true);
        let action = Action::new(|| {});

        assert_eq!(format!("{guard:?}"), "Guard(..)");
        assert_eq!(format!("{action:?}"), "Action(..)");
    }

    #[test]
    fn observer_receives_arguments() {
        let seen = Cell::new((0u8, 0u8, ' '));
        let mut observer: Observer<'_, u8, char> =
            Box::new(|from: &u8, to: &u8, trigger: &char| seen.set((*from, *to, *trigger)));

        observer(&1, &2, &'x');

        assert_eq!(seen.get(), (1, 2, 'x'));
    }
}
