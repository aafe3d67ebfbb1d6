//! Transition definitions.

use crate::core::{Action, Guard, State, Trigger};
use std::fmt;

/// An edge from one state to another, selected by a trigger.
///
/// The guard and action are optional: a missing guard always passes and a
/// missing action does nothing.
///
/// # Example
///
/// ```rust
/// use reflex::{state_enum, Transition};
/// use std::cell::Cell;
///
/// state_enum! {
///     enum Door { Closed, Open }
///     initial: Closed
/// }
///
/// let opened = Cell::new(0);
/// let unlocked = Cell::new(true);
///
/// let transition = Transition::new(Door::Closed, Door::Open, 'o')
///     .when(|| unlocked.get())
///     .then(|| opened.set(opened.get() + 1));
///
/// assert!(transition.matches(&'o'));
/// assert!(transition.guard_passes());
/// ```
pub struct Transition<'a, S: State, T: Trigger> {
    pub from: S,
    pub to: S,
    pub trigger: T,
    pub guard: Option<Guard<'a>>,
    pub action: Option<Action<'a>>,
}

impl<'a, S: State, T: Trigger> Transition<'a, S, T> {
    /// Create an unguarded transition with no action.
    pub fn new(from: S, to: S, trigger: T) -> Self {
        Self {
            from,
            to,
            trigger,
            guard: None,
            action: None,
        }
    }

    /// Attach a guard predicate, replacing any existing guard.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'a,
    {
        self.with_guard(Guard::new(predicate))
    }

    /// Attach an action effect, replacing any existing action.
    pub fn then<F>(self, effect: F) -> Self
    where
        F: FnMut() + 'a,
    {
        self.with_action(Action::new(effect))
    }

    /// Attach a prebuilt guard, replacing any existing guard.
    pub fn with_guard(mut self, guard: Guard<'a>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Attach a prebuilt action, replacing any existing action.
    pub fn with_action(mut self, action: Action<'a>) -> Self {
        self.action = Some(action);
        self
    }

    /// Check whether this transition listens for `trigger`.
    pub fn matches(&self, trigger: &T) -> bool {
        self.trigger == *trigger
    }

    /// Evaluate the guard; an absent guard always passes.
    pub fn guard_passes(&self) -> bool {
        self.guard.as_ref().is_none_or(Guard::check)
    }

    /// Run the action, if any.
    pub(crate) fn run_action(&mut self) {
        if let Some(action) = self.action.as_mut() {
            action.run();
        }
    }
}

impl<S: State, T: Trigger> fmt::Debug for Transition<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("trigger", &self.trigger)
            .field("guarded", &self.guard.is_some())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Start,
        Middle,
        End,
    }

    impl State for TestState {
        const INITIAL: Self = TestState::Start;

        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Middle => "Middle",
                Self::End => "End",
            }
        }
    }

    #[test]
    fn unguarded_transition_always_passes() {
        let transition = Transition::new(TestState::Start, TestState::Middle, 'a');

        assert!(transition.guard_passes());
        assert!(transition.guard.is_none());
        assert!(transition.action.is_none());
    }

    #[test]
    fn matches_compares_trigger() {
        let transition = Transition::new(TestState::Start, TestState::Middle, 'a');

        assert!(transition.matches(&'a'));
        assert!(!transition.matches(&'b'));
    }

    #[test]
    fn guard_passes_respects_guard() {
        let allowed = Cell::new(false);
        let transition =
            Transition::new(TestState::Middle, TestState::End, 'b').when(|| allowed.get());

        assert!(!transition.guard_passes());
        allowed.set(true);
        assert!(transition.guard_passes());
    }

    #[test]
    fn run_action_invokes_effect() {
        let count = Cell::new(0);
        let mut transition = Transition::new(TestState::Start, TestState::End, 'z')
            .then(|| count.set(count.get() + 1));

        transition.run_action();
        transition.run_action();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn run_action_without_action_is_noop() {
        let mut transition = Transition::new(TestState::Start, TestState::End, 'z');
        transition.run_action();
    }

    #[test]
    fn debug_output_names_endpoints() {
        let transition = Transition::new(TestState::Start, TestState::End, 'z').when(|| true);
        let rendered = format!("{transition:?}");

        assert!(rendered.contains("Start"));
        assert!(rendered.contains("End"));
        assert!(rendered.contains("guarded: true"));
        assert!(rendered.contains("has_action: false"));
    }
}
