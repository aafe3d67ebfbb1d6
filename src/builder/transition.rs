//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, State, Trigger};
use crate::engine::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<'a, S: State, T: Trigger> {
    from: Option<S>,
    to: Option<S>,
    trigger: Option<T>,
    guard: Option<Guard<'a>>,
    action: Option<Action<'a>>,
}

impl<'a, S: State, T: Trigger> TransitionBuilder<'a, S, T> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            trigger: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the trigger (required).
    pub fn on(mut self, trigger: T) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<'a>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'a,
    {
        self.guard(Guard::new(predicate))
    }

    /// Add an action (optional).
    pub fn action(mut self, action: Action<'a>) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an action using a closure (optional).
    pub fn then<F>(self, effect: F) -> Self
    where
        F: FnMut() + 'a,
    {
        self.action(Action::new(effect))
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<'a, S, T>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;

        Ok(Transition {
            from,
            to,
            trigger,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State, T: Trigger> Default for TransitionBuilder<'_, S, T> {
    fn default() -> Self {
        Self::new()
    }
}
