//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Observer, State, Trigger};
use crate::engine::{Machine, Transition};

/// Builder for constructing machines with a fluent API.
///
/// The table is not validated: duplicate triggers, unreachable states and an
/// empty table are all accepted.
pub struct MachineBuilder<'a, S: State, T: Trigger> {
    transitions: Vec<Transition<'a, S, T>>,
    observer: Option<Observer<'a, S, T>>,
    history: Option<Option<usize>>,
    start: Option<S>,
}

impl<'a, S: State, T: Trigger> MachineBuilder<'a, S, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            observer: None,
            history: None,
            start: None,
        }
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<'a, S, T>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<'a, S, T>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<'a, S, T>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Install an observer called after every fired transition.
    pub fn observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&S, &S, &T) + 'a,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Record fired transitions, keeping at most `limit` when bounded.
    pub fn record_history(mut self, limit: Option<usize>) -> Self {
        self.history = Some(limit);
        self
    }

    /// Start the built machine in `state` instead of `S::INITIAL`.
    pub fn start_in(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Build the machine.
    pub fn build(self) -> Machine<'a, S, T> {
        let mut machine = Machine::new();
        machine.add_transitions(self.transitions);
        machine.install_observer(self.observer);
        if let Some(limit) = self.history {
            machine.enable_history(limit);
        }
        if let Some(state) = self.start {
            machine.reset_to(state);
        }
        machine
    }
}

impl<S: State, T: Trigger> Default for MachineBuilder<'_, S, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        const INITIAL: Self = TestState::Initial;

        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    #[test]
    fn empty_builder_builds_initial_machine() {
        let machine = MachineBuilder::<TestState, char>::new().build();

        assert!(machine.is_initial());
        assert!(machine.table().is_empty());
    }

    #[test]
    fn transition_propagates_build_errors() {
        let result = MachineBuilder::<TestState, char>::new()
            .transition(TransitionBuilder::new().from(TestState::Initial).on('a'));

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let notified = Cell::new(0);
        let finish = Transition::new(TestState::Processing, TestState::Complete, 'b');

        let mut machine = MachineBuilder::new()
            .transition(
                TransitionBuilder::new()
                    .from(TestState::Initial)
                    .to(TestState::Processing)
                    .on('a'),
            )
            .unwrap()
            .add_transition(finish)
            .observer(|_, _, _| notified.set(notified.get() + 1))
            .record_history(Some(8))
            .build();

        assert_eq!(machine.table().len(), 2);
        machine.execute('a').unwrap();
        machine.execute('b').unwrap();

        assert_eq!(machine.state(), &TestState::Complete);
        assert_eq!(notified.get(), 2);
        assert_eq!(machine.history().map(|h| h.len()), Some(2));
    }

    #[test]
    fn add_multiple_transitions() {
        let machine = MachineBuilder::new()
            .transitions(vec![
                Transition::new(TestState::Initial, TestState::Processing, 'a'),
                Transition::new(TestState::Processing, TestState::Complete, 'b'),
            ])
            .build();

        assert_eq!(machine.table().len(), 2);
        assert!(!machine.has_observer());
        assert!(machine.history().is_none());
    }

    #[test]
    fn start_in_overrides_initial_state() {
        let machine = MachineBuilder::<TestState, char>::new()
            .start_in(TestState::Processing)
            .build();

        assert_eq!(machine.state(), &TestState::Processing);
        assert!(!machine.is_initial());
    }
}
