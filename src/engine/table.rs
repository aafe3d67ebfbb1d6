//! Append-only transition table keyed by source state.

use crate::core::{State, Trigger};
use crate::engine::transition::Transition;
use std::collections::HashMap;
use std::fmt;

/// Transitions grouped by source state.
///
/// Within a bucket, transitions keep the order in which they were added,
/// across every call to [`extend`](Self::extend). That order decides which
/// transition wins when several share a trigger. Nothing is validated and
/// nothing can be removed.
pub struct TransitionTable<'a, S: State, T: Trigger> {
    buckets: HashMap<S, Vec<Transition<'a, S, T>>>,
    len: usize,
}

impl<'a, S: State, T: Trigger> TransitionTable<'a, S, T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            len: 0,
        }
    }

    /// Append one transition to the bucket of its source state.
    pub fn add(&mut self, transition: Transition<'a, S, T>) {
        self.buckets
            .entry(transition.from.clone())
            .or_default()
            .push(transition);
        self.len += 1;
    }

    /// Append every transition, preserving their relative order.
    pub fn extend<I>(&mut self, transitions: I)
    where
        I: IntoIterator<Item = Transition<'a, S, T>>,
    {
        for transition in transitions {
            self.add(transition);
        }
    }

    /// Transitions leaving `state`, in insertion order.
    pub fn bucket(&self, state: &S) -> Option<&[Transition<'a, S, T>]> {
        self.buckets.get(state).map(Vec::as_slice)
    }

    pub(crate) fn bucket_mut(&mut self, state: &S) -> Option<&mut [Transition<'a, S, T>]> {
        self.buckets.get_mut(state).map(Vec::as_mut_slice)
    }

    /// Number of transitions leaving `state`.
    pub fn outgoing(&self, state: &S) -> usize {
        self.buckets.get(state).map_or(0, Vec::len)
    }

    /// Whether `state` has no outgoing transitions (a pseudo-final state).
    pub fn is_terminal(&self, state: &S) -> bool {
        self.outgoing(state) == 0
    }

    /// Source states that have at least one transition.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.buckets.keys()
    }

    /// Total number of transitions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no transitions.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: State, T: Trigger> Default for TransitionTable<'_, S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> fmt::Debug for TransitionTable<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.buckets.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        A,
        Final,
    }

    impl State for TestState {
        const INITIAL: Self = TestState::Initial;

        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::A => "A",
                Self::Final => "Final",
            }
        }
    }

    fn targets(
        table: &TransitionTable<'_, TestState, char>,
        state: TestState,
    ) -> Vec<(TestState, char)> {
        table
            .bucket(&state)
            .unwrap_or_default()
            .iter()
            .map(|t| (t.to, t.trigger))
            .collect()
    }

    #[test]
    fn new_table_is_empty() {
        let table: TransitionTable<'_, TestState, char> = TransitionTable::new();

        assert!(table.is_empty());
        assert!(table.bucket(&TestState::Initial).is_none());
        assert_eq!(table.states().count(), 0);
    }

    #[test]
    fn add_groups_by_source_state() {
        let mut table = TransitionTable::new();
        table.add(Transition::new(TestState::Initial, TestState::A, 'a'));
        table.add(Transition::new(TestState::A, TestState::Final, 'b'));
        table.add(Transition::new(TestState::Initial, TestState::Final, 'c'));

        assert_eq!(table.len(), 3);
        assert_eq!(table.outgoing(&TestState::Initial), 2);
        assert_eq!(table.outgoing(&TestState::A), 1);
        assert_eq!(table.states().count(), 2);
    }

    #[test]
    fn extend_is_cumulative_across_calls() {
        let mut table = TransitionTable::new();
        table.extend(vec![
            Transition::new(TestState::Initial, TestState::A, 'a'),
            Transition::new(TestState::A, TestState::Final, 'b'),
        ]);
        table.extend([Transition::new(TestState::Initial, TestState::Final, 'a')]);

        assert_eq!(
            targets(&table, TestState::Initial),
            vec![(TestState::A, 'a'), (TestState::Final, 'a')]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let mut table = TransitionTable::new();
        table.add(Transition::new(TestState::A, TestState::Final, 'x'));
        table.add(Transition::new(TestState::A, TestState::Final, 'x'));

        assert_eq!(table.outgoing(&TestState::A), 2);
    }

    #[test]
    fn states_without_outgoing_are_terminal() {
        let mut table = TransitionTable::new();
        table.add(Transition::new(TestState::Initial, TestState::Final, 'a'));

        assert!(!table.is_terminal(&TestState::Initial));
        assert!(table.is_terminal(&TestState::Final));
        assert!(table.is_terminal(&TestState::A));
    }
}
