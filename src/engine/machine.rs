//! The passive execution engine.

use crate::core::{Observer, State, StateHistory, TransitionRecord, Trigger};
use crate::engine::error::ExecuteError;
use crate::engine::table::TransitionTable;
use crate::engine::transition::Transition;
use chrono::Utc;
use std::fmt;
use tracing::{debug, trace};

/// Detailed outcome of dispatching one trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch<S> {
    /// A transition fired and the machine moved from `from` to `to`
    Transitioned { from: S, to: S },

    /// At least one transition listened for the trigger, but every guard
    /// rejected it; the state is unchanged
    GuardRejected,

    /// No transition from the current state listens for the trigger
    NoMatchingTrigger,
}

impl<S> Dispatch<S> {
    /// Whether the state changed.
    pub fn transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// Whether some transition from the current state listened for the trigger.
    pub fn trigger_matched(&self) -> bool {
        !matches!(self, Self::NoMatchingTrigger)
    }
}

/// A passive finite state machine.
///
/// The machine does nothing until it receives a trigger. Each call to
/// [`execute`](Self::execute) or [`dispatch`](Self::dispatch) fires at most
/// one transition: the first one, in insertion order, that leaves the current
/// state, listens for the trigger and whose guard passes.
///
/// Callables run inline on the caller's stack. The machine is not `Sync`
/// and offers no locking; share it across threads only behind the caller's
/// own synchronization.
///
/// # Example
///
/// ```rust
/// use reflex::{state_enum, Machine, Transition};
/// use std::cell::Cell;
///
/// state_enum! {
///     enum Phase { Initial, A, Final }
///     initial: Initial
/// }
///
/// let counter = Cell::new(0);
/// let incr = || counter.set(counter.get() + 1);
///
/// let mut machine = Machine::new();
/// machine.add_transitions(vec![
///     Transition::new(Phase::Initial, Phase::A, 'a').then(incr),
///     Transition::new(Phase::Initial, Phase::Final, 'a').then(incr),
///     Transition::new(Phase::A, Phase::Final, 'a').then(incr),
/// ]);
///
/// assert!(machine.execute('a').is_ok());
/// assert_eq!(counter.get(), 1);
/// assert_eq!(machine.state(), &Phase::A);
/// ```
pub struct Machine<'a, S: State, T: Trigger> {
    table: TransitionTable<'a, S, T>,
    current: S,
    observer: Option<Observer<'a, S, T>>,
    history: Option<StateHistory<S, T>>,
}

impl<'a, S: State, T: Trigger> Machine<'a, S, T> {
    /// Create an empty machine in `S::INITIAL`.
    pub fn new() -> Self {
        Self {
            table: TransitionTable::new(),
            current: S::INITIAL,
            observer: None,
            history: None,
        }
    }

    /// Append transitions to the table.
    ///
    /// May be called any number of times; entries for the same source state
    /// accumulate in call order.
    pub fn add_transitions<I>(&mut self, transitions: I)
    where
        I: IntoIterator<Item = Transition<'a, S, T>>,
    {
        self.table.extend(transitions);
    }

    /// Install the observer called after every fired transition, replacing
    /// any previous one.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&S, &S, &T) + 'a,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the observer, if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Whether an observer is installed.
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    pub(crate) fn install_observer(&mut self, observer: Option<Observer<'a, S, T>>) {
        self.observer = observer;
    }

    /// Execute a trigger.
    ///
    /// Returns `Ok(())` whenever some transition from the current state
    /// listens for `trigger`, even if every guard rejected it and the state
    /// did not change. Use [`dispatch`](Self::dispatch) to tell those cases
    /// apart.
    pub fn execute(&mut self, trigger: T) -> Result<(), ExecuteError> {
        match self.fire(&trigger) {
            Dispatch::NoMatchingTrigger => Err(ExecuteError::NoMatchingTrigger {
                state: self.current.name().to_string(),
                trigger: format!("{trigger:?}"),
            }),
            Dispatch::Transitioned { .. } | Dispatch::GuardRejected => Ok(()),
        }
    }

    /// Execute a trigger and report exactly what happened.
    pub fn dispatch(&mut self, trigger: T) -> Dispatch<S> {
        self.fire(&trigger)
    }

    fn fire(&mut self, trigger: &T) -> Dispatch<S> {
        trace!(state = self.current.name(), trigger = ?trigger, "dispatching trigger");

        let Some(bucket) = self.table.bucket_mut(&self.current) else {
            debug!(state = self.current.name(), trigger = ?trigger, "no transitions from state");
            return Dispatch::NoMatchingTrigger;
        };

        let mut matched = false;
        for transition in bucket.iter_mut() {
            if !transition.matches(trigger) {
                continue;
            }
            matched = true;

            if !transition.guard_passes() {
                trace!(
                    from = transition.from.name(),
                    to = transition.to.name(),
                    "guard rejected candidate"
                );
                continue;
            }

            transition.run_action();
            self.current = transition.to.clone();

            debug!(
                from = transition.from.name(),
                to = transition.to.name(),
                trigger = ?trigger,
                "transition fired"
            );

            if let Some(observer) = self.observer.as_mut() {
                observer(&transition.from, &transition.to, trigger);
            }
            if let Some(history) = self.history.as_mut() {
                history.record(TransitionRecord {
                    from: transition.from.clone(),
                    to: transition.to.clone(),
                    trigger: trigger.clone(),
                    timestamp: Utc::now(),
                });
            }

            return Dispatch::Transitioned {
                from: transition.from.clone(),
                to: transition.to.clone(),
            };
        }

        if matched {
            debug!(state = self.current.name(), trigger = ?trigger, "all guards rejected trigger");
            Dispatch::GuardRejected
        } else {
            debug!(state = self.current.name(), trigger = ?trigger, "no matching trigger");
            Dispatch::NoMatchingTrigger
        }
    }

    /// Force the machine back to `S::INITIAL`.
    pub fn reset(&mut self) {
        self.reset_to(S::INITIAL);
    }

    /// Force the machine into `state`.
    ///
    /// No guard, action or observer runs, and `state` need not appear in the
    /// table.
    pub fn reset_to(&mut self, state: S) {
        debug!(
            from = self.current.name(),
            to = state.name(),
            "machine reset"
        );
        self.current = state;
    }

    /// Current state.
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Whether the current state is `S::INITIAL`.
    pub fn is_initial(&self) -> bool {
        self.current.is_initial()
    }

    /// Transitions registered so far.
    pub fn table(&self) -> &TransitionTable<'a, S, T> {
        &self.table
    }

    /// Start recording fired transitions, keeping at most `limit` records
    /// when bounded. Replaces any existing history.
    pub fn enable_history(&mut self, limit: Option<usize>) {
        self.history = Some(match limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        });
    }

    /// Stop recording and discard the history.
    pub fn disable_history(&mut self) {
        self.history = None;
    }

    /// Recorded transitions, if history is enabled.
    pub fn history(&self) -> Option<&StateHistory<S, T>> {
        self.history.as_ref()
    }
}

impl<S: State, T: Trigger> Default for Machine<'_, S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> fmt::Debug for Machine<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("transitions", &self.table.len())
            .field("observer", &self.observer.is_some())
            .field("history", &self.history.as_ref().map(StateHistory::len))
            .finish()
    }
}
