//! Reflex: a passive, table-driven finite state machine engine
//!
//! Reflex is meant to be embedded inside larger event-driven code such as
//! protocol handlers, workflow steps or UI mode controllers. A machine holds
//! a table of transitions and a current state, and does nothing until it is
//! handed a trigger.
//!
//! # Core Concepts
//!
//! - **State**: Application-defined values with one designated initial value
//! - **Trigger**: Application-defined stimulus values
//! - **Transition**: An edge `from -> to` selected by a trigger, optionally
//!   gated by a guard and carrying an action
//! - **Observer**: An optional hook notified after every fired transition
//!
//! Hierarchical states, entry/exit actions, parallel regions and persistence
//! of machine definitions are deliberately out of scope.
//!
//! # Example
//!
//! ```rust
//! use reflex::{state_enum, Machine, Transition};
//! use std::cell::Cell;
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!         Locked,
//!     }
//!     initial: Closed
//! }
//!
//! let has_key = Cell::new(false);
//!
//! let mut door = Machine::new();
//! door.add_transitions(vec![
//!     Transition::new(Door::Closed, Door::Open, "push"),
//!     Transition::new(Door::Open, Door::Closed, "pull"),
//!     Transition::new(Door::Closed, Door::Locked, "lock").when(|| has_key.get()),
//! ]);
//!
//! door.execute("push").unwrap();
//! assert_eq!(door.state(), &Door::Open);
//!
//! // Unknown trigger for this state
//! assert!(door.execute("lock").is_err());
//!
//! door.execute("pull").unwrap();
//!
//! // The trigger is recognized but the guard keeps the door closed
//! door.execute("lock").unwrap();
//! assert_eq!(door.state(), &Door::Closed);
//!
//! has_key.set(true);
//! door.execute("lock").unwrap();
//! assert_eq!(door.state(), &Door::Locked);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder, TransitionBuilder};
pub use crate::core::{Action, Guard, Observer, State, StateHistory, TransitionRecord, Trigger};
pub use crate::engine::{Dispatch, ExecuteError, Machine, Transition, TransitionTable};
