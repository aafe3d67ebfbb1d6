//! The execution engine: transition definitions, the transition table and
//! the machine that dispatches triggers against them.
//!
//! # Dispatch
//!
//! On every trigger the machine looks up the transitions leaving its current
//! state and scans them in insertion order:
//! - transitions listening for another trigger are skipped
//! - a matching transition whose guard fails is skipped, but the trigger
//!   still counts as matched
//! - the first matching transition whose guard passes fires: its action
//!   runs, the state changes, then the observer is notified
//!
//! At most one transition fires per trigger.

mod error;
mod machine;
mod table;
mod transition;

pub use error::ExecuteError;
pub use machine::{Dispatch, Machine};
pub use table::TransitionTable;
pub use transition::Transition;
