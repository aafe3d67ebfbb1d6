//! Core value types and callables.
//!
//! This module contains the building blocks shared by the engine and the
//! builders:
//! - State and trigger traits
//! - Guard, action and observer callables
//! - Optional history of fired transitions

mod guard;
mod history;
mod state;

pub use guard::{Action, Guard, Observer};
pub use history::{StateHistory, TransitionRecord};
pub use state::{State, Trigger};
