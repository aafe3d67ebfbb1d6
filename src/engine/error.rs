//! Errors reported by the engine.

use thiserror::Error;

/// Errors that can occur when executing a trigger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecuteError {
    #[error("No transition for trigger {trigger} from state '{state}'")]
    NoMatchingTrigger { state: String, trigger: String },
}
