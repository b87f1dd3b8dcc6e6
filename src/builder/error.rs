//! Build errors for state and transition builders.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building states and transitions.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Transition condition not specified. Call .when(predicate), .after(seconds) or .on_signal(flag)")]
    MissingCondition,

    #[error("Transition condition specified more than once. Use exactly one of .when(), .after(), .on_signal() or .guard()")]
    ConflictingCondition,

    #[error("Timed threshold must be a non-negative number of seconds, got {0}")]
    InvalidThreshold(f32),

    #[error("Triggered state has no trigger. Call .trigger(predicate), .trigger_after(seconds) or .trigger_on(flag)")]
    MissingTrigger,

    #[error("State {0} does not exist in this graph")]
    UnknownState(StateId),
}
