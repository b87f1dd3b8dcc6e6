//! Errors reported by graph mutation and the tick driver.

use crate::core::StateId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("State {0} does not exist in this graph")]
    UnknownState(StateId),

    #[error("Tick delta must be a finite, non-negative number of seconds, got {0}")]
    InvalidDelta(f32),

    #[error("Timed threshold must be a finite, non-negative number of seconds, got {0}")]
    InvalidThreshold(f32),
}
