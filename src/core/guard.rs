//! Guard predicates for controlling state transitions.
//!
//! A guard decides, once per tick, whether its transition fires. Guards read
//! the source state's counters and, for signal guards, a one-shot external
//! flag.

use super::state::State;
use crate::signal::SignalFlag;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Predicate over the source state.
pub type Predicate = Rc<dyn Fn(&State) -> bool>;

/// Condition under which a transition fires.
///
/// # Example
///
/// ```rust
/// use tickstate::core::Guard;
/// use tickstate::signal::SignalFlag;
///
/// let flag = SignalFlag::new();
/// let guard = Guard::signal(flag.clone());
/// assert!(matches!(guard, Guard::Signal(_)));
///
/// let timed = Guard::after(2.0);
/// assert!(matches!(timed, Guard::After(t) if t == 2.0));
/// ```
#[derive(Clone)]
pub enum Guard {
    /// Arbitrary caller-supplied predicate.
    Predicate(Predicate),

    /// Fires once the source state's elapsed time is strictly greater than
    /// the threshold, in seconds.
    After(f32),

    /// Fires once per raised signal.
    Signal(SignalFlag),
}

impl Guard {
    /// Guard on an arbitrary predicate over the source state.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&State) -> bool + 'static,
    {
        Guard::Predicate(Rc::new(predicate))
    }

    /// Timed guard firing once the source has been active for more than
    /// `seconds`.
    ///
    /// The threshold is checked when the transition is attached to a graph.
    /// NaN, infinite and negative values are rejected there.
    pub fn after(seconds: f32) -> Self {
        Guard::After(seconds)
    }

    /// One-shot guard consuming `flag` when it is raised.
    pub fn signal(flag: SignalFlag) -> Self {
        Guard::Signal(flag)
    }

    /// Evaluate the guard against the source state.
    ///
    /// Evaluating a signal guard consumes its flag when it returns `true`.
    pub fn evaluate(&self, state: &State) -> bool {
        match self {
            Guard::Predicate(predicate) => predicate(state),
            Guard::After(threshold) => state.elapsed() > *threshold,
            Guard::Signal(flag) => flag.take(),
        }
    }

    /// Closure-free description of this guard.
    pub fn kind(&self) -> GuardKind {
        match self {
            Guard::Predicate(_) => GuardKind::Predicate,
            Guard::After(seconds) => GuardKind::After { seconds: *seconds },
            Guard::Signal(_) => GuardKind::Signal,
        }
    }

    /// The threshold of a timed guard if it is NaN, infinite or negative.
    pub(crate) fn invalid_threshold(&self) -> Option<f32> {
        match self {
            Guard::After(seconds) if !seconds.is_finite() || *seconds < 0.0 => Some(*seconds),
            _ => None,
        }
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Predicate(_) => f.write_str("Predicate(..)"),
            Guard::After(seconds) => f.debug_tuple("After").field(seconds).finish(),
            Guard::Signal(flag) => f.debug_tuple("Signal").field(flag).finish(),
        }
    }
}

/// Serializable shape of a guard, without its closure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuardKind {
    Predicate,
    After { seconds: f32 },
    Signal,
}

impl fmt::Display for GuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardKind::Predicate => f.write_str("if"),
            GuardKind::After { seconds } => write!(f, "after {seconds}s"),
            GuardKind::Signal => f.write_str("on signal"),
        }
    }
}
