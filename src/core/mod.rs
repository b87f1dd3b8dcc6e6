//! Core state machine types.
//!
//! This module contains the graph's building blocks:
//! - [`State`] nodes addressed by [`StateId`]
//! - [`Guard`] predicates and the [`Transition`] edges that own them
//! - [`TriggeredState`] for states defined together with their incoming edge
//! - [`TransitionHistory`] for recording what fired

mod guard;
mod history;
mod state;
mod transition;
mod triggered;

pub use guard::{Guard, GuardKind, Predicate};
pub use history::{TransitionHistory, TransitionRecord};
pub use state::{Action, Callback, State, StateId};
pub use transition::{OnFire, Transition};
pub use triggered::TriggeredState;
