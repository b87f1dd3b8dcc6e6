//! Guarded edges between states.

use super::guard::Guard;
use super::state::{State, StateId};
use crate::builder::TransitionBuilder;
use std::fmt;
use std::rc::Rc;

/// Side effect run when a transition is selected.
pub type OnFire = Rc<dyn Fn()>;

/// A guarded edge to a target state.
///
/// The source of a transition is implicit: it is whichever state owns it in
/// its outgoing list. Cloning a transition is cheap and the clone shares the
/// guard and the fire callback, so a signal raised once is consumed once
/// across all clones.
#[derive(Clone)]
pub struct Transition {
    pub(crate) target: StateId,
    pub(crate) guard: Guard,
    pub(crate) on_fire: Option<OnFire>,
}

impl Transition {
    /// Start building a transition to `target`.
    pub fn to(target: StateId) -> TransitionBuilder {
        TransitionBuilder::new(target)
    }

    /// Transition without a fire callback.
    ///
    /// Nothing is validated here. A timed guard's threshold is checked when
    /// the transition is attached with [`StateGraph::set_transitions`] or
    /// [`StateGraph::add_transitions`].
    ///
    /// [`StateGraph::set_transitions`]: crate::graph::StateGraph::set_transitions
    /// [`StateGraph::add_transitions`]: crate::graph::StateGraph::add_transitions
    pub fn new(target: StateId, guard: Guard) -> Self {
        Self {
            target,
            guard,
            on_fire: None,
        }
    }

    /// State this transition leads to.
    pub fn target(&self) -> StateId {
        self.target
    }

    /// Condition checked once per tick of the source state.
    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    /// Evaluate the guard against the source state.
    pub fn should_transition(&self, source: &State) -> bool {
        self.guard.evaluate(source)
    }

    pub(crate) fn fire(&self) {
        if let Some(on_fire) = &self.on_fire {
            on_fire();
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .field("guard", &self.guard)
            .field("on_fire", &self.on_fire.is_some())
            .finish()
    }
}
