//! States that carry their own incoming transition.

use super::state::StateId;
use super::transition::Transition;

/// A state paired with the transition that leads into it.
///
/// The trigger is defined next to the state, then attached to whichever
/// predecessors should be able to reach it via [`TriggeredState::as_transition`].
///
/// # Example
///
/// ```rust
/// use tickstate::graph::StateGraph;
///
/// let mut graph = StateGraph::new();
/// let idle = graph.create_state("Idle").build();
/// let alert = graph
///     .create_triggered_state("Alert")
///     .trigger_after(3.0)
///     .build()
///     .unwrap();
///
/// graph.add_transitions(idle, [alert.as_transition()]).unwrap();
/// assert_eq!(graph.state(idle).unwrap().transitions()[0].target(), alert.id());
/// ```
#[derive(Clone, Debug)]
pub struct TriggeredState {
    pub(crate) id: StateId,
    pub(crate) trigger: Transition,
}

impl TriggeredState {
    /// Id of the state this trigger leads to.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// The incoming transition. Its target is always this state.
    pub fn trigger(&self) -> &Transition {
        &self.trigger
    }

    /// Copy of the trigger, ready to attach to a predecessor.
    pub fn as_transition(&self) -> Transition {
        self.trigger.clone()
    }
}

impl From<&TriggeredState> for Transition {
    fn from(state: &TriggeredState) -> Self {
        state.as_transition()
    }
}

impl From<&TriggeredState> for StateId {
    fn from(state: &TriggeredState) -> Self {
        state.id
    }
}
