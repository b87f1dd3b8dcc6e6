//! The state arena and its tick driver.
//!
//! A [`StateGraph`] owns every state. Transitions point at their targets by
//! [`StateId`], so self-loops and back-edges need no shared ownership. The
//! host keeps the id of the active state and feeds it back into
//! [`StateGraph::perform_and_transition`] every frame.
//!
//! # Example
//!
//! ```rust
//! use tickstate::graph::StateGraph;
//!
//! let mut graph = StateGraph::new();
//! let idle = graph.create_state("Idle").build();
//! let walk = graph.create_state("Walk").build();
//! graph.add_transition(idle, walk).after(1.0).build().unwrap();
//! graph.add_transition(walk, idle).after(0.5).build().unwrap();
//!
//! let mut current = idle;
//! for _ in 0..3 {
//!     current = graph.perform_and_transition(current, 0.5).unwrap();
//! }
//! assert_eq!(current, walk);
//! ```

mod describe;
mod driver;
mod error;

pub use describe::{GraphDescription, StateDescription, TransitionDescription};
pub use driver::StepResult;
pub use error::GraphError;

use crate::builder::{BoundTransitionBuilder, StateBuilder, TriggeredStateBuilder};
use crate::core::{State, StateId, Transition};

/// Arena of states.
#[derive(Debug, Default)]
pub struct StateGraph {
    states: Vec<State>,
}

impl StateGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a state. The tag defaults to `name`.
    pub fn create_state(&mut self, name: impl Into<String>) -> StateBuilder<'_> {
        StateBuilder::new(self, name.into())
    }

    /// Start building a state that carries its own incoming transition.
    pub fn create_triggered_state(&mut self, name: impl Into<String>) -> TriggeredStateBuilder<'_> {
        TriggeredStateBuilder::new(self, name.into())
    }

    /// Start building a transition from `from` to `to`.
    ///
    /// The transition is appended to `from` when the builder is built.
    pub fn add_transition(&mut self, from: StateId, to: StateId) -> BoundTransitionBuilder<'_> {
        BoundTransitionBuilder::new(self, from, to)
    }

    pub(crate) fn insert_with<F>(&mut self, make: F) -> StateId
    where
        F: FnOnce(StateId) -> State,
    {
        let id = StateId(self.states.len());
        self.states.push(make(id));
        id
    }

    /// Whether `id` indexes a state of this graph.
    ///
    /// Only the index is checked, so an id minted by another graph passes
    /// whenever this graph has at least as many states.
    pub fn contains(&self, id: StateId) -> bool {
        id.0 < self.states.len()
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.0)
    }

    /// Infallible lookup for ids already known to belong to this graph.
    pub(crate) fn get(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    /// Id of the first state named `name`.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.states.iter().find(|s| s.name == name).map(|s| s.id)
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().map(|s| s.id)
    }

    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// Replace every outgoing transition of `id`.
    ///
    /// Fails without touching the state if any target is unknown or any
    /// timed threshold is invalid.
    pub fn set_transitions<I>(&mut self, id: StateId, transitions: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Transition>,
    {
        let transitions: Vec<Transition> = transitions.into_iter().collect();
        self.check_transitions(&transitions)?;
        self.state_mut(id)?.transitions = transitions;
        Ok(())
    }

    /// Append transitions to the end of `id`'s list.
    ///
    /// Fails without touching the state if any target is unknown or any
    /// timed threshold is invalid.
    pub fn add_transitions<I>(&mut self, id: StateId, transitions: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = Transition>,
    {
        let transitions: Vec<Transition> = transitions.into_iter().collect();
        self.check_transitions(&transitions)?;
        self.state_mut(id)?.transitions.extend(transitions);
        Ok(())
    }

    /// Remove every outgoing transition of `id`, making it terminal.
    pub fn clear_transitions(&mut self, id: StateId) -> Result<(), GraphError> {
        self.state_mut(id)?.transitions.clear();
        Ok(())
    }

    /// Append a per-tick action to an existing state.
    pub fn attach_action<F>(&mut self, id: StateId, action: F) -> Result<(), GraphError>
    where
        F: FnMut(f32) + 'static,
    {
        self.state_mut(id)?.actions.push(Box::new(action));
        Ok(())
    }

    /// Zero the counters of `id` without running any callback.
    pub fn reset_counters(&mut self, id: StateId) -> Result<(), GraphError> {
        self.state_mut(id)?.reset_counters();
        Ok(())
    }

    pub fn describe(&self) -> GraphDescription {
        GraphDescription::of(self)
    }

    fn state_mut(&mut self, id: StateId) -> Result<&mut State, GraphError> {
        self.states
            .get_mut(id.0)
            .ok_or(GraphError::UnknownState(id))
    }

    fn check_transitions(&self, transitions: &[Transition]) -> Result<(), GraphError> {
        for transition in transitions {
            if !self.contains(transition.target) {
                return Err(GraphError::UnknownState(transition.target));
            }
            if let Some(seconds) = transition.guard.invalid_threshold() {
                return Err(GraphError::InvalidThreshold(seconds));
            }
        }
        Ok(())
    }
}
