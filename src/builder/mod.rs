//! Builder API for ergonomic graph construction.
//!
//! States are built through [`StateGraph`](crate::graph::StateGraph) so that
//! they land in its arena; transitions can be built detached with
//! [`Transition::to`](crate::core::Transition::to) or bound to a source state
//! with [`StateGraph::add_transition`](crate::graph::StateGraph::add_transition).

pub mod error;
pub mod state;
pub mod transition;

pub use error::BuildError;
pub use state::{StateBuilder, TriggeredStateBuilder};
pub use transition::{BoundTransitionBuilder, TransitionBuilder};

use crate::core::{StateId, Transition};

/// Create a transition that fires on the first tick it is evaluated.
///
/// # Example
///
/// ```
/// use tickstate::builder::immediate_transition;
/// use tickstate::graph::StateGraph;
///
/// let mut graph = StateGraph::new();
/// let boot = graph.create_state("Boot").build();
/// let menu = graph.create_state("Menu").build();
/// graph.add_transitions(boot, [immediate_transition(menu)]).unwrap();
///
/// assert_eq!(graph.perform_and_transition(boot, 0.016).unwrap(), menu);
/// ```
pub fn immediate_transition(target: StateId) -> Transition {
    Transition::new(target, crate::core::Guard::new(|_| true))
}

/// Create a transition that fires once the source has been active for more
/// than `seconds`.
///
/// # Example
///
/// ```
/// use tickstate::builder::timed_transition;
/// use tickstate::graph::StateGraph;
///
/// let mut graph = StateGraph::new();
/// let splash = graph.create_state("Splash").build();
/// let menu = graph.create_state("Menu").build();
/// graph.add_transitions(splash, [timed_transition(menu, 2.0).unwrap()]).unwrap();
/// ```
pub fn timed_transition(target: StateId, seconds: f32) -> Result<Transition, BuildError> {
    TransitionBuilder::new(target).after(seconds).build()
}
