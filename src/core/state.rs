//! State nodes and their identifiers.
//!
//! A [`State`] owns its per-tick actions, its entry/exit callbacks and the
//! ordered list of outgoing transitions. States live in a
//! [`StateGraph`](crate::graph::StateGraph) arena and are addressed by
//! [`StateId`].

use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-tick action, called with the tick's delta in seconds.
pub type Action = Box<dyn FnMut(f32)>;

/// Entry or exit callback.
pub type Callback = Box<dyn FnMut()>;

/// Index of a state inside its owning graph.
///
/// Ids are handed out by the graph when a state is built and stay valid for
/// the lifetime of that graph. The id returned by a tick is the machine's
/// current state.
///
/// An id carries no reference to the graph that minted it. Using it with a
/// different graph is not detected when the index happens to be in range,
/// and it then names an unrelated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the state machine.
///
/// Besides its identity a state carries two runtime counters, the seconds
/// and the frames spent since it was last entered. Guards read these
/// counters through [`State::elapsed`] and [`State::frame_count`].
///
/// # Example
///
/// ```rust
/// use tickstate::graph::StateGraph;
///
/// let mut graph = StateGraph::new();
/// let idle = graph.create_state("Idle").tag("idle_sprite").build();
///
/// let state = graph.state(idle).unwrap();
/// assert_eq!(state.name(), "Idle");
/// assert_eq!(state.tag(), "idle_sprite");
/// assert!(state.is_terminal());
/// ```
pub struct State {
    pub(crate) id: StateId,
    pub(crate) name: String,
    pub(crate) tag: String,
    pub(crate) elapsed: f32,
    pub(crate) frame_count: u64,
    pub(crate) actions: Vec<Action>,
    pub(crate) on_enter: Option<Callback>,
    pub(crate) on_exit: Option<Callback>,
    pub(crate) transitions: Vec<Transition>,
}

impl State {
    pub(crate) fn new(id: StateId, name: String, tag: String) -> Self {
        Self {
            id,
            name,
            tag,
            elapsed: 0.0,
            frame_count: 0,
            actions: Vec::new(),
            on_enter: None,
            on_exit: None,
            transitions: Vec::new(),
        }
    }

    /// Id of this state in its graph.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Stable name, used for lookup and logging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display key (e.g. a sprite name). Defaults to the name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Seconds accumulated since the state was entered.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Ticks performed since the state was entered.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Outgoing transitions in evaluation order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Number of per-tick actions, builder and attached ones alike.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn has_on_enter(&self) -> bool {
        self.on_enter.is_some()
    }

    pub fn has_on_exit(&self) -> bool {
        self.on_exit.is_some()
    }

    /// A state without outgoing transitions never advances.
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }

    pub(crate) fn reset_counters(&mut self) {
        self.elapsed = 0.0;
        self.frame_count = 0;
    }

    pub(crate) fn enter(&mut self) {
        if let Some(on_enter) = self.on_enter.as_mut() {
            on_enter();
        }
    }

    pub(crate) fn exit(&mut self) {
        if let Some(on_exit) = self.on_exit.as_mut() {
            on_exit();
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("elapsed", &self.elapsed)
            .field("frame_count", &self.frame_count)
            .field("actions", &self.actions.len())
            .field("transitions", &self.transitions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn bare(name: &str) -> State {
        State::new(StateId(0), name.to_string(), name.to_string())
    }

    #[test]
    fn new_state_starts_with_zeroed_counters() {
        let state = bare("Idle");

        assert_eq!(state.elapsed(), 0.0);
        assert_eq!(state.frame_count(), 0);
        assert_eq!(state.action_count(), 0);
        assert!(!state.has_on_enter());
        assert!(!state.has_on_exit());
    }

    #[test]
    fn state_without_transitions_is_terminal() {
        assert!(bare("Dead").is_terminal());
    }

    #[test]
    fn reset_counters_clears_both_counters() {
        let mut state = bare("Run");
        state.elapsed = 4.5;
        state.frame_count = 9;

        state.reset_counters();

        assert_eq!(state.elapsed(), 0.0);
        assert_eq!(state.frame_count(), 0);
    }

    #[test]
    fn enter_and_exit_without_callbacks_are_no_ops() {
        let mut state = bare("Idle");
        state.enter();
        state.exit();
    }

    #[test]
    fn enter_and_exit_invoke_callbacks() {
        let entered = Rc::new(Cell::new(0));
        let exited = Rc::new(Cell::new(0));
        let mut state = bare("Jump");
        let e = Rc::clone(&entered);
        state.on_enter = Some(Box::new(move || e.set(e.get() + 1)));
        let x = Rc::clone(&exited);
        state.on_exit = Some(Box::new(move || x.set(x.get() + 1)));

        state.enter();
        state.exit();
        state.exit();

        assert_eq!(entered.get(), 1);
        assert_eq!(exited.get(), 2);
    }

    #[test]
    fn state_id_displays_index() {
        assert_eq!(StateId(3).to_string(), "#3");
        assert_eq!(StateId(3).index(), 3);
    }

    #[test]
    fn state_id_serializes_as_index() {
        let json = serde_json::to_string(&StateId(7)).unwrap();
        assert_eq!(json, "7");
        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StateId(7));
    }
}
