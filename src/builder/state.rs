//! Builders for constructing states.

use crate::builder::error::BuildError;
use crate::builder::transition::ConditionSlot;
use crate::core::{Action, Callback, Guard, State, StateId, Transition, TriggeredState};
use crate::graph::StateGraph;
use crate::signal::SignalFlag;

/// Builder for a plain state, obtained from [`StateGraph::create_state`].
///
/// Only the name is required. The tag defaults to the name; actions and
/// callbacks default to nothing.
pub struct StateBuilder<'g> {
    graph: &'g mut StateGraph,
    name: String,
    tag: Option<String>,
    actions: Vec<Action>,
    on_enter: Option<Callback>,
    on_exit: Option<Callback>,
}

impl<'g> StateBuilder<'g> {
    pub(crate) fn new(graph: &'g mut StateGraph, name: String) -> Self {
        Self {
            graph,
            name,
            tag: None,
            actions: Vec::new(),
            on_enter: None,
            on_exit: None,
        }
    }

    /// Override the display tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Append a per-tick action. Actions run in the order they were added.
    pub fn on_tick<F>(mut self, action: F) -> Self
    where
        F: FnMut(f32) + 'static,
    {
        self.actions.push(Box::new(action));
        self
    }

    /// Set the entry callback, replacing any previous one.
    pub fn on_enter<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_enter = Some(Box::new(callback));
        self
    }

    /// Set the exit callback, replacing any previous one.
    pub fn on_exit<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_exit = Some(Box::new(callback));
        self
    }

    /// Insert the state into the graph.
    pub fn build(self) -> StateId {
        let graph = self.graph;
        let tag = self.tag.unwrap_or_else(|| self.name.clone());
        graph.insert_with(|id| {
            let mut state = State::new(id, self.name, tag);
            state.actions = self.actions;
            state.on_enter = self.on_enter;
            state.on_exit = self.on_exit;
            state
        })
    }
}

/// Builder for a state that carries its own incoming transition.
///
/// Obtained from [`StateGraph::create_triggered_state`]. Exposes the same
/// setters as [`StateBuilder`] plus the trigger condition, which is required.
pub struct TriggeredStateBuilder<'g> {
    inner: StateBuilder<'g>,
    trigger: ConditionSlot,
}

impl<'g> TriggeredStateBuilder<'g> {
    pub(crate) fn new(graph: &'g mut StateGraph, name: String) -> Self {
        Self {
            inner: StateBuilder::new(graph, name),
            trigger: ConditionSlot::default(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.inner = self.inner.tag(tag);
        self
    }

    pub fn on_tick<F>(mut self, action: F) -> Self
    where
        F: FnMut(f32) + 'static,
    {
        self.inner = self.inner.on_tick(action);
        self
    }

    pub fn on_enter<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.inner = self.inner.on_enter(callback);
        self
    }

    pub fn on_exit<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.inner = self.inner.on_exit(callback);
        self
    }

    /// Enter this state when the predecessor satisfies `predicate`.
    pub fn trigger<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&State) -> bool + 'static,
    {
        self.trigger.set(Guard::new(predicate));
        self
    }

    /// Enter this state once the predecessor has been active for more than `seconds`.
    pub fn trigger_after(mut self, seconds: f32) -> Self {
        self.trigger.set(Guard::after(seconds));
        self
    }

    /// Enter this state each time `flag` is raised.
    pub fn trigger_on(mut self, flag: SignalFlag) -> Self {
        self.trigger.set(Guard::signal(flag));
        self
    }

    /// Insert the state and return it with its trigger.
    ///
    /// Nothing is inserted when the trigger is missing or invalid.
    pub fn build(self) -> Result<TriggeredState, BuildError> {
        let guard = self.trigger.resolve(BuildError::MissingTrigger)?;
        let id = self.inner.build();
        Ok(TriggeredState {
            id,
            trigger: Transition::new(id, guard),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn state_defaults_from_name() {
        let mut graph = StateGraph::new();
        let id = graph.create_state("Idle").build();

        let state = graph.state(id).unwrap();
        assert_eq!(state.name(), "Idle");
        assert_eq!(state.tag(), "Idle");
        assert_eq!(state.action_count(), 0);
        assert!(!state.has_on_enter());
        assert!(!state.has_on_exit());
        assert!(state.transitions().is_empty());
    }

    #[test]
    fn tag_overrides_display_string() {
        let mut graph = StateGraph::new();
        let id = graph.create_state("Run").tag("run_cycle").build();

        let state = graph.state(id).unwrap();
        assert_eq!(state.name(), "Run");
        assert_eq!(state.tag(), "run_cycle");
    }

    #[test]
    fn on_tick_appends_actions_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut graph = StateGraph::new();
        let first = Rc::clone(&log);
        let second = Rc::clone(&log);
        let id = graph
            .create_state("Walk")
            .on_tick(move |_| first.borrow_mut().push("first"))
            .on_tick(move |_| second.borrow_mut().push("second"))
            .build();

        graph.perform_and_transition(id, 0.1).unwrap();

        assert_eq!(graph.state(id).unwrap().action_count(), 2);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn callbacks_are_recorded() {
        let mut graph = StateGraph::new();
        let id = graph
            .create_state("Jump")
            .on_enter(|| {})
            .on_exit(|| {})
            .build();

        let state = graph.state(id).unwrap();
        assert!(state.has_on_enter());
        assert!(state.has_on_exit());
    }

    #[test]
    fn states_receive_sequential_ids() {
        let mut graph = StateGraph::new();
        let a = graph.create_state("A").build();
        let b = graph.create_state("B").build();

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
    }

    #[test]
    fn triggered_state_requires_trigger() {
        let mut graph = StateGraph::new();
        let result = graph.create_triggered_state("Alert").build();

        assert!(matches!(result, Err(BuildError::MissingTrigger)));
        assert!(graph.is_empty());
    }

    #[test]
    fn triggered_state_rejects_two_triggers() {
        let mut graph = StateGraph::new();
        let result = graph
            .create_triggered_state("Alert")
            .trigger(|_| true)
            .trigger_after(1.0)
            .build();

        assert!(matches!(result, Err(BuildError::ConflictingCondition)));
    }

    #[test]
    fn triggered_state_keeps_state_setters() {
        let mut graph = StateGraph::new();
        let alert = graph
            .create_triggered_state("Alert")
            .tag("alert_icon")
            .on_tick(|_| {})
            .on_enter(|| {})
            .trigger_on(SignalFlag::new())
            .build()
            .unwrap();

        let state = graph.state(alert.id()).unwrap();
        assert_eq!(state.tag(), "alert_icon");
        assert_eq!(state.action_count(), 1);
        assert!(state.has_on_enter());
        assert!(!state.has_on_exit());
        assert_eq!(alert.trigger().target(), alert.id());
    }
}
