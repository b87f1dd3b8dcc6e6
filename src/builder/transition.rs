//! Builders for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, OnFire, State, StateId, Transition};
use crate::graph::StateGraph;
use crate::signal::SignalFlag;
use std::rc::Rc;

/// Tracks the single condition a transition (or trigger) may carry.
#[derive(Default)]
pub(crate) struct ConditionSlot {
    guard: Option<Guard>,
    conflicting: bool,
}

impl ConditionSlot {
    pub(crate) fn set(&mut self, guard: Guard) {
        if self.guard.is_some() {
            self.conflicting = true;
        }
        self.guard = Some(guard);
    }

    pub(crate) fn is_set(&self) -> bool {
        self.guard.is_some()
    }

    /// Resolve the configured guard, reporting `missing` if none was set.
    pub(crate) fn resolve(self, missing: BuildError) -> Result<Guard, BuildError> {
        if self.conflicting {
            return Err(BuildError::ConflictingCondition);
        }
        let guard = self.guard.ok_or(missing)?;
        match guard.invalid_threshold() {
            Some(seconds) => Err(BuildError::InvalidThreshold(seconds)),
            None => Ok(guard),
        }
    }
}

/// Builder for a detached transition.
///
/// Exactly one condition must be configured before [`build`](Self::build)
/// succeeds.
///
/// # Example
///
/// ```rust
/// use tickstate::core::Transition;
/// use tickstate::graph::StateGraph;
///
/// let mut graph = StateGraph::new();
/// let idle = graph.create_state("Idle").build();
/// let walk = graph.create_state("Walk").build();
///
/// let start_walking = Transition::to(walk)
///     .after(1.5)
///     .on_fire(|| println!("walking"))
///     .build()
///     .unwrap();
/// graph.set_transitions(idle, [start_walking]).unwrap();
/// ```
pub struct TransitionBuilder {
    target: StateId,
    condition: ConditionSlot,
    on_fire: Option<OnFire>,
}

impl TransitionBuilder {
    pub fn new(target: StateId) -> Self {
        Self {
            target,
            condition: ConditionSlot::default(),
            on_fire: None,
        }
    }

    /// Fire when the predicate over the source state returns `true`.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&State) -> bool + 'static,
    {
        self.condition.set(Guard::new(predicate));
        self
    }

    /// Fire once the source state has been active for more than `seconds`.
    pub fn after(mut self, seconds: f32) -> Self {
        self.condition.set(Guard::after(seconds));
        self
    }

    /// Fire once each time `flag` is raised.
    pub fn on_signal(mut self, flag: SignalFlag) -> Self {
        self.condition.set(Guard::signal(flag));
        self
    }

    /// Use a prebuilt guard.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.condition.set(guard);
        self
    }

    /// Side effect run between the source's exit and the target's entry.
    pub fn on_fire<F>(mut self, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_fire = Some(Rc::new(callback));
        self
    }

    pub fn target(&self) -> StateId {
        self.target
    }

    pub fn has_condition(&self) -> bool {
        self.condition.is_set()
    }

    pub fn build(self) -> Result<Transition, BuildError> {
        let guard = self.condition.resolve(BuildError::MissingCondition)?;
        Ok(Transition {
            target: self.target,
            guard,
            on_fire: self.on_fire,
        })
    }
}

/// Builder for a transition that is appended to its source state on build.
///
/// Obtained from [`StateGraph::add_transition`].
pub struct BoundTransitionBuilder<'g> {
    graph: &'g mut StateGraph,
    from: StateId,
    inner: TransitionBuilder,
}

impl<'g> BoundTransitionBuilder<'g> {
    pub(crate) fn new(graph: &'g mut StateGraph, from: StateId, to: StateId) -> Self {
        Self {
            graph,
            from,
            inner: TransitionBuilder::new(to),
        }
    }

    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&State) -> bool + 'static,
    {
        self.inner = self.inner.when(predicate);
        self
    }

    pub fn after(mut self, seconds: f32) -> Self {
        self.inner = self.inner.after(seconds);
        self
    }

    pub fn on_signal(mut self, flag: SignalFlag) -> Self {
        self.inner = self.inner.on_signal(flag);
        self
    }

    pub fn guard(mut self, guard: Guard) -> Self {
        self.inner = self.inner.guard(guard);
        self
    }

    pub fn on_fire<F>(mut self, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.inner = self.inner.on_fire(callback);
        self
    }

    /// Build the transition and append it to the source state's list.
    ///
    /// Returns a clone of the appended transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        for id in [self.from, self.inner.target()] {
            if !self.graph.contains(id) {
                return Err(BuildError::UnknownState(id));
            }
        }
        let transition = self.inner.build()?;
        self.graph
            .add_transitions(self.from, [transition.clone()])
            .map_err(|_| BuildError::UnknownState(self.from))?;
        Ok(transition)
    }
}
