//! Per-tick evaluation of the active state.

use super::{GraphError, StateGraph};
use crate::core::StateId;

/// Outcome of a single tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepResult {
    /// No transition matched; the state stays active.
    Stayed(StateId),

    /// A transition fired.
    Transitioned {
        from: StateId,
        to: StateId,
        /// Index of the selected transition in the source's list
        transition: usize,
        /// Source counters at the moment of firing, before the reset
        elapsed: f32,
        frames: u64,
    },
}

impl StepResult {
    /// The state that is active after the tick.
    pub fn next(&self) -> StateId {
        match self {
            StepResult::Stayed(id) => *id,
            StepResult::Transitioned { to, .. } => *to,
        }
    }

    pub fn transitioned(&self) -> bool {
        matches!(self, StepResult::Transitioned { .. })
    }
}

impl StateGraph {
    /// Run one tick of `current` and return the state to use next tick.
    ///
    /// See [`StateGraph::step`] for the exact sequence of effects.
    pub fn perform_and_transition(
        &mut self,
        current: StateId,
        delta: f32,
    ) -> Result<StateId, GraphError> {
        self.step(current, delta).map(|result| result.next())
    }

    /// Run one tick of `current`.
    ///
    /// 1. `elapsed += delta` and `frame_count += 1` on `current`.
    /// 2. Every action of `current` runs with `delta`, in order.
    /// 3. Transitions are evaluated in order and the first whose guard holds
    ///    is selected. Later guards are not evaluated.
    /// 4. On a match, `current`'s counters are zeroed, then its exit
    ///    callback, the transition's fire callback and the target's entry
    ///    callback run in that order.
    ///
    /// Preconditions are checked before anything is mutated. A panic in a
    /// callback unwinds out of this call and leaves earlier effects in place.
    pub fn step(&mut self, current: StateId, delta: f32) -> Result<StepResult, GraphError> {
        if !delta.is_finite() || delta < 0.0 {
            tracing::warn!(state = %current, delta, "rejected tick with invalid delta");
            return Err(GraphError::InvalidDelta(delta));
        }
        let Some(state) = self.states.get_mut(current.0) else {
            tracing::warn!(state = %current, "rejected tick for unknown state");
            return Err(GraphError::UnknownState(current));
        };

        state.elapsed += delta;
        state.frame_count += 1;
        tracing::trace!(
            state = %state.name,
            delta,
            elapsed = state.elapsed,
            frame = state.frame_count,
            "tick"
        );

        for action in state.actions.iter_mut() {
            action(delta);
        }

        let source = &*state;
        let Some(index) = source
            .transitions
            .iter()
            .position(|transition| transition.should_transition(source))
        else {
            return Ok(StepResult::Stayed(current));
        };

        let (elapsed, frames) = (state.elapsed, state.frame_count);
        state.reset_counters();
        state.exit();
        let transition = &state.transitions[index];
        transition.fire();
        let target = transition.target;

        self.states
            .get_mut(target.0)
            .ok_or(GraphError::UnknownState(target))?
            .enter();

        tracing::debug!(
            from = %self.states[current.0].name,
            to = %self.states[target.0].name,
            transition = index,
            elapsed,
            frames,
            "transition fired"
        );

        Ok(StepResult::Transitioned {
            from: current,
            to: target,
            transition: index,
            elapsed,
            frames,
        })
    }
}
