//! Optional host-side runner.
//!
//! The driver only needs the host to remember the active [`StateId`].
//! [`StateMachine`] does that bookkeeping, records fired transitions and
//! wraps every tick in a log span. It adds nothing to the tick contract.

mod config;

pub use config::{ConfigError, MachineConfig};

use crate::core::{State, StateId, TransitionHistory, TransitionRecord};
use crate::graph::{GraphError, StateGraph, StepResult};
use chrono::Utc;

/// A graph together with its current-state register.
///
/// # Example
///
/// ```rust
/// use tickstate::graph::StateGraph;
/// use tickstate::machine::StateMachine;
///
/// let mut graph = StateGraph::new();
/// let red = graph.create_state("Red").build();
/// let green = graph.create_state("Green").build();
/// graph.add_transition(red, green).after(1.0).build().unwrap();
/// graph.add_transition(green, red).after(1.0).build().unwrap();
///
/// let mut machine = StateMachine::new(graph, red).unwrap();
/// machine.tick(0.6).unwrap();
/// machine.tick(0.6).unwrap();
///
/// assert_eq!(machine.current(), green);
/// assert_eq!(machine.history().get_path(), vec![red, green]);
/// ```
#[derive(Debug)]
pub struct StateMachine {
    graph: StateGraph,
    initial: StateId,
    current: StateId,
    history: TransitionHistory,
    config: MachineConfig,
}

impl StateMachine {
    /// Create a runner positioned on `initial`. No entry callback runs.
    pub fn new(graph: StateGraph, initial: StateId) -> Result<Self, GraphError> {
        Self::with_config(graph, initial, MachineConfig::default())
    }

    pub fn with_config(
        graph: StateGraph,
        initial: StateId,
        config: MachineConfig,
    ) -> Result<Self, GraphError> {
        if !graph.contains(initial) {
            return Err(GraphError::UnknownState(initial));
        }
        Ok(Self {
            graph,
            initial,
            current: initial,
            history: TransitionHistory::with_limit(config.history_limit),
            config,
        })
    }

    /// Tick the current state and adopt whatever state the driver returns.
    pub fn tick(&mut self, delta: f32) -> Result<StepResult, GraphError> {
        let span = tracing::debug_span!("machine", name = %self.config.name);
        let _entered = span.enter();

        let result = self.graph.step(self.current, delta)?;
        if let StepResult::Transitioned {
            from,
            to,
            transition,
            elapsed,
            frames,
        } = result
        {
            if self.config.record_history {
                self.history.record(TransitionRecord {
                    from,
                    to,
                    from_name: self.graph.get(from).name().to_string(),
                    to_name: self.graph.get(to).name().to_string(),
                    transition,
                    elapsed,
                    frames,
                    timestamp: Utc::now(),
                });
            }
            self.current = to;
        }
        Ok(result)
    }

    pub fn current(&self) -> StateId {
        self.current
    }

    pub fn current_state(&self) -> &State {
        self.graph.get(self.current)
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Jump to `id` without running any callback, zeroing its counters.
    ///
    /// Meant for restarts; the history is left untouched.
    pub fn reset_to(&mut self, id: StateId) -> Result<(), GraphError> {
        self.graph.reset_counters(id)?;
        tracing::debug!(name = %self.config.name, state = %id, "machine reset");
        self.current = id;
        Ok(())
    }

    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    /// Mutable access for runtime edits such as replacing transitions.
    pub fn graph_mut(&mut self) -> &mut StateGraph {
        &mut self.graph
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn into_graph(self) -> StateGraph {
        self.graph
    }
}
