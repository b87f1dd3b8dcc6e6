//! Structural snapshot of a graph for logging and debugging.

use super::StateGraph;
use crate::core::{GuardKind, StateId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closure-free description of a [`StateGraph`].
///
/// The `Display` form lists one state per line:
///
/// ```text
/// StateGraph {
///   Idle => Walk (after 2s)
///   Walk => [Idle (on signal), Jump (if)]
///   Jump
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    pub states: Vec<StateDescription>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateDescription {
    pub id: StateId,
    pub name: String,
    pub tag: String,
    pub actions: usize,
    pub transitions: Vec<TransitionDescription>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionDescription {
    pub target: StateId,
    pub target_name: String,
    pub guard: GuardKind,
    pub on_fire: bool,
}

impl GraphDescription {
    pub(crate) fn of(graph: &StateGraph) -> Self {
        let name_of = |id: StateId| {
            graph
                .state(id)
                .map(|s| s.name().to_string())
                .unwrap_or_default()
        };
        let states = graph
            .states()
            .map(|state| StateDescription {
                id: state.id(),
                name: state.name().to_string(),
                tag: state.tag().to_string(),
                actions: state.action_count(),
                transitions: state
                    .transitions()
                    .iter()
                    .map(|t| TransitionDescription {
                        target: t.target(),
                        target_name: name_of(t.target()),
                        guard: t.guard().kind(),
                        on_fire: t.on_fire.is_some(),
                    })
                    .collect(),
            })
            .collect();
        Self { states }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for GraphDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StateGraph {{")?;
        for state in &self.states {
            write!(f, "  {}", state.name)?;
            let edges: Vec<String> = state
                .transitions
                .iter()
                .map(|t| format!("{} ({})", t.target_name, t.guard))
                .collect();
            match edges.len() {
                0 => {}
                1 => write!(f, " => {}", edges[0])?,
                _ => write!(f, " => [{}]", edges.join(", "))?,
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
