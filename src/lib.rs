//! Tickstate: a frame-driven finite state machine toolkit
//!
//! A host (typically a game object) defines states with per-frame actions,
//! entry/exit callbacks and guarded transitions, then ticks the active state
//! once per frame. The tick returns the state to use on the next frame; the
//! returned [`StateId`] is the machine's only current-state register.
//!
//! # Core Concepts
//!
//! - **State**: a node with a name, a display tag, per-tick actions, entry and
//!   exit callbacks, and an ordered list of outgoing transitions
//! - **Guard**: a predicate, a timed threshold, or a one-shot external signal
//! - **Transition**: a guarded edge with an optional fire callback
//! - **Tick**: [`StateGraph::perform_and_transition`], first match wins
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tickstate::graph::StateGraph;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut graph = StateGraph::new();
//!
//! let exit_log = Rc::clone(&log);
//! let idle = graph
//!     .create_state("Idle")
//!     .on_exit(move || exit_log.borrow_mut().push("exit Idle"))
//!     .build();
//! let enter_log = Rc::clone(&log);
//! let attack = graph
//!     .create_state("Attack")
//!     .on_enter(move || enter_log.borrow_mut().push("enter Attack"))
//!     .build();
//!
//! let fire_log = Rc::clone(&log);
//! graph
//!     .add_transition(idle, attack)
//!     .after(2.0)
//!     .on_fire(move || fire_log.borrow_mut().push("fire"))
//!     .build()
//!     .unwrap();
//!
//! let mut current = idle;
//! for _ in 0..3 {
//!     current = graph.perform_and_transition(current, 1.0).unwrap();
//! }
//!
//! assert_eq!(current, attack);
//! assert_eq!(*log.borrow(), vec!["exit Idle", "fire", "enter Attack"]);
//! ```

pub mod builder;
pub mod core;
pub mod graph;
pub mod machine;
pub mod signal;

// Re-export commonly used types
pub use builder::BuildError;
pub use crate::core::{Guard, State, StateId, Transition, TriggeredState};
pub use graph::{GraphError, StateGraph, StepResult};
pub use machine::StateMachine;
pub use signal::{EventBus, EventSource, SignalFlag};
