//! Bridge from external event sources to one-shot transition guards.
//!
//! An event source (an engine's signal system, an input layer, a network
//! callback) raises a [`SignalFlag`]; a signal guard consumes it on the next
//! tick. A signal raised any number of times between two evaluations fires
//! its transition exactly once.
//!
//! # Example
//!
//! ```rust
//! use tickstate::graph::StateGraph;
//! use tickstate::signal::{signal_transition, EventBus, EventSource};
//!
//! let bus = EventBus::new();
//! let mut graph = StateGraph::new();
//! let idle = graph.create_state("Idle").build();
//! let hurt = graph.create_state("Hurt").build();
//!
//! let (on_hit, subscription) = signal_transition(hurt, &bus, "hit");
//! graph.add_transitions(idle, [on_hit]).unwrap();
//!
//! assert_eq!(graph.perform_and_transition(idle, 0.016).unwrap(), idle);
//! bus.emit("hit");
//! assert_eq!(graph.perform_and_transition(idle, 0.016).unwrap(), hurt);
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;

pub use bus::{EventBus, SubscriptionId};

use crate::core::{Guard, StateId, Transition};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handler invoked by an event source when its event occurs.
pub type Handler = Box<dyn Fn() + Send + Sync>;

/// One-shot flag shared between an event source and a guard.
///
/// Clones share the same flag. Raising is safe from any thread.
#[derive(Clone, Default)]
pub struct SignalFlag(Arc<AtomicBool>);

impl SignalFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Read and clear the flag in one atomic step.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// A handler that raises this flag, for registration with an event source.
    pub fn handler(&self) -> Handler {
        let flag = self.clone();
        Box::new(move || flag.raise())
    }
}

impl fmt::Debug for SignalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SignalFlag").field(&self.is_raised()).finish()
    }
}

/// A publish/subscribe source of named events.
///
/// The core only needs to subscribe once; detaching is left to the host,
/// which keeps the returned subscription.
pub trait EventSource {
    type Subscription;

    fn subscribe(&self, event: &str, handler: Handler) -> Self::Subscription;

    /// Returns `false` if the subscription was not registered.
    fn unsubscribe(&self, subscription: Self::Subscription) -> bool;
}

/// Subscribe a fresh [`SignalFlag`] to `event` on `source`.
pub fn subscribe_signal<S>(source: &S, event: &str) -> (SignalFlag, S::Subscription)
where
    S: EventSource + ?Sized,
{
    let flag = SignalFlag::new();
    let subscription = source.subscribe(event, flag.handler());
    (flag, subscription)
}

/// Build a transition to `target` that fires once per occurrence of `event`.
pub fn signal_transition<S>(
    target: StateId,
    source: &S,
    event: &str,
) -> (Transition, S::Subscription)
where
    S: EventSource + ?Sized,
{
    let (flag, subscription) = subscribe_signal(source, event);
    (Transition::new(target, Guard::signal(flag)), subscription)
}
