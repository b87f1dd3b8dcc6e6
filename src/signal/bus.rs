//! In-process event source keyed by event name.

use super::{EventSource, Handler};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type SharedHandler = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: HashMap<String, Vec<(SubscriptionId, SharedHandler)>>,
}

/// A minimal thread-safe publish/subscribe hub.
///
/// Handlers run on the emitting thread, outside the internal lock, so a
/// handler may subscribe or emit without deadlocking.
#[derive(Default)]
pub struct EventBus {
    registry: Mutex<Registry>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify every subscriber of `event`; returns how many were notified.
    pub fn emit(&self, event: &str) -> usize {
        let handlers: Vec<SharedHandler> = self
            .registry()
            .handlers
            .get(event)
            .map(|subs| subs.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default();
        for handler in &handlers {
            handler();
        }
        tracing::trace!(event, subscribers = handlers.len(), "event emitted");
        handlers.len()
    }

    pub fn subscriber_count(&self, event: &str) -> usize {
        self.registry().handlers.get(event).map_or(0, Vec::len)
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSource for EventBus {
    type Subscription = SubscriptionId;

    fn subscribe(&self, event: &str, handler: Handler) -> SubscriptionId {
        let mut registry = self.registry();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry
            .handlers
            .entry(event.to_string())
            .or_default()
            .push((id, Arc::from(handler)));
        id
    }

    /// Detach a handler. The event's entry is dropped with its last handler.
    fn unsubscribe(&self, subscription: SubscriptionId) -> bool {
        let mut registry = self.registry();
        let Some(event) = registry.handlers.iter().find_map(|(event, subs)| {
            subs.iter()
                .any(|(id, _)| *id == subscription)
                .then(|| event.clone())
        }) else {
            tracing::warn!(?subscription, "unsubscribe for unknown subscription");
            return false;
        };
        let emptied = match registry.handlers.get_mut(&event) {
            Some(subs) => {
                subs.retain(|(id, _)| *id != subscription);
                subs.is_empty()
            }
            None => false,
        };
        if emptied {
            registry.handlers.remove(&event);
        }
        true
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry();
        let mut events: Vec<(&String, usize)> = registry
            .handlers
            .iter()
            .map(|(event, subs)| (event, subs.len()))
            .collect();
        events.sort();
        f.debug_struct("EventBus").field("events", &events).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::subscribe_signal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn emit_notifies_matching_subscribers() {
        let bus = EventBus::new();
        let (jump, _) = subscribe_signal(&bus, "jump");
        let (land, _) = subscribe_signal(&bus, "land");

        assert_eq!(bus.emit("jump"), 1);

        assert!(jump.is_raised());
        assert!(!land.is_raised());
    }

    #[test]
    fn emit_without_subscribers_is_harmless() {
        let bus = EventBus::new();
        assert_eq!(bus.emit("nothing"), 0);
    }

    #[test]
    fn unsubscribe_detaches_handler() {
        let bus = EventBus::new();
        let (flag, subscription) = subscribe_signal(&bus, "hit");

        assert!(bus.unsubscribe(subscription));
        assert_eq!(bus.subscriber_count("hit"), 0);
        assert_eq!(bus.emit("hit"), 0);
        assert!(!flag.is_raised());
    }

    #[test]
    fn unsubscribe_twice_reports_unknown() {
        let bus = EventBus::new();
        let (_, subscription) = subscribe_signal(&bus, "hit");

        assert!(bus.unsubscribe(subscription));
        assert!(!bus.unsubscribe(subscription));
    }

    #[test]
    fn last_unsubscribe_drops_the_event_entry() {
        let bus = EventBus::new();
        let (_, first) = subscribe_signal(&bus, "hit");
        let (_, second) = subscribe_signal(&bus, "hit");
        subscribe_signal(&bus, "land");

        assert!(bus.unsubscribe(first));
        assert_eq!(
            format!("{bus:?}"),
            r#"EventBus { events: [("hit", 1), ("land", 1)] }"#
        );

        assert!(bus.unsubscribe(second));
        assert_eq!(format!("{bus:?}"), r#"EventBus { events: [("land", 1)] }"#);
        assert_eq!(bus.subscriber_count("hit"), 0);
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        for expected in 0..3 {
            let counter = Arc::clone(&counter);
            bus.subscribe(
                "tick",
                Box::new(move || {
                    let seen = counter.fetch_add(1, Ordering::SeqCst);
                    assert_eq!(seen, expected);
                }),
            );
        }

        assert_eq!(bus.emit("tick"), 3);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn handler_may_subscribe_during_emit() {
        let bus = Arc::new(EventBus::new());
        let inner = Arc::clone(&bus);
        bus.subscribe(
            "spawn",
            Box::new(move || {
                inner.subscribe("spawned", Box::new(|| {}));
            }),
        );

        bus.emit("spawn");

        assert_eq!(bus.subscriber_count("spawned"), 1);
    }

    #[test]
    fn debug_lists_events() {
        let bus = EventBus::new();
        subscribe_signal(&bus, "b");
        subscribe_signal(&bus, "a");

        assert_eq!(
            format!("{bus:?}"),
            r#"EventBus { events: [("a", 1), ("b", 1)] }"#
        );
    }
}
