//! Broadcast bus abstraction.
//!
//! The host application supplies the real cross-process transport, assumed
//! reliable, ordered, and fire-and-forget. `LocalBus` is the in-process
//! implementation used by tests and single-machine embedding.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Callback invoked with each payload published on a subscribed channel.
pub type BusHandler = Arc<dyn Fn(&[u8]) + Send + Sync>;

/// Fire-and-forget broadcast bus.
///
/// Delivery is at-most-once: no acknowledgement, no retry, no sequence
/// numbers. A message published while a process is not yet subscribed is
/// simply lost to it.
pub trait MessageBus: Send + Sync {
    /// Publish a payload to every subscriber of a channel.
    fn publish(&self, channel: &str, payload: &[u8]);

    /// Subscribe a handler to a channel.
    fn subscribe(&self, channel: &str, handler: BusHandler);
}

/// In-process bus delivering payloads synchronously to subscribers.
pub struct LocalBus {
    handlers: Mutex<HashMap<String, Vec<BusHandler>>>,
}

impl LocalBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for LocalBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBus for LocalBus {
    fn publish(&self, channel: &str, payload: &[u8]) {
        // Handlers are cloned out so a handler may publish again without
        // holding the bus lock.
        let handlers: Vec<BusHandler> = {
            let map = self.handlers.lock().unwrap();
            map.get(channel).cloned().unwrap_or_default()
        };
        for handler in handlers {
            handler(payload);
        }
    }

    fn subscribe(&self, channel: &str, handler: BusHandler) {
        self.handlers
            .lock()
            .unwrap()
            .entry(channel.to_string())
            .or_insert_with(Vec::new)
            .push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let bus = LocalBus::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        for _ in 0..2 {
            let received = received.clone();
            bus.subscribe(
                "extensions:loaded",
                Arc::new(move |payload: &[u8]| {
                    received.lock().unwrap().push(payload.to_vec());
                }),
            );
        }

        bus.publish("extensions:loaded", b"snapshot");
        assert_eq!(received.lock().unwrap().len(), 2);
        assert_eq!(received.lock().unwrap()[0], b"snapshot");
    }

    #[test]
    fn test_channels_are_independent() {
        let bus = LocalBus::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let sink = received.clone();
        bus.subscribe(
            "extensions:loaded",
            Arc::new(move |payload: &[u8]| {
                sink.lock().unwrap().push(payload.to_vec());
            }),
        );

        bus.publish("other:channel", b"elsewhere");
        assert!(received.lock().unwrap().is_empty());

        bus.publish("extensions:loaded", b"here");
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = LocalBus::new();
        bus.publish("extensions:loaded", b"nobody listening");
    }
}
