//! Snapshot broadcasting from the authoritative process.

use crate::registry::{ExtensionRegistry, RegistryObserver};
use crate::sync::bus::MessageBus;
use crate::sync::snapshot::{RegistrySnapshot, SyncConfig};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

/// Broadcasts the full registry on every trigger.
///
/// Triggers: any registry mutation (the publisher is installed as an
/// observer), a renderer context signalling ready, and changes to the set of
/// connected remote targets. Every trigger sends the entire current registry
/// as a single message; receivers merge additively, so rebroadcasts are safe.
pub struct SnapshotPublisher {
    bus: Arc<dyn MessageBus>,
    channel: String,
    remote_targets: Mutex<Vec<String>>,
}

impl SnapshotPublisher {
    /// Create a publisher over a bus.
    pub fn new(bus: Arc<dyn MessageBus>, config: &SyncConfig) -> Self {
        Self {
            bus,
            channel: config.channel.clone(),
            remote_targets: Mutex::new(Vec::new()),
        }
    }

    /// Broadcast the registry's current contents as one message.
    pub fn publish(&self, registry: &ExtensionRegistry) {
        let snapshot = RegistrySnapshot::new(registry.snapshot());
        match snapshot.encode() {
            Ok(payload) => {
                debug!(
                    "broadcasting {} extension(s) on {}",
                    snapshot.extensions.len(),
                    self.channel
                );
                self.bus.publish(&self.channel, &payload);
            }
            Err(err) => error!("failed to encode registry snapshot: {}", err),
        }
    }

    /// Rebroadcast for a renderer context that signalled ready.
    pub fn renderer_ready(&self, registry: &ExtensionRegistry) {
        self.publish(registry);
    }

    /// Update the connected remote-target set, rebroadcasting when it changed.
    pub fn set_remote_targets(&self, registry: &ExtensionRegistry, targets: Vec<String>) {
        let changed = {
            let mut current = self.remote_targets.lock().unwrap();
            if *current == targets {
                false
            } else {
                *current = targets;
                true
            }
        };
        if changed {
            self.publish(registry);
        }
    }
}

impl RegistryObserver for SnapshotPublisher {
    fn registry_changed(&self, registry: &ExtensionRegistry) {
        self.publish(registry);
    }
}
