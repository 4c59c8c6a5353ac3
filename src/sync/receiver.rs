//! Snapshot reception on replica processes.

use crate::registry::ExtensionRegistry;
use crate::sync::bus::MessageBus;
use crate::sync::snapshot::{RegistrySnapshot, SyncConfig};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Subscribes a replica registry to snapshot broadcasts.
pub struct SnapshotReceiver;

impl SnapshotReceiver {
    /// Install the merge handler on the bus.
    ///
    /// Each received snapshot is merged additively: descriptors already
    /// present locally are kept as they are, and descriptors missing from
    /// the snapshot are never removed. A payload that fails to decode is
    /// logged and dropped.
    pub fn install(
        bus: &dyn MessageBus,
        registry: Arc<Mutex<ExtensionRegistry>>,
        config: &SyncConfig,
    ) {
        bus.subscribe(
            &config.channel,
            Arc::new(move |payload: &[u8]| match RegistrySnapshot::decode(payload) {
                Ok(snapshot) => {
                    let added = registry.lock().unwrap().merge(snapshot.extensions);
                    if added > 0 {
                        debug!("merged {} new extension(s) from snapshot", added);
                    }
                }
                Err(err) => warn!("ignoring undecodable registry snapshot: {}", err),
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExtensionId;
    use crate::manifest::{ExtensionManifest, InstalledExtension};
    use crate::sync::bus::LocalBus;

    fn descriptor(path: &str, name: &str) -> InstalledExtension {
        InstalledExtension::new(path, ExtensionManifest::new(name, "1.0.0"))
    }

    fn payload(extensions: Vec<InstalledExtension>) -> Vec<u8> {
        RegistrySnapshot::new(extensions).encode().unwrap()
    }

    #[test]
    fn test_receiver_merges_snapshots() {
        let bus = LocalBus::new();
        let registry = Arc::new(Mutex::new(ExtensionRegistry::new()));
        SnapshotReceiver::install(&bus, registry.clone(), &SyncConfig::default());

        bus.publish(
            "extensions:loaded",
            &payload(vec![descriptor("/e/a/package.json", "a")]),
        );

        let registry = registry.lock().unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&ExtensionId::new("/e/a/package.json")).is_some());
    }

    #[test]
    fn test_receiver_never_removes_local_entries() {
        let bus = LocalBus::new();
        let registry = Arc::new(Mutex::new(ExtensionRegistry::new()));
        {
            let mut registry = registry.lock().unwrap();
            registry.add(descriptor("/e/a/package.json", "a"));
            registry.add(descriptor("/e/b/package.json", "b"));
        }
        SnapshotReceiver::install(&bus, registry.clone(), &SyncConfig::default());

        // The authoritative side removed "b"; the replica must keep it.
        bus.publish(
            "extensions:loaded",
            &payload(vec![descriptor("/e/a/package.json", "a")]),
        );

        let registry = registry.lock().unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get(&ExtensionId::new("/e/b/package.json")).is_some());
    }

    #[test]
    fn test_receiver_ignores_garbage_payloads() {
        let bus = LocalBus::new();
        let registry = Arc::new(Mutex::new(ExtensionRegistry::new()));
        SnapshotReceiver::install(&bus, registry.clone(), &SyncConfig::default());

        bus.publish("extensions:loaded", b"not a snapshot");

        assert!(registry.lock().unwrap().is_empty());
    }

    #[test]
    fn test_receiver_honors_configured_channel() {
        let bus = LocalBus::new();
        let registry = Arc::new(Mutex::new(ExtensionRegistry::new()));
        let config = SyncConfig {
            channel: "extensions:test".to_string(),
        };
        SnapshotReceiver::install(&bus, registry.clone(), &config);

        bus.publish(
            "extensions:loaded",
            &payload(vec![descriptor("/e/a/package.json", "a")]),
        );
        assert!(registry.lock().unwrap().is_empty());

        bus.publish(
            "extensions:test",
            &payload(vec![descriptor("/e/a/package.json", "a")]),
        );
        assert_eq!(registry.lock().unwrap().len(), 1);
    }
}
