//! Installed-extension registry.
//!
//! Insertion-ordered map from extension id to descriptor. The main process
//! holds the authoritative registry; every other process holds a replica
//! populated only through the sync protocol. Each mutation notifies
//! subscribed observers synchronously.

use crate::core::ExtensionId;
use crate::manifest::InstalledExtension;
use crate::registry::observer::RegistryObserver;
use indexmap::IndexMap;
use std::sync::Arc;

/// Per-process registry of installed extensions.
pub struct ExtensionRegistry {
    /// Descriptors in insertion order
    entries: IndexMap<ExtensionId, InstalledExtension>,
    /// Subscribed observers
    observers: Vec<Arc<dyn RegistryObserver>>,
}

impl ExtensionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            observers: Vec::new(),
        }
    }

    /// Subscribe an observer to mutation notifications.
    pub fn subscribe(&mut self, observer: Arc<dyn RegistryObserver>) {
        self.observers.push(observer);
    }

    /// Insert a descriptor.
    ///
    /// Idempotent: inserting an id that is already present leaves the
    /// registry unchanged and does not notify observers. Returns whether
    /// the descriptor was added.
    pub fn add(&mut self, extension: InstalledExtension) -> bool {
        if self.entries.contains_key(&extension.id) {
            return false;
        }
        self.entries.insert(extension.id.clone(), extension);
        self.notify();
        true
    }

    /// Remove a descriptor by id, keeping the order of remaining entries.
    ///
    /// Returns the removed descriptor if one was present.
    pub fn remove(&mut self, id: &ExtensionId) -> Option<InstalledExtension> {
        let removed = self.entries.shift_remove(id);
        if removed.is_some() {
            self.notify();
        }
        removed
    }

    /// Merge a snapshot of descriptors, additively.
    ///
    /// Descriptors already present are left untouched and descriptors absent
    /// from the snapshot are never removed. Fires a single notification when
    /// at least one descriptor was added. Returns the number added.
    pub fn merge(&mut self, snapshot: Vec<InstalledExtension>) -> usize {
        let mut added = 0;
        for extension in snapshot {
            if !self.entries.contains_key(&extension.id) {
                self.entries.insert(extension.id.clone(), extension);
                added += 1;
            }
        }
        if added > 0 {
            self.notify();
        }
        added
    }

    /// Look up a descriptor by id.
    pub fn get(&self, id: &ExtensionId) -> Option<&InstalledExtension> {
        self.entries.get(id)
    }

    /// Look up a descriptor by manifest name.
    pub fn get_by_name(&self, name: &str) -> Option<&InstalledExtension> {
        self.entries.values().find(|ext| ext.manifest.name == name)
    }

    /// Iterate `(id, descriptor)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ExtensionId, &InstalledExtension)> {
        self.entries.iter()
    }

    /// Materialize the current contents in insertion order.
    pub fn snapshot(&self) -> Vec<InstalledExtension> {
        self.entries.values().cloned().collect()
    }

    /// Number of installed extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.registry_changed(self);
        }
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ExtensionManifest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingObserver {
        notifications: AtomicUsize,
    }

    impl CountingObserver {
        fn new() -> Self {
            Self {
                notifications: AtomicUsize::new(0),
            }
        }

        fn count(&self) -> usize {
            self.notifications.load(Ordering::SeqCst)
        }
    }

    impl RegistryObserver for CountingObserver {
        fn registry_changed(&self, _registry: &ExtensionRegistry) {
            self.notifications.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn descriptor(path: &str, name: &str) -> InstalledExtension {
        InstalledExtension::new(path, ExtensionManifest::new(name, "1.0.0"))
    }

    #[test]
    fn test_add_and_get() {
        let mut registry = ExtensionRegistry::new();
        let extension = descriptor("/e/a/package.json", "a");
        let id = extension.id.clone();

        assert!(registry.add(extension));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().manifest.name, "a");
        assert!(registry.get(&ExtensionId::new("/e/b/package.json")).is_none());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut registry = ExtensionRegistry::new();
        let observer = Arc::new(CountingObserver::new());
        registry.subscribe(observer.clone());

        assert!(registry.add(descriptor("/e/a/package.json", "a")));
        assert!(!registry.add(descriptor("/e/a/package.json", "a-again")));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_by_name("a").unwrap().manifest.name, "a");
        assert_eq!(observer.count(), 1);
    }

    #[test]
    fn test_remove_notifies_only_when_present() {
        let mut registry = ExtensionRegistry::new();
        let observer = Arc::new(CountingObserver::new());
        registry.subscribe(observer.clone());

        let extension = descriptor("/e/a/package.json", "a");
        let id = extension.id.clone();
        registry.add(extension);
        assert!(registry.remove(&id).is_some());
        assert!(registry.remove(&id).is_none());

        assert!(registry.is_empty());
        assert_eq!(observer.count(), 2);
    }

    #[test]
    fn test_iteration_order_survives_removal() {
        let mut registry = ExtensionRegistry::new();
        registry.add(descriptor("/e/a/package.json", "a"));
        registry.add(descriptor("/e/b/package.json", "b"));
        registry.add(descriptor("/e/c/package.json", "c"));
        registry.remove(&ExtensionId::new("/e/b/package.json"));
        registry.add(descriptor("/e/d/package.json", "d"));

        let names: Vec<&str> = registry
            .iter()
            .map(|(_, ext)| ext.manifest.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_merge_is_additive() {
        let mut registry = ExtensionRegistry::new();
        let observer = Arc::new(CountingObserver::new());
        registry.add(descriptor("/e/a/package.json", "a"));
        registry.add(descriptor("/e/b/package.json", "b"));
        registry.subscribe(observer.clone());

        // An incoming snapshot that dropped "b" must not remove it here.
        let added = registry.merge(vec![descriptor("/e/a/package.json", "a")]);

        assert_eq!(added, 0);
        assert_eq!(registry.len(), 2);
        assert!(registry.get(&ExtensionId::new("/e/b/package.json")).is_some());
        assert_eq!(observer.count(), 0);
    }

    #[test]
    fn test_merge_notifies_once_per_snapshot() {
        let mut registry = ExtensionRegistry::new();
        let observer = Arc::new(CountingObserver::new());
        registry.subscribe(observer.clone());

        let added = registry.merge(vec![
            descriptor("/e/a/package.json", "a"),
            descriptor("/e/b/package.json", "b"),
        ]);

        assert_eq!(added, 2);
        assert_eq!(observer.count(), 1);

        let names: Vec<&str> = registry
            .iter()
            .map(|(_, ext)| ext.manifest.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_snapshot_matches_iteration_order() {
        let mut registry = ExtensionRegistry::new();
        registry.add(descriptor("/e/b/package.json", "b"));
        registry.add(descriptor("/e/a/package.json", "a"));

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].manifest.name, "b");
        assert_eq!(snapshot[1].manifest.name, "a");
    }
}
