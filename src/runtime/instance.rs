//! Extension instances.
//!
//! An instance is the live object a process constructs from an installed
//! extension descriptor. It owns an enable/disable lifecycle and exposes
//! its contributions through getter methods; each role registrar reads
//! the getters that matter for its process and ignores the rest.

use crate::contrib::{
    AppMenuItem, ClusterFeatureRegistration, KubeObjectDetailItem, KubeObjectMenuItem,
    PageRegistration, PreferenceRegistration, StatusBarItem,
};
use crate::core::{ExtensionId, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Live extension object with a lifecycle and contribution getters.
///
/// All getters default to empty so an extension only overrides the
/// contribution kinds it actually provides.
#[async_trait]
pub trait ExtensionInstance: Send + Sync {
    /// Called once after construction, before contributions are registered.
    fn enable(&self) -> Result<()> {
        Ok(())
    }

    /// Called during removal. Runs to completion before the descriptor
    /// leaves the registry.
    async fn disable(&self) -> Result<()> {
        Ok(())
    }

    /// Application menu entries, consumed by the main process.
    fn app_menu_items(&self) -> Vec<AppMenuItem> {
        Vec::new()
    }

    /// Application-wide pages, consumed by the cluster manager window.
    fn global_pages(&self) -> Vec<PageRegistration> {
        Vec::new()
    }

    /// Application preference panels, consumed by the cluster manager window.
    fn app_preferences(&self) -> Vec<PreferenceRegistration> {
        Vec::new()
    }

    /// Cluster feature toggles, consumed by the cluster manager window.
    fn cluster_features(&self) -> Vec<ClusterFeatureRegistration> {
        Vec::new()
    }

    /// Status bar entries, consumed by the cluster manager window.
    fn status_bar_items(&self) -> Vec<StatusBarItem> {
        Vec::new()
    }

    /// Pages scoped to one cluster view.
    fn cluster_pages(&self) -> Vec<PageRegistration> {
        Vec::new()
    }

    /// Context-menu entries for kube objects in a cluster view.
    fn kube_object_menu_items(&self) -> Vec<KubeObjectMenuItem> {
        Vec::new()
    }

    /// Detail panels for kube objects in a cluster view.
    fn kube_object_detail_items(&self) -> Vec<KubeObjectDetailItem> {
        Vec::new()
    }
}

/// Extension that contributes nothing.
///
/// Stands in for manifest-only extensions and doubles as a lifecycle
/// probe in tests via [`NullExtension::is_enabled`].
pub struct NullExtension {
    enabled: AtomicBool,
}

impl NullExtension {
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
        }
    }

    /// Whether enable has run without a matching disable.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl Default for NullExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExtensionInstance for NullExtension {
    fn enable(&self) -> Result<()> {
        self.enabled.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disable(&self) -> Result<()> {
        self.enabled.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// Per-process table of live instances, keyed by extension id.
///
/// Populated only by the lifecycle loader, never by the sync protocol.
/// At most one instance exists per id.
pub struct InstanceTable {
    instances: Mutex<HashMap<ExtensionId, Box<dyn ExtensionInstance>>>,
}

impl InstanceTable {
    pub fn new() -> Self {
        Self {
            instances: Mutex::new(HashMap::new()),
        }
    }

    /// Whether an instance is recorded for this id.
    pub fn contains(&self, id: &ExtensionId) -> bool {
        self.instances.lock().unwrap().contains_key(id)
    }

    /// Record an instance. Replaces any previous entry for the id.
    pub fn insert(&self, id: ExtensionId, instance: Box<dyn ExtensionInstance>) {
        self.instances.lock().unwrap().insert(id, instance);
    }

    /// Remove and return the instance for an id, if one is recorded.
    pub fn take(&self, id: &ExtensionId) -> Option<Box<dyn ExtensionInstance>> {
        self.instances.lock().unwrap().remove(id)
    }

    pub fn len(&self) -> usize {
        self.instances.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.lock().unwrap().is_empty()
    }
}

impl Default for InstanceTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_extension_lifecycle() {
        let ext = NullExtension::new();
        assert!(!ext.is_enabled());

        ext.enable().unwrap();
        assert!(ext.is_enabled());

        ext.disable().await.unwrap();
        assert!(!ext.is_enabled());
    }

    #[test]
    fn test_instance_table_tracks_entries() {
        let table = InstanceTable::new();
        let id = ExtensionId::new("/e/a/package.json");
        assert!(table.is_empty());
        assert!(!table.contains(&id));

        table.insert(id.clone(), Box::new(NullExtension::new()));
        assert!(table.contains(&id));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_instance_table_take_removes_entry() {
        let table = InstanceTable::new();
        let id = ExtensionId::new("/e/a/package.json");
        table.insert(id.clone(), Box::new(NullExtension::new()));

        assert!(table.take(&id).is_some());
        assert!(!table.contains(&id));
        assert!(table.take(&id).is_none());
    }
}
