//! Per-process runtime context.
//!
//! The context owns every piece of extension state for one process: the
//! registry, the instance table, the lifecycle loader, the bus handle
//! and, in the main process, the snapshot publisher. Construction wires
//! the sync protocol and the autoload reaction for the chosen role.

use crate::core::{Error, ExtensionId, Result};
use crate::manifest::InstalledExtension;
use crate::modules::{ModuleLoader, ModuleResolver};
use crate::registry::{ExtensionRegistry, RegistryObserver};
use crate::runtime::instance::InstanceTable;
use crate::runtime::loader::ExtensionLoader;
use crate::runtime::registrar::ContributionRegistrar;
use crate::runtime::role::ProcessRole;
use crate::sync::{MessageBus, SnapshotPublisher, SnapshotReceiver, SyncConfig};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

/// One process's extension runtime.
pub struct ProcessContext {
    role: ProcessRole,
    registry: Arc<Mutex<ExtensionRegistry>>,
    instances: Arc<InstanceTable>,
    loader: Arc<ExtensionLoader>,
    publisher: Option<Arc<SnapshotPublisher>>,
    bus: Arc<dyn MessageBus>,
}

impl ProcessContext {
    /// Context for the authoritative main process.
    pub fn main(
        bus: Arc<dyn MessageBus>,
        modules: Arc<dyn ModuleLoader>,
        registrar: Arc<dyn ContributionRegistrar>,
    ) -> Self {
        Self::with_config(ProcessRole::Main, bus, modules, registrar, SyncConfig::default())
    }

    /// Context for the cluster manager window.
    pub fn cluster_manager(
        bus: Arc<dyn MessageBus>,
        modules: Arc<dyn ModuleLoader>,
        registrar: Arc<dyn ContributionRegistrar>,
    ) -> Self {
        Self::with_config(
            ProcessRole::ClusterManager,
            bus,
            modules,
            registrar,
            SyncConfig::default(),
        )
    }

    /// Context for a window scoped to a single cluster.
    pub fn cluster(
        bus: Arc<dyn MessageBus>,
        modules: Arc<dyn ModuleLoader>,
        registrar: Arc<dyn ContributionRegistrar>,
    ) -> Self {
        Self::with_config(ProcessRole::Cluster, bus, modules, registrar, SyncConfig::default())
    }

    /// Context with an explicit sync configuration.
    pub fn with_config(
        role: ProcessRole,
        bus: Arc<dyn MessageBus>,
        modules: Arc<dyn ModuleLoader>,
        registrar: Arc<dyn ContributionRegistrar>,
        config: SyncConfig,
    ) -> Self {
        let registry = Arc::new(Mutex::new(ExtensionRegistry::new()));
        let instances = Arc::new(InstanceTable::new());
        let resolver = ModuleResolver::new(modules, role.entry_point());
        let loader = Arc::new(ExtensionLoader::new(instances.clone(), resolver, registrar));

        let publisher = if role.is_authoritative() {
            let publisher = Arc::new(SnapshotPublisher::new(bus.clone(), &config));
            registry.lock().unwrap().subscribe(publisher.clone());
            Some(publisher)
        } else {
            None
        };
        registry.lock().unwrap().subscribe(loader.clone());
        // The authoritative registry only produces snapshots; replicas
        // consume them.
        if !role.is_authoritative() {
            SnapshotReceiver::install(bus.as_ref(), registry.clone(), &config);
        }

        // First load pass runs at startup, before any change arrives.
        {
            let registry = registry.lock().unwrap();
            if let Err(e) = loader.autoload(&registry) {
                error!("initial extension load pass aborted: {}", e);
            }
        }

        info!("extension runtime ready for {} process", role);
        Self {
            role,
            registry,
            instances,
            loader,
            publisher,
            bus,
        }
    }

    /// Add a descriptor to the authoritative registry.
    ///
    /// Returns false when the id is already present. Replica contexts
    /// cannot add; their registries fill through the sync channel.
    pub fn add_extension(&self, extension: InstalledExtension) -> Result<bool> {
        if !self.role.is_authoritative() {
            return Err(Error::NotAuthoritative(format!(
                "{} process cannot add extensions",
                self.role
            )));
        }
        Ok(self.registry.lock().unwrap().add(extension))
    }

    /// Remove a descriptor, disabling its live instance first.
    ///
    /// The disable call runs to completion before the registry entry is
    /// deleted. When disable fails the instance is restored, the
    /// descriptor stays, and the error propagates. Returns false when
    /// the id is unknown.
    pub async fn remove_by_id(&self, id: &ExtensionId) -> Result<bool> {
        if !self.role.is_authoritative() {
            return Err(Error::NotAuthoritative(format!(
                "{} process cannot remove extensions",
                self.role
            )));
        }
        if self.registry.lock().unwrap().get(id).is_none() {
            return Ok(false);
        }
        if let Some(instance) = self.instances.take(id) {
            if let Err(e) = instance.disable().await {
                self.instances.insert(id.clone(), instance);
                return Err(e);
            }
            info!("extension {} disabled", id);
        }
        Ok(self.registry.lock().unwrap().remove(id).is_some())
    }

    /// Rebroadcast the full registry for a newly ready window.
    ///
    /// Only the authoritative context publishes; elsewhere this is a
    /// no-op.
    pub fn renderer_ready(&self) {
        if let Some(publisher) = &self.publisher {
            let registry = self.registry.lock().unwrap();
            publisher.renderer_ready(&registry);
        }
    }

    /// Record the currently connected remote targets.
    ///
    /// A changed set rebroadcasts the registry; an unchanged set does
    /// nothing. Only the authoritative context publishes.
    pub fn set_remote_targets(&self, targets: Vec<String>) {
        if let Some(publisher) = &self.publisher {
            let registry = self.registry.lock().unwrap();
            publisher.set_remote_targets(&registry, targets);
        }
    }

    /// Observe registry changes in this process.
    pub fn subscribe(&self, observer: Arc<dyn RegistryObserver>) {
        self.registry.lock().unwrap().subscribe(observer);
    }

    pub fn role(&self) -> ProcessRole {
        self.role
    }

    /// Descriptors currently known to this process, in insertion order.
    pub fn extensions(&self) -> Vec<InstalledExtension> {
        self.registry.lock().unwrap().snapshot()
    }

    pub fn extension_count(&self) -> usize {
        self.registry.lock().unwrap().len()
    }

    /// Whether a live instance exists for this id in this process.
    pub fn has_instance(&self, id: &ExtensionId) -> bool {
        self.loader.has_instance(id)
    }

    pub fn instance_count(&self) -> usize {
        self.loader.instance_count()
    }

    /// Handle to the broadcast bus this context publishes or listens on.
    pub fn bus(&self) -> Arc<dyn MessageBus> {
        self.bus.clone()
    }
}
