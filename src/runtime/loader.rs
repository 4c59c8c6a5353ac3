//! Reactive extension loading.
//!
//! One loader runs per process. It reacts to every registry change by
//! walking the registry in stored order and turning descriptors without
//! a live instance into enabled, registered instances.

use crate::core::{ExtensionId, Result};
use crate::modules::{InstanceInit, ModuleResolver};
use crate::registry::{ExtensionRegistry, RegistryObserver};
use crate::runtime::instance::InstanceTable;
use crate::runtime::registrar::ContributionRegistrar;
use std::sync::Arc;
use tracing::{error, info};

/// Per-process lifecycle manager.
pub struct ExtensionLoader {
    instances: Arc<InstanceTable>,
    resolver: ModuleResolver,
    registrar: Arc<dyn ContributionRegistrar>,
}

impl ExtensionLoader {
    pub fn new(
        instances: Arc<InstanceTable>,
        resolver: ModuleResolver,
        registrar: Arc<dyn ContributionRegistrar>,
    ) -> Self {
        Self {
            instances,
            resolver,
            registrar,
        }
    }

    /// Run one load pass over the registry's current contents.
    ///
    /// Descriptors are visited in stored order. Ids that already have an
    /// instance are skipped, as are descriptors whose module does not
    /// resolve. A failing enable still records its instance, then stops
    /// the pass; descriptors after it wait for the next registry change.
    pub fn autoload(&self, registry: &ExtensionRegistry) -> Result<()> {
        for (id, extension) in registry.iter() {
            if self.instances.contains(id) {
                continue;
            }
            let module = match self.resolver.resolve(extension) {
                Some(module) => module,
                None => continue,
            };
            let instance = module.instantiate(InstanceInit::for_extension(extension))?;
            match instance.enable() {
                Ok(()) => {
                    self.registrar.register(id, instance.as_ref());
                    self.instances.insert(id.clone(), instance);
                    info!("extension {} enabled", id);
                }
                Err(e) => {
                    // Recorded despite the failure, so the id reads as
                    // instantiated and is never retried.
                    self.instances.insert(id.clone(), instance);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Whether a live instance is recorded for this id.
    pub fn has_instance(&self, id: &ExtensionId) -> bool {
        self.instances.contains(id)
    }

    /// Number of live instances in this process.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

impl RegistryObserver for ExtensionLoader {
    fn registry_changed(&self, registry: &ExtensionRegistry) {
        if let Err(e) = self.autoload(registry) {
            error!("extension load pass aborted: {}", e);
        }
    }
}
