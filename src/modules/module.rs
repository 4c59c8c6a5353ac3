//! Extension module interface.

use crate::core::{ExtensionId, Result};
use crate::manifest::{ExtensionManifest, InstalledExtension};
use crate::runtime::instance::ExtensionInstance;
use std::path::PathBuf;

/// Everything an instance constructor receives from its descriptor.
#[derive(Clone, Debug)]
pub struct InstanceInit {
    /// Stable extension identity
    pub id: ExtensionId,
    /// Path to the manifest file
    pub manifest_path: PathBuf,
    /// Parsed manifest, including extra metadata fields
    pub manifest: ExtensionManifest,
}

impl InstanceInit {
    /// Build construction input from a descriptor.
    pub fn for_extension(extension: &InstalledExtension) -> Self {
        Self {
            id: extension.id.clone(),
            manifest_path: extension.manifest_path.clone(),
            manifest: extension.manifest.clone(),
        }
    }
}

/// A loaded extension code module.
///
/// One module produces the process-local instance of its extension.
pub trait ExtensionModule: Send + Sync {
    /// Construct the role-specific instance.
    fn instantiate(&self, init: InstanceInit) -> Result<Box<dyn ExtensionInstance>>;
}

/// Module producing instances from a factory closure.
pub struct FactoryModule {
    factory: Box<dyn Fn(InstanceInit) -> Result<Box<dyn ExtensionInstance>> + Send + Sync>,
}

impl FactoryModule {
    /// Create a module from an instance factory.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(InstanceInit) -> Result<Box<dyn ExtensionInstance>> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
        }
    }
}

impl ExtensionModule for FactoryModule {
    fn instantiate(&self, init: InstanceInit) -> Result<Box<dyn ExtensionInstance>> {
        (self.factory)(init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::instance::NullExtension;

    #[test]
    fn test_factory_module_passes_init_through() {
        let module = FactoryModule::new(|init| {
            assert_eq!(init.manifest.name, "metrics");
            assert_eq!(init.id.as_str(), "/e/metrics/package.json");
            Ok(Box::new(NullExtension::new()))
        });

        let extension = InstalledExtension::new(
            "/e/metrics/package.json",
            ExtensionManifest::new("metrics", "2.1.0"),
        );
        module
            .instantiate(InstanceInit::for_extension(&extension))
            .unwrap();
    }
}
