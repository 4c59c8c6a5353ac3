//! Module loading.

use crate::core::{Error, Result};
use crate::modules::module::ExtensionModule;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Capability-scoped module loader.
///
/// Implementations decide how an entry-point path turns into code: read
/// from the filesystem, or looked up in an in-memory table for bundled
/// extensions and tests.
pub trait ModuleLoader: Send + Sync {
    /// Load the module at an entry-point path.
    fn load(&self, path: &Path) -> Result<Arc<dyn ExtensionModule>>;
}

/// In-memory loader backed by a path to module table.
pub struct StaticModuleLoader {
    modules: Mutex<HashMap<PathBuf, Arc<dyn ExtensionModule>>>,
}

impl StaticModuleLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self {
            modules: Mutex::new(HashMap::new()),
        }
    }

    /// Map an entry path to a module.
    pub fn register(&self, path: impl Into<PathBuf>, module: Arc<dyn ExtensionModule>) {
        self.modules.lock().unwrap().insert(path.into(), module);
    }
}

impl Default for StaticModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleLoader for StaticModuleLoader {
    fn load(&self, path: &Path) -> Result<Arc<dyn ExtensionModule>> {
        self.modules
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::ModuleLoadFailed {
                path: path.display().to_string(),
                reason: "no module registered for path".to_string(),
            })
    }
}
