//! Dynamic library module loading.
//!
//! Extensions compiled as `cdylib` crates export a single entry symbol
//! through [`declare_extension_module!`]. The loader opens the library,
//! resolves that symbol and turns the returned raw module into a shared
//! handle. Libraries stay open for the lifetime of the loader so module
//! code never unloads while handles are live.

use crate::core::{Error, Result};
use crate::modules::module::ExtensionModule;
use libloading::{Library, Symbol};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Symbol every extension library must export.
pub const ENTRY_SYMBOL: &[u8] = b"skylight_extension_module\0";

/// Signature of the exported entry symbol.
pub type ModuleEntry = unsafe extern "C" fn() -> *mut dyn ExtensionModule;

struct LoadedLibrary {
    module: Arc<dyn ExtensionModule>,
    /// Keeps the library mapped while the module handle is in use.
    _lib: Library,
}

/// Loader that opens extension modules from shared libraries on disk.
pub struct DylibModuleLoader {
    cache: Mutex<HashMap<PathBuf, LoadedLibrary>>,
}

impl DylibModuleLoader {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for DylibModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl super::loader::ModuleLoader for DylibModuleLoader {
    fn load(&self, path: &Path) -> Result<Arc<dyn ExtensionModule>> {
        let mut cache = self.cache.lock().unwrap();
        if let Some(loaded) = cache.get(path) {
            return Ok(loaded.module.clone());
        }

        let lib = unsafe { Library::new(path) }.map_err(|e| Error::ModuleLoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let module: Arc<dyn ExtensionModule> = {
            let entry: Symbol<ModuleEntry> =
                unsafe { lib.get(ENTRY_SYMBOL) }.map_err(|e| Error::ModuleLoadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            let raw = unsafe { entry() };
            if raw.is_null() {
                return Err(Error::ModuleLoadFailed {
                    path: path.display().to_string(),
                    reason: "entry symbol returned null".to_string(),
                });
            }
            Arc::from(unsafe { Box::from_raw(raw) })
        };

        cache.insert(
            path.to_path_buf(),
            LoadedLibrary {
                module: module.clone(),
                _lib: lib,
            },
        );
        Ok(module)
    }
}

/// Export the entry symbol for an extension library.
///
/// The expression is evaluated once per load and boxed behind the module
/// trait. Pair this with a `cdylib` crate type:
///
/// ```ignore
/// skylight_extensions::declare_extension_module!(MyModule::new());
/// ```
#[macro_export]
macro_rules! declare_extension_module {
    ($ctor:expr) => {
        #[no_mangle]
        #[allow(improper_ctypes_definitions)]
        pub extern "C" fn skylight_extension_module(
        ) -> *mut dyn $crate::modules::ExtensionModule {
            let module: Box<dyn $crate::modules::ExtensionModule> = Box::new($ctor);
            Box::into_raw(module)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ExtensionManifest, InstalledExtension};
    use crate::modules::loader::ModuleLoader;
    use crate::modules::module::{FactoryModule, InstanceInit};
    use crate::runtime::instance::NullExtension;
    use std::io::Write;

    crate::declare_extension_module!(FactoryModule::new(|_init| {
        Ok(Box::new(NullExtension::new()))
    }));

    #[test]
    fn test_entry_symbol_produces_a_working_module() {
        // Same raw round trip the loader performs after resolving the
        // symbol from a library.
        let raw = skylight_extension_module();
        assert!(!raw.is_null());
        let module: Box<dyn ExtensionModule> = unsafe { Box::from_raw(raw) };

        let extension = InstalledExtension::new(
            "/e/a/package.json",
            ExtensionManifest::new("a", "1.0.0"),
        );
        assert!(module
            .instantiate(InstanceInit::for_extension(&extension))
            .is_ok());
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let loader = DylibModuleLoader::new();
        match loader.load(Path::new("/no/such/library.so")) {
            Err(Error::ModuleLoadFailed { path, .. }) => {
                assert_eq!(path, "/no/such/library.so");
            }
            _ => panic!("expected a module load failure"),
        }
    }

    #[test]
    fn test_load_rejects_non_library_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-library.so");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"plain text").unwrap();

        let loader = DylibModuleLoader::new();
        assert!(matches!(
            loader.load(&path),
            Err(Error::ModuleLoadFailed { .. })
        ));
    }
}
