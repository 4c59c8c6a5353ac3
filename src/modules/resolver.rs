//! Entry-point resolution.

use crate::manifest::InstalledExtension;
use crate::modules::loader::ModuleLoader;
use crate::modules::module::ExtensionModule;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

/// Which manifest entry point a process consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// The `main` field, consumed by the authoritative process.
    Main,
    /// The `renderer` field, consumed by window processes.
    Renderer,
}

/// Resolves installed extensions to loadable modules for one process.
pub struct ModuleResolver {
    loader: Arc<dyn ModuleLoader>,
    entry: EntryKind,
}

impl ModuleResolver {
    pub fn new(loader: Arc<dyn ModuleLoader>, entry: EntryKind) -> Self {
        Self { loader, entry }
    }

    /// Absolute entry-point path, if the manifest declares one for this process.
    pub fn entry_path(&self, extension: &InstalledExtension) -> Option<PathBuf> {
        let relative = match self.entry {
            EntryKind::Main => extension.manifest.main.as_ref()?,
            EntryKind::Renderer => extension.manifest.renderer.as_ref()?,
        };
        Some(extension.manifest_dir().join(relative))
    }

    /// Resolve an extension to its module for this process.
    ///
    /// Returns `None` when the manifest has no entry point for this process.
    /// Load failures also yield `None`; they are logged and leave other
    /// extensions in the same pass untouched.
    pub fn resolve(&self, extension: &InstalledExtension) -> Option<Arc<dyn ExtensionModule>> {
        let path = self.entry_path(extension)?;
        match self.loader.load(&path) {
            Ok(module) => Some(module),
            Err(e) => {
                error!("failed to load module for {}: {}", extension.id, e);
                None
            }
        }
    }
}
