//! Installed-extension descriptors.

use crate::core::{Error, ExtensionId, Result};
use crate::manifest::schema::ExtensionManifest;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Descriptor for an installed extension.
///
/// Immutable once created. Records that an extension is known to exist,
/// independent of whether it is running anywhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstalledExtension {
    /// Stable extension identity, derived from the manifest path
    pub id: ExtensionId,
    /// Path to the manifest file
    pub manifest_path: PathBuf,
    /// Parsed manifest
    pub manifest: ExtensionManifest,
}

impl InstalledExtension {
    /// Create a descriptor from an in-memory manifest.
    pub fn new(manifest_path: impl Into<PathBuf>, manifest: ExtensionManifest) -> Self {
        let manifest_path = manifest_path.into();
        Self {
            id: ExtensionId::from_manifest_path(&manifest_path),
            manifest_path,
            manifest,
        }
    }

    /// Read and parse a manifest file into a descriptor.
    pub fn load(manifest_path: impl Into<PathBuf>) -> Result<Self> {
        let manifest_path = manifest_path.into();
        let raw = std::fs::read_to_string(&manifest_path).map_err(|err| Error::ManifestReadFailed {
            path: manifest_path.display().to_string(),
            source: err,
        })?;
        let manifest = serde_json::from_str(&raw).map_err(|err| Error::ManifestParseFailed {
            path: manifest_path.display().to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self::new(manifest_path, manifest))
    }

    /// Directory containing the manifest file.
    ///
    /// Entry-point paths in the manifest are resolved against this directory.
    pub fn manifest_dir(&self) -> &Path {
        self.manifest_path.parent().unwrap_or_else(|| Path::new(""))
    }
}
