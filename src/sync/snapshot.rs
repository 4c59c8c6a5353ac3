//! Registry snapshot wire format.

use crate::core::Result;
use crate::manifest::InstalledExtension;
use serde::{Deserialize, Serialize};

/// Well-known broadcast channel carrying registry snapshots.
pub const EXTENSIONS_LOADED_CHANNEL: &str = "extensions:loaded";

/// Configuration for the sync protocol.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Broadcast channel carrying registry snapshots
    pub channel: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            channel: EXTENSIONS_LOADED_CHANNEL.to_string(),
        }
    }
}

/// Ordered snapshot of a registry's descriptors.
///
/// Serializes as a bare array of descriptor records, fully materialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrySnapshot {
    /// Descriptors in registry order
    pub extensions: Vec<InstalledExtension>,
}

impl RegistrySnapshot {
    /// Create a snapshot from descriptors.
    pub fn new(extensions: Vec<InstalledExtension>) -> Self {
        Self { extensions }
    }

    /// Encode for the broadcast channel.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a broadcast payload.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ExtensionManifest;

    #[test]
    fn test_snapshot_roundtrip() {
        let manifest = ExtensionManifest::new("metrics", "2.1.0")
            .with_renderer("dist/renderer.so")
            .with_extra("publisher", serde_json::json!("skylight"));
        let snapshot = RegistrySnapshot::new(vec![InstalledExtension::new(
            "/extensions/metrics/package.json",
            manifest,
        )]);

        let decoded = RegistrySnapshot::decode(&snapshot.encode().unwrap()).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_snapshot_serializes_as_bare_array() {
        let snapshot = RegistrySnapshot::new(vec![InstalledExtension::new(
            "/e/a/package.json",
            ExtensionManifest::new("a", "1.0.0"),
        )]);

        let value: serde_json::Value =
            serde_json::from_slice(&snapshot.encode().unwrap()).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], serde_json::json!("/e/a/package.json"));
        assert_eq!(value[0]["manifest"]["name"], serde_json::json!("a"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(RegistrySnapshot::decode(b"{{{{").is_err());
    }

    #[test]
    fn test_default_channel_name() {
        assert_eq!(SyncConfig::default().channel, "extensions:loaded");
    }
}
