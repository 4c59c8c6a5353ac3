//! Common types used across the extension runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Timestamp type used throughout.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Get current timestamp.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

/// Stable identity of an installed extension.
///
/// In practice this is the filesystem path to the extension's manifest,
/// so uniqueness is guaranteed by filesystem uniqueness. The id never
/// changes for the lifetime of a descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionId(String);

impl ExtensionId {
    /// Create an id from a string value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the id from a manifest path.
    pub fn from_manifest_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ExtensionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ExtensionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_manifest_path() {
        let id = ExtensionId::from_manifest_path(Path::new("/extensions/metrics/package.json"));
        assert_eq!(id.as_str(), "/extensions/metrics/package.json");
        assert_eq!(id, ExtensionId::new("/extensions/metrics/package.json"));
    }

    #[test]
    fn test_id_display() {
        let id = ExtensionId::new("/extensions/metrics/package.json");
        assert_eq!(format!("{}", id), "/extensions/metrics/package.json");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ExtensionId::new("/extensions/metrics/package.json");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"/extensions/metrics/package.json\"");
        assert_eq!(serde_json::from_str::<ExtensionId>(&json).unwrap(), id);
    }
}
