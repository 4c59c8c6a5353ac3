//! Extension manifest schema.
//!
//! Declares an extension's identity and where its process-specific entry
//! points live. Fields the runtime does not know about are kept as extra
//! metadata and handed to the instance constructor untouched.

use crate::core::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed extension manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// Extension name
    pub name: String,
    /// Version
    pub version: String,
    /// Description
    pub description: Option<String>,
    /// Entry point for the main process, relative to the manifest directory
    pub main: Option<String>,
    /// Entry point for renderer processes, relative to the manifest directory
    pub renderer: Option<String>,
    /// Remaining manifest fields, passed through to the instance constructor
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ExtensionManifest {
    /// Create a manifest with the required fields.
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            description: None,
            main: None,
            renderer: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the main-process entry point.
    pub fn with_main(mut self, entry: &str) -> Self {
        self.main = Some(entry.to_string());
        self
    }

    /// Set the renderer entry point.
    pub fn with_renderer(mut self, entry: &str) -> Self {
        self.renderer = Some(entry.to_string());
        self
    }

    /// Attach an extra metadata field.
    pub fn with_extra(mut self, key: &str, value: serde_json::Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
