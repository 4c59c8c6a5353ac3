//! Extension Manifest Module
//!
//! Declarative description of an installed extension:
//! - Manifest schema with process entry points
//! - Installed-extension descriptors

pub mod installed;
pub mod schema;

pub use installed::InstalledExtension;
pub use schema::ExtensionManifest;
