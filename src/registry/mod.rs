//! Extension Registry Module
//!
//! Per-process registry of installed extensions:
//! - Insertion-ordered descriptor map
//! - Synchronous change notification

pub mod observer;
pub mod registry;

pub use observer::RegistryObserver;
pub use registry::ExtensionRegistry;
