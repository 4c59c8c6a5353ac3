//! Module Loading Module
//!
//! Turns entry-point paths into loaded extension code:
//! - Extension module interface
//! - In-memory loader for bundled extensions and tests
//! - Dynamic-library loader for compiled extensions
//! - Role-aware entry-point resolution

pub mod dylib;
pub mod loader;
pub mod module;
pub mod resolver;

pub use dylib::{DylibModuleLoader, ENTRY_SYMBOL};
pub use loader::{ModuleLoader, StaticModuleLoader};
pub use module::{ExtensionModule, FactoryModule, InstanceInit};
pub use resolver::{EntryKind, ModuleResolver};
