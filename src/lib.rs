//! # Skylight Extensions - Extension Loading and Lifecycle Runtime
//!
//! The extension runtime for the Skylight desktop app:
//! - **Registry**: authoritative and replica maps of installed extensions
//! - **Sync**: registry snapshot broadcasts keeping every process consistent
//! - **Runtime**: per-process instantiate/enable/disable lifecycle
//! - **Modules**: entry-point resolution and dynamic code loading
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skylight_extensions::contrib::{AppMenuItem, ItemRegistry};
//! use skylight_extensions::manifest::InstalledExtension;
//! use skylight_extensions::modules::StaticModuleLoader;
//! use skylight_extensions::runtime::{MainRegistrar, ProcessContext};
//! use skylight_extensions::sync::LocalBus;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     skylight_extensions::logging::init();
//!
//!     // Wire the authoritative main process
//!     let bus = Arc::new(LocalBus::new());
//!     let modules = Arc::new(StaticModuleLoader::new());
//!     let menus: Arc<ItemRegistry<AppMenuItem>> = Arc::new(ItemRegistry::new());
//!     let ctx = ProcessContext::main(bus, modules, Arc::new(MainRegistrar::new(menus)));
//!
//!     // Install an extension; replicas hear about it over the bus
//!     let extension = InstalledExtension::load("/extensions/hello/package.json").unwrap();
//!     ctx.add_extension(extension).unwrap();
//! }
//! ```

pub mod contrib;
pub mod core;
pub mod logging;
pub mod manifest;
pub mod modules;
pub mod registry;
pub mod runtime;
pub mod sync;

pub use crate::core::error::{Error, Result};
pub use crate::core::types::ExtensionId;
