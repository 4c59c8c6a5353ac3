//! Runtime Module
//!
//! Per-process lifecycle of extensions:
//! - Instance trait and per-process instance table
//! - Process roles
//! - Role-specific contribution registrars
//! - Reactive autoload loop
//! - Process context wiring it all together

pub mod context;
pub mod instance;
pub mod loader;
pub mod registrar;
pub mod role;

pub use context::ProcessContext;
pub use instance::{ExtensionInstance, InstanceTable, NullExtension};
pub use loader::ExtensionLoader;
pub use registrar::{
    ClusterManagerRegistrar, ClusterRegistrar, ContributionRegistrar, MainRegistrar,
};
pub use role::ProcessRole;
