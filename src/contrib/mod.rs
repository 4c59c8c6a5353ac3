//! Contribution Module
//!
//! What extensions contribute to the application:
//! - Contribution item payloads (menus, pages, preferences, ...)
//! - Capability registries collecting items per contributing extension

pub mod items;
pub mod registry;

pub use items::{
    AppMenuItem, ClusterFeatureRegistration, KubeObjectDetailItem, KubeObjectMenuItem,
    PageRegistration, PreferenceRegistration, StatusBarItem,
};
pub use registry::{CapabilityRegistry, ItemRegistry, OwnedItem};
