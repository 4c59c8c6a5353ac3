//! Role-specific contribution registration.
//!
//! Each process role wires a different slice of an instance's
//! contributions into its capability registries. The registrars are the
//! only role-specific code in the lifecycle; the autoload loop itself is
//! identical across roles.

use crate::contrib::{
    AppMenuItem, CapabilityRegistry, ClusterFeatureRegistration, KubeObjectDetailItem,
    KubeObjectMenuItem, PageRegistration, PreferenceRegistration, StatusBarItem,
};
use crate::core::ExtensionId;
use crate::runtime::instance::ExtensionInstance;
use std::sync::Arc;

/// Registration callback invoked once per enabled instance.
pub trait ContributionRegistrar: Send + Sync {
    /// Attach the instance's contributions under the owner's identity.
    fn register(&self, owner: &ExtensionId, instance: &dyn ExtensionInstance);
}

/// Registrar for the main process: application menu entries only.
pub struct MainRegistrar {
    app_menus: Arc<dyn CapabilityRegistry<AppMenuItem>>,
}

impl MainRegistrar {
    pub fn new(app_menus: Arc<dyn CapabilityRegistry<AppMenuItem>>) -> Self {
        Self { app_menus }
    }
}

impl ContributionRegistrar for MainRegistrar {
    fn register(&self, owner: &ExtensionId, instance: &dyn ExtensionInstance) {
        self.app_menus.register(instance.app_menu_items(), owner);
    }
}

/// Registrar for the cluster manager window: global pages, preferences,
/// cluster features and status bar entries.
pub struct ClusterManagerRegistrar {
    global_pages: Arc<dyn CapabilityRegistry<PageRegistration>>,
    app_preferences: Arc<dyn CapabilityRegistry<PreferenceRegistration>>,
    cluster_features: Arc<dyn CapabilityRegistry<ClusterFeatureRegistration>>,
    status_bar: Arc<dyn CapabilityRegistry<StatusBarItem>>,
}

impl ClusterManagerRegistrar {
    pub fn new(
        global_pages: Arc<dyn CapabilityRegistry<PageRegistration>>,
        app_preferences: Arc<dyn CapabilityRegistry<PreferenceRegistration>>,
        cluster_features: Arc<dyn CapabilityRegistry<ClusterFeatureRegistration>>,
        status_bar: Arc<dyn CapabilityRegistry<StatusBarItem>>,
    ) -> Self {
        Self {
            global_pages,
            app_preferences,
            cluster_features,
            status_bar,
        }
    }
}

impl ContributionRegistrar for ClusterManagerRegistrar {
    fn register(&self, owner: &ExtensionId, instance: &dyn ExtensionInstance) {
        self.global_pages.register(instance.global_pages(), owner);
        self.app_preferences.register(instance.app_preferences(), owner);
        self.cluster_features.register(instance.cluster_features(), owner);
        self.status_bar.register(instance.status_bar_items(), owner);
    }
}

/// Registrar for a cluster window: cluster pages, object context menus
/// and object detail panels.
pub struct ClusterRegistrar {
    cluster_pages: Arc<dyn CapabilityRegistry<PageRegistration>>,
    object_menus: Arc<dyn CapabilityRegistry<KubeObjectMenuItem>>,
    object_details: Arc<dyn CapabilityRegistry<KubeObjectDetailItem>>,
}

impl ClusterRegistrar {
    pub fn new(
        cluster_pages: Arc<dyn CapabilityRegistry<PageRegistration>>,
        object_menus: Arc<dyn CapabilityRegistry<KubeObjectMenuItem>>,
        object_details: Arc<dyn CapabilityRegistry<KubeObjectDetailItem>>,
    ) -> Self {
        Self {
            cluster_pages,
            object_menus,
            object_details,
        }
    }
}

impl ContributionRegistrar for ClusterRegistrar {
    fn register(&self, owner: &ExtensionId, instance: &dyn ExtensionInstance) {
        self.cluster_pages.register(instance.cluster_pages(), owner);
        self.object_menus.register(instance.kube_object_menu_items(), owner);
        self.object_details
            .register(instance.kube_object_detail_items(), owner);
    }
}
