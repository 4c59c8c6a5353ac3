//! Registry change observation.

use crate::registry::registry::ExtensionRegistry;

/// Observer notified after every registry mutation.
///
/// Dispatch is synchronous relative to the mutating call, so observers see
/// each change before the mutator returns. The registry is borrowed for the
/// duration of the callback; observers must read it through the given
/// reference rather than any outer handle.
pub trait RegistryObserver: Send + Sync {
    /// React to a mutation of the registry.
    fn registry_changed(&self, registry: &ExtensionRegistry);
}
