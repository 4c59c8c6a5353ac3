//! Capability registries.
//!
//! Collectors for the items extensions contribute. Each item is attached
//! under the contributing extension's identity so the host can later remove
//! everything one extension brought in.

use crate::core::{now, ExtensionId, Timestamp};
use std::sync::Mutex;

/// Accepts ordered contributions from extension instances.
pub trait CapabilityRegistry<T>: Send + Sync {
    /// Attach items under the contributing extension's identity.
    fn register(&self, items: Vec<T>, owner: &ExtensionId);

    /// Detach every item contributed by an extension.
    fn deregister(&self, owner: &ExtensionId);
}

/// One registered contribution.
#[derive(Clone, Debug)]
pub struct OwnedItem<T> {
    /// Contributing extension
    pub owner: ExtensionId,
    /// Contributed payload
    pub item: T,
    /// Registration time
    pub registered_at: Timestamp,
}

/// Generic in-memory capability registry.
///
/// Items are kept in registration order across all owners.
pub struct ItemRegistry<T> {
    items: Mutex<Vec<OwnedItem<T>>>,
}

impl<T> ItemRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Number of registered items across all owners.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// Whether no items are registered.
    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap().is_empty()
    }
}

impl<T: Clone> ItemRegistry<T> {
    /// All registered items in registration order.
    pub fn items(&self) -> Vec<OwnedItem<T>> {
        self.items.lock().unwrap().clone()
    }

    /// Items contributed by one extension, in registration order.
    pub fn items_for(&self, owner: &ExtensionId) -> Vec<T> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .filter(|owned| owned.owner == *owner)
            .map(|owned| owned.item.clone())
            .collect()
    }
}

impl<T> Default for ItemRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> CapabilityRegistry<T> for ItemRegistry<T> {
    fn register(&self, items: Vec<T>, owner: &ExtensionId) {
        let mut stored = self.items.lock().unwrap();
        for item in items {
            stored.push(OwnedItem {
                owner: owner.clone(),
                item,
                registered_at: now(),
            });
        }
    }

    fn deregister(&self, owner: &ExtensionId) {
        self.items
            .lock()
            .unwrap()
            .retain(|owned| owned.owner != *owner);
    }
}
