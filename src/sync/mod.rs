//! Synchronization Module
//!
//! Keeps replica registries consistent with the authoritative one:
//! - Snapshot wire format
//! - Broadcast bus abstraction
//! - Snapshot publisher (authoritative side)
//! - Snapshot receiver (replica side)

pub mod bus;
pub mod publisher;
pub mod receiver;
pub mod snapshot;

pub use bus::{BusHandler, LocalBus, MessageBus};
pub use publisher::SnapshotPublisher;
pub use receiver::SnapshotReceiver;
pub use snapshot::{RegistrySnapshot, SyncConfig, EXTENSIONS_LOADED_CHANNEL};
