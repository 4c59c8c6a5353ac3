//! Process roles.

use crate::modules::EntryKind;
use std::fmt;

/// The role a process plays in the extension runtime.
///
/// Exactly one process runs as [`ProcessRole::Main`]; it owns the
/// authoritative registry. Every window process runs as one of the two
/// replica roles and receives registry contents over the sync channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessRole {
    /// The authoritative background process.
    Main,
    /// The window hosting the cluster manager UI.
    ClusterManager,
    /// A window scoped to a single cluster.
    Cluster,
}

impl ProcessRole {
    /// Which manifest entry point this role loads.
    pub fn entry_point(&self) -> EntryKind {
        match self {
            ProcessRole::Main => EntryKind::Main,
            ProcessRole::ClusterManager | ProcessRole::Cluster => EntryKind::Renderer,
        }
    }

    /// Whether this role owns the authoritative registry.
    pub fn is_authoritative(&self) -> bool {
        matches!(self, ProcessRole::Main)
    }
}

impl fmt::Display for ProcessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessRole::Main => "main",
            ProcessRole::ClusterManager => "cluster-manager",
            ProcessRole::Cluster => "cluster",
        };
        write!(f, "{}", name)
    }
}
