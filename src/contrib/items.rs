//! Contribution item payloads.
//!
//! Plain data records describing what an extension contributes. Rendering
//! them is the host application's concern.

use serde::{Deserialize, Serialize};

/// Entry contributed to the application menu (main process).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppMenuItem {
    /// Menu this entry attaches under
    pub parent_id: String,
    /// Displayed label
    pub label: String,
    /// Keyboard accelerator
    pub accelerator: Option<String>,
}

impl AppMenuItem {
    /// Create a menu entry.
    pub fn new(parent_id: &str, label: &str) -> Self {
        Self {
            parent_id: parent_id.to_string(),
            label: label.to_string(),
            accelerator: None,
        }
    }

    /// Set the keyboard accelerator.
    pub fn with_accelerator(mut self, accelerator: &str) -> Self {
        self.accelerator = Some(accelerator.to_string());
        self
    }
}

/// Page contributed to the application or to a cluster view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageRegistration {
    /// Page identifier, unique within the contributing extension
    pub id: String,
    /// Displayed title
    pub title: String,
    /// Route the page is mounted at
    pub route: String,
}

impl PageRegistration {
    /// Create a page registration.
    pub fn new(id: &str, title: &str, route: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            route: route.to_string(),
        }
    }
}

/// Preference pane contributed to the application settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRegistration {
    /// Preference identifier
    pub id: String,
    /// Displayed title
    pub title: String,
}

impl PreferenceRegistration {
    /// Create a preference registration.
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

/// Feature toggled per cluster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterFeatureRegistration {
    /// Feature name
    pub name: String,
    /// Description
    pub description: Option<String>,
}

impl ClusterFeatureRegistration {
    /// Create a cluster feature registration.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
        }
    }

    /// Set description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Item shown in the status bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusBarItem {
    /// Displayed text
    pub text: String,
}

impl StatusBarItem {
    /// Create a status bar item.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Context-menu entry for objects of a given kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KubeObjectMenuItem {
    /// Object kind the entry applies to
    pub kind: String,
    /// API versions the entry applies to
    #[serde(default)]
    pub api_versions: Vec<String>,
    /// Displayed label
    pub label: String,
}

impl KubeObjectMenuItem {
    /// Create a menu entry for an object kind.
    pub fn new(kind: &str, label: &str) -> Self {
        Self {
            kind: kind.to_string(),
            api_versions: Vec::new(),
            label: label.to_string(),
        }
    }

    /// Add an API version the entry applies to.
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_versions.push(api_version.to_string());
        self
    }
}

/// Detail panel for objects of a given kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KubeObjectDetailItem {
    /// Object kind the panel applies to
    pub kind: String,
    /// API versions the panel applies to
    #[serde(default)]
    pub api_versions: Vec<String>,
    /// Ordering priority among panels for the same kind
    pub priority: Option<i32>,
}

impl KubeObjectDetailItem {
    /// Create a detail panel for an object kind.
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            api_versions: Vec::new(),
            priority: None,
        }
    }

    /// Add an API version the panel applies to.
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_versions.push(api_version.to_string());
        self
    }

    /// Set the ordering priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}
