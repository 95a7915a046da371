//! Project descriptions.

use serde::{Deserialize, Serialize};

use crate::core::target::TargetDescription;

/// Organization identifier shared by every generated project.
pub const ORGANIZATION_NAME: &str = "ofo.io";

/// Bundle identifier for a target called `name`.
///
/// Names are not validated; characters that are invalid in a bundle
/// identifier surface later in the host tool.
pub fn bundle_identifier(name: &str) -> String {
    format!("{}.{}", ORGANIZATION_NAME, name)
}

/// A project: a name plus an ordered list of targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescription {
    pub name: String,

    pub organization_name: String,

    /// Targets in insertion order
    pub targets: Vec<TargetDescription>,
}

impl ProjectDescription {
    /// Create a project under the shared organization.
    pub fn new(name: impl Into<String>, targets: Vec<TargetDescription>) -> Self {
        ProjectDescription {
            name: name.into(),
            organization_name: ORGANIZATION_NAME.to_string(),
            targets,
        }
    }

    /// Find a target by name.
    pub fn target(&self, name: &str) -> Option<&TargetDescription> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Target names in order.
    pub fn target_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }
}
