//! Intra-project target dependencies.
//!
//! A DependencyRef names another target in the same project. It is a lookup
//! key only: the referenced target is resolved by the host build tool.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to another target by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DependencyRef {
    /// Name of the referenced target
    target: String,
}

impl DependencyRef {
    /// Reference the target called `name`.
    pub fn target(name: impl Into<String>) -> Self {
        DependencyRef {
            target: name.into(),
        }
    }

    /// Name of the referenced target.
    pub fn name(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target)
    }
}

impl From<&str> for DependencyRef {
    fn from(name: &str) -> Self {
        DependencyRef::target(name)
    }
}

impl From<String> for DependencyRef {
    fn from(name: String) -> Self {
        DependencyRef::target(name)
    }
}

/// Build a dependency list from target names.
pub fn targets<I, S>(names: I) -> Vec<DependencyRef>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(DependencyRef::target).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_ref_name() {
        let dep = DependencyRef::target("Analytics");
        assert_eq!(dep.name(), "Analytics");
        assert_eq!(dep.to_string(), "Analytics");
    }

    #[test]
    fn test_targets_preserves_order() {
        let deps = targets(["Networking", "Analytics"]);
        let names: Vec<_> = deps.iter().map(DependencyRef::name).collect();
        assert_eq!(names, vec!["Networking", "Analytics"]);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&DependencyRef::target("Core")).unwrap();
        assert_eq!(json, r#"{"target":"Core"}"#);
    }
}
