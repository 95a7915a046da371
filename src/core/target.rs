//! Target descriptions.
//!
//! A TargetDescription is one buildable unit (application, framework or unit
//! test bundle) handed to the host build tool. Targets are plain values: they
//! are built once, never mutated afterwards, and compare structurally.

use serde::{Deserialize, Serialize};

use crate::core::dependency::DependencyRef;
use crate::core::info_plist::InfoManifest;
use crate::core::platform::{DeploymentTarget, Platform};
use crate::core::project::bundle_identifier;

/// Directory holding application and framework sources.
pub const SOURCES_DIR: &str = "Sources";

/// Directory holding unit test sources.
pub const TESTS_DIR: &str = "Tests";

/// Default source globs for application and framework targets.
pub const DEFAULT_SOURCES: &str = "Sources/**";

/// Default source globs for unit test targets.
pub const DEFAULT_TEST_SOURCES: &str = "Tests/**";

/// Suffix appended to a target name to form its test target name.
pub const TESTS_SUFFIX: &str = "Tests";

/// The kind of product a target builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductKind {
    /// Application bundle
    #[serde(alias = "application")]
    App,

    /// Framework bundle
    Framework,

    /// Unit test bundle
    #[serde(alias = "unit-tests")]
    UnitTests,
}

impl ProductKind {
    pub fn is_test(&self) -> bool {
        matches!(self, ProductKind::UnitTests)
    }

    /// Default source globs for this product kind.
    pub fn default_sources(&self) -> Vec<String> {
        match self {
            ProductKind::UnitTests => vec![DEFAULT_TEST_SOURCES.to_string()],
            ProductKind::App | ProductKind::Framework => vec![DEFAULT_SOURCES.to_string()],
        }
    }
}

/// Name of the unit test target paired with `name`.
pub fn tests_name(name: &str) -> String {
    format!("{}{}", name, TESTS_SUFFIX)
}

/// A buildable target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescription {
    /// Target name
    pub name: String,

    pub platform: Platform,

    /// What kind of bundle to produce
    pub product: ProductKind,

    /// Always `<organization>.<name>`
    pub bundle_id: String,

    /// Minimum OS version (test targets inherit from their host and carry none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_target: Option<DeploymentTarget>,

    #[serde(default)]
    pub info_plist: InfoManifest,

    /// Source file patterns (globs)
    pub sources: Vec<String>,

    /// Resource file patterns (globs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,

    /// Targets this one depends on, by name
    #[serde(default)]
    pub dependencies: Vec<DependencyRef>,
}

impl TargetDescription {
    /// Create a target with the conventional bundle id and default sources
    /// for its product kind.
    pub fn new(name: impl Into<String>, platform: Platform, product: ProductKind) -> Self {
        let name = name.into();
        TargetDescription {
            bundle_id: bundle_identifier(&name),
            name,
            platform,
            product,
            deployment_target: None,
            info_plist: InfoManifest::Default,
            sources: product.default_sources(),
            resources: None,
            dependencies: Vec::new(),
        }
    }

    /// Create a new application target.
    pub fn app(name: impl Into<String>, platform: Platform) -> Self {
        Self::new(name, platform, ProductKind::App)
    }

    /// Create a new framework target.
    pub fn framework(name: impl Into<String>, platform: Platform) -> Self {
        Self::new(name, platform, ProductKind::Framework)
    }

    /// Create the unit test target for `host`, depending only on it.
    pub fn unit_tests_for(host: &TargetDescription) -> Self {
        Self::new(tests_name(&host.name), host.platform, ProductKind::UnitTests)
            .with_dependencies(vec![DependencyRef::target(host.name.clone())])
    }

    pub fn with_deployment_version(mut self, version: impl Into<String>) -> Self {
        self.deployment_target = Some(DeploymentTarget::new(self.platform, version));
        self
    }

    pub fn with_info_plist(mut self, info_plist: InfoManifest) -> Self {
        self.info_plist = info_plist;
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_resources(mut self, resources: Option<Vec<String>>) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<DependencyRef>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn is_test(&self) -> bool {
        self.product.is_test()
    }

    /// Names of the targets this one depends on.
    pub fn dependency_names(&self) -> Vec<&str> {
        self.dependencies.iter().map(DependencyRef::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_target_defaults() {
        let t = TargetDescription::app("Checkout", Platform::Ios);

        assert_eq!(t.name, "Checkout");
        assert_eq!(t.product, ProductKind::App);
        assert_eq!(t.bundle_id, "ofo.io.Checkout");
        assert_eq!(t.sources, vec!["Sources/**"]);
        assert_eq!(t.resources, None);
        assert!(t.dependencies.is_empty());
        assert!(t.info_plist.is_default());
        assert!(t.deployment_target.is_none());
    }

    #[test]
    fn test_unit_tests_for_host() {
        let host = TargetDescription::framework("Analytics", Platform::Ios)
            .with_dependencies(vec!["Networking".into()]);
        let tests = TargetDescription::unit_tests_for(&host);

        assert_eq!(tests.name, "AnalyticsTests");
        assert_eq!(tests.bundle_id, "ofo.io.AnalyticsTests");
        assert_eq!(tests.product, ProductKind::UnitTests);
        assert_eq!(tests.sources, vec!["Tests/**"]);
        assert_eq!(tests.dependency_names(), vec!["Analytics"]);
    }

    #[test]
    fn test_with_deployment_version_uses_target_platform() {
        let t = TargetDescription::app("Mac", Platform::Macos).with_deployment_version("13.0");
        let dt = t.deployment_target.unwrap();
        assert_eq!(dt.platform, Platform::Macos);
        assert_eq!(dt.version, "13.0");
    }

    #[test]
    fn test_product_kind_serde() {
        assert_eq!(
            serde_json::to_string(&ProductKind::UnitTests).unwrap(),
            "\"unitTests\""
        );
        let parsed: ProductKind = serde_json::from_str("\"application\"").unwrap();
        assert_eq!(parsed, ProductKind::App);
    }

    #[test]
    fn test_default_globs_cover_conventional_dirs() {
        assert_eq!(DEFAULT_SOURCES, format!("{}/**", SOURCES_DIR));
        assert_eq!(DEFAULT_TEST_SOURCES, format!("{}/**", TESTS_DIR));
    }

    #[test]
    fn test_malformed_names_pass_through() {
        let t = TargetDescription::app("My App!", Platform::Ios);
        assert_eq!(t.bundle_id, "ofo.io.My App!");
    }
}
