//! Target-set synthesis.
//!
//! Expands a product name and a handful of options into a conventionally
//! named set of targets:
//!
//! - application project: `Name`, `NameTests`
//! - framework project: `Name`, `NameTests`
//! - framework with demo: `Name`, `NameTests`, `NameDemoApp`, `NameDemoAppTests`
//!
//! Every function here is pure. Names are a caller precondition: they must be
//! non-empty and are otherwise used verbatim.

use tracing::debug;

use crate::core::dependency::DependencyRef;
use crate::core::info_plist::{InfoManifest, PlistEntries};
use crate::core::platform::{Platform, DEFAULT_DEPLOYMENT_VERSION};
use crate::core::project::ProjectDescription;
use crate::core::target::{TargetDescription, DEFAULT_SOURCES};

/// Suffix of the demo application generated next to a framework.
pub const DEMO_APP_SUFFIX: &str = "DemoApp";

/// Name of the demo application for framework `name`.
pub fn demo_app_name(name: &str) -> String {
    format!("{}{}", name, DEMO_APP_SUFFIX)
}

/// Options for [`build_application_project`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppOptions {
    pub platform: Platform,

    /// Minimum OS version (default `16.0`)
    pub deployment_version: String,

    /// Info manifest of the app target (default: host default)
    pub info_plist: InfoManifest,

    /// Dependencies of the app target (default: none)
    pub dependencies: Vec<DependencyRef>,
}

impl AppOptions {
    pub fn new(platform: Platform, deployment_version: impl Into<String>) -> Self {
        AppOptions {
            platform,
            deployment_version: deployment_version.into(),
            info_plist: InfoManifest::Default,
            dependencies: Vec::new(),
        }
    }

    pub fn with_info_plist(mut self, info_plist: InfoManifest) -> Self {
        self.info_plist = info_plist;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<DependencyRef>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::new(Platform::default(), DEFAULT_DEPLOYMENT_VERSION)
    }
}

/// Options for [`build_framework_project`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkOptions {
    pub platform: Platform,

    /// Minimum OS version (default `16.0`)
    pub deployment_version: String,

    /// Accepted for parity with the application builder. The framework
    /// target always uses `Sources/**`.
    pub sources: Vec<String>,

    /// Accepted for parity with the application builder. The framework
    /// target always carries an empty resource list.
    pub resources: Option<Vec<String>>,

    /// Dependencies of the framework target (default: none)
    pub dependencies: Vec<DependencyRef>,
}

impl FrameworkOptions {
    pub fn new(platform: Platform, deployment_version: impl Into<String>) -> Self {
        FrameworkOptions {
            platform,
            deployment_version: deployment_version.into(),
            sources: vec![DEFAULT_SOURCES.to_string()],
            resources: None,
            dependencies: Vec::new(),
        }
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
}

impl Default for FrameworkOptions {
    fn default() -> Self {
        Self::new(Platform::default(), DEFAULT_DEPLOYMENT_VERSION)
    }
}

/// Options for [`build_framework_with_demo_project`].
#[derive(Debug, Clone, PartialEq)]
pub struct DemoFrameworkOptions {
    pub platform: Platform,

    /// Minimum OS version (default `16.0`)
    pub deployment_version: String,

    /// Accepted for parity with the application builder. Not applied to any
    /// generated target.
    pub info_plist: PlistEntries,

    /// Dependencies of the framework target (default: none). The demo app
    /// always depends on the framework alone.
    pub dependencies: Vec<DependencyRef>,
}

impl DemoFrameworkOptions {
    pub fn new(platform: Platform, deployment_version: impl Into<String>) -> Self {
        DemoFrameworkOptions {
            platform,
            deployment_version: deployment_version.into(),
            info_plist: PlistEntries::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_info_plist(mut self, info_plist: PlistEntries) -> Self {
        self.info_plist = info_plist;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<DependencyRef>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

impl Default for DemoFrameworkOptions {
    fn default() -> Self {
        Self::new(Platform::default(), DEFAULT_DEPLOYMENT_VERSION)
    }
}

/// Inputs of [`make_application_target_pair`].
#[derive(Debug, Clone)]
pub(crate) struct AppTargetSpec<'a> {
    pub name: &'a str,
    pub platform: Platform,
    pub deployment_version: &'a str,
    pub info_plist: InfoManifest,
    pub sources: Vec<String>,
    pub resources: Option<Vec<String>>,
    pub dependencies: Vec<DependencyRef>,
}

impl<'a> AppTargetSpec<'a> {
    /// Spec with default manifest, default sources and no resources.
    pub fn new(name: &'a str, platform: Platform, deployment_version: &'a str) -> Self {
        AppTargetSpec {
            name,
            platform,
            deployment_version,
            info_plist: InfoManifest::Default,
            sources: vec![DEFAULT_SOURCES.to_string()],
            resources: None,
            dependencies: Vec::new(),
        }
    }
}

/// Project with an application target and its unit test target.
pub fn build_application_project(name: &str, opts: &AppOptions) -> ProjectDescription {
    let spec = AppTargetSpec {
        info_plist: opts.info_plist.clone(),
        dependencies: opts.dependencies.clone(),
        ..AppTargetSpec::new(name, opts.platform, &opts.deployment_version)
    };
    let targets = make_application_target_pair(spec);

    debug!(project = name, targets = targets.len(), "synthesized application project");
    ProjectDescription::new(name, Vec::from(targets))
}

/// Project with a framework, its tests, a demo app wired to the framework,
/// and the demo app's tests.
pub fn build_framework_with_demo_project(
    name: &str,
    opts: &DemoFrameworkOptions,
) -> ProjectDescription {
    let mut targets = Vec::from(make_framework_target_pair(
        name,
        opts.platform,
        &opts.deployment_version,
        opts.dependencies.clone(),
    ));

    let demo_name = demo_app_name(name);
    let demo = AppTargetSpec {
        dependencies: vec![DependencyRef::target(name)],
        ..AppTargetSpec::new(&demo_name, opts.platform, &opts.deployment_version)
    };
    targets.extend(make_application_target_pair(demo));

    debug!(project = name, targets = targets.len(), "synthesized framework project with demo app");
    ProjectDescription::new(name, targets)
}

/// Project with a framework target and its unit test target.
pub fn build_framework_project(name: &str, opts: &FrameworkOptions) -> ProjectDescription {
    let targets = make_framework_target_pair(
        name,
        opts.platform,
        &opts.deployment_version,
        opts.dependencies.clone(),
    );

    debug!(project = name, targets = targets.len(), "synthesized framework project");
    ProjectDescription::new(name, Vec::from(targets))
}

/// A framework target with default sources and its unit test target.
pub(crate) fn make_framework_target_pair(
    name: &str,
    platform: Platform,
    deployment_version: &str,
    dependencies: Vec<DependencyRef>,
) -> [TargetDescription; 2] {
    let framework = TargetDescription::framework(name, platform)
        .with_deployment_version(deployment_version)
        .with_resources(Some(Vec::new()))
        .with_dependencies(dependencies);

    let tests = TargetDescription::unit_tests_for(&framework).with_resources(Some(Vec::new()));

    [framework, tests]
}

/// An application target and its unit test target. The test target depends
/// on the application only, never on the caller's dependencies.
pub(crate) fn make_application_target_pair(spec: AppTargetSpec<'_>) -> [TargetDescription; 2] {
    let app = TargetDescription::app(spec.name, spec.platform)
        .with_deployment_version(spec.deployment_version)
        .with_info_plist(spec.info_plist)
        .with_sources(spec.sources)
        .with_resources(spec.resources)
        .with_dependencies(spec.dependencies);

    let tests = TargetDescription::unit_tests_for(&app);

    [app, tests]
}
