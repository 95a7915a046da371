//! Xcplan.toml manifest parsing and schema.
//!
//! A manifest names one project and the template used to expand it:
//!
//! ```toml
//! [project]
//! name = "Analytics"
//! template = "framework-with-demo"
//! platform = "iOS"
//! deployment-target = "16.0"
//! dependencies = ["Networking"]
//!
//! [project.info-plist]
//! CFBundleShortVersionString = "1.0"
//! ```
//!
//! Optional values left out of the manifest fall back to the project config
//! and then to built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::dependency::{self, DependencyRef};
use crate::core::info_plist::{InfoManifest, PlistEntries};
use crate::core::platform::{Platform, DEFAULT_DEPLOYMENT_VERSION};
use crate::core::project::ProjectDescription;
use crate::ops::templates::{
    build_application_project, build_framework_project, build_framework_with_demo_project,
    AppOptions, DemoFrameworkOptions, FrameworkOptions,
};
use crate::util::config::Defaults;

/// Canonical manifest file name.
pub const MANIFEST_NAME: &str = "Xcplan.toml";

/// Errors raised while reading or validating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not find `{}` in `{}` or any parent directory", MANIFEST_NAME, .dir.display())]
    NotFound { dir: PathBuf },

    #[error("project name must not be empty")]
    EmptyName,

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("`{template}` template does not accept `{field}`")]
    UnsupportedField {
        template: Template,
        field: &'static str,
    },
}

/// Which target set a manifest expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// Application plus its tests
    #[serde(alias = "application")]
    App,

    /// Framework plus its tests
    Framework,

    /// Framework, its tests, a demo app and the demo app's tests
    #[serde(alias = "demo")]
    FrameworkWithDemo,
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Template::App => "app",
            Template::Framework => "framework",
            Template::FrameworkWithDemo => "framework-with-demo",
        };
        f.write_str(s)
    }
}

/// Raw manifest as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    project: ProjectSection,
}

/// The `[project]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectSection {
    pub name: String,

    pub template: Template,

    #[serde(default)]
    pub platform: Option<Platform>,

    #[serde(default)]
    pub deployment_target: Option<String>,

    /// Source globs (framework template only, accepted but not applied)
    #[serde(default)]
    pub sources: Option<Vec<String>>,

    /// Resource globs (framework template only, accepted but not applied)
    #[serde(default)]
    pub resources: Option<Vec<String>>,

    /// Names of targets the main target depends on
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub info_plist: PlistEntries,
}

/// A validated manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    project: ProjectSection,
    path: PathBuf,
}

impl Manifest {
    /// Load a manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Ok(Self::parse(&content, path)?)
    }

    /// Parse manifest content.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let raw: RawManifest = toml::from_str(content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let project = raw.project;
        if project.name.trim().is_empty() {
            return Err(ManifestError::EmptyName);
        }

        let unsupported = match project.template {
            Template::Framework => (!project.info_plist.is_empty()).then_some("info-plist"),
            Template::App | Template::FrameworkWithDemo => {
                if project.sources.is_some() {
                    Some("sources")
                } else if project.resources.is_some() {
                    Some("resources")
                } else {
                    None
                }
            }
        };
        if let Some(field) = unsupported {
            return Err(ManifestError::UnsupportedField {
                template: project.template,
                field,
            });
        }

        Ok(Manifest {
            project,
            path: path.to_path_buf(),
        })
    }

    pub fn name(&self) -> &str {
        &self.project.name
    }

    pub fn template(&self) -> Template {
        self.project.template
    }

    pub fn project(&self) -> &ProjectSection {
        &self.project
    }

    /// Path the manifest was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Platform, falling back to `defaults` and then iOS.
    pub fn platform(&self, defaults: &Defaults) -> Platform {
        self.project
            .platform
            .or(defaults.platform)
            .unwrap_or_default()
    }

    /// Deployment version, falling back to `defaults` and then `16.0`.
    pub fn deployment_version(&self, defaults: &Defaults) -> String {
        self.project
            .deployment_target
            .clone()
            .or_else(|| defaults.deployment_target.clone())
            .unwrap_or_else(|| DEFAULT_DEPLOYMENT_VERSION.to_string())
    }

    fn dependencies(&self) -> Vec<DependencyRef> {
        dependency::targets(self.project.dependencies.iter().cloned())
    }

    /// Expand the manifest into a project description.
    pub fn to_project(&self, defaults: &Defaults) -> ProjectDescription {
        let platform = self.platform(defaults);
        let version = self.deployment_version(defaults);
        let name = self.name();

        match self.project.template {
            Template::App => {
                let opts = AppOptions::new(platform, version)
                    .with_info_plist(InfoManifest::extending(self.project.info_plist.clone()))
                    .with_dependencies(self.dependencies());
                build_application_project(name, &opts)
            }
            Template::Framework => {
                let mut opts = FrameworkOptions::new(platform, version)
                    .with_resources(self.project.resources.clone())
                    .with_dependencies(self.dependencies());
                if let Some(sources) = &self.project.sources {
                    opts = opts.with_sources(sources.clone());
                }
                build_framework_project(name, &opts)
            }
            Template::FrameworkWithDemo => {
                let opts = DemoFrameworkOptions::new(platform, version)
                    .with_info_plist(self.project.info_plist.clone())
                    .with_dependencies(self.dependencies());
                build_framework_with_demo_project(name, &opts)
            }
        }
    }
}

/// Find the manifest in `start` or the nearest parent directory.
pub fn find_manifest(start: &Path) -> Result<PathBuf, ManifestError> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            return Err(ManifestError::NotFound {
                dir: start.to_path_buf(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::info_plist::PlistValue;
    use crate::core::target::ProductKind;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<Manifest, ManifestError> {
        Manifest::parse(content, Path::new("Xcplan.toml"))
    }

    #[test]
    fn test_parse_app_manifest() {
        let manifest = parse(
            r#"
[project]
name = "Checkout"
template = "app"
platform = "iOS"
deployment-target = "17.0"
dependencies = ["Payments"]

[project.info-plist]
UILaunchStoryboardName = "LaunchScreen"
"#,
        )
        .unwrap();

        assert_eq!(manifest.name(), "Checkout");
        assert_eq!(manifest.template(), Template::App);

        let project = manifest.to_project(&Defaults::default());
        assert_eq!(project.target_names(), vec!["Checkout", "CheckoutTests"]);

        let app = &project.targets[0];
        assert_eq!(app.deployment_target.as_ref().unwrap().version, "17.0");
        assert_eq!(app.dependency_names(), vec!["Payments"]);
        assert_eq!(
            app.info_plist.get("UILaunchStoryboardName"),
            Some(&PlistValue::from("LaunchScreen"))
        );
    }

    #[test]
    fn test_parse_framework_with_demo() {
        let manifest = parse(
            r#"
[project]
name = "Analytics"
template = "framework-with-demo"
"#,
        )
        .unwrap();

        let project = manifest.to_project(&Defaults::default());
        assert_eq!(project.targets.len(), 4);
        assert_eq!(project.targets[2].name, "AnalyticsDemoApp");
        assert_eq!(project.targets[2].product, ProductKind::App);
    }

    #[test]
    fn test_framework_sources_accepted_but_inert() {
        let manifest = parse(
            r#"
[project]
name = "Core"
template = "framework"
sources = ["Lib/**"]
resources = ["Assets/**"]
"#,
        )
        .unwrap();

        assert_eq!(
            manifest.project().sources,
            Some(vec!["Lib/**".to_string()])
        );
        let project = manifest.to_project(&Defaults::default());
        assert_eq!(project.targets[0].sources, vec!["Sources/**"]);
        assert_eq!(project.targets[0].resources, Some(Vec::new()));
    }

    #[test]
    fn test_defaults_fallback() {
        let manifest = parse(
            r#"
[project]
name = "Desk"
template = "app"
"#,
        )
        .unwrap();

        assert_eq!(manifest.platform(&Defaults::default()), Platform::Ios);
        assert_eq!(manifest.deployment_version(&Defaults::default()), "16.0");

        let defaults = Defaults {
            platform: Some(Platform::Macos),
            deployment_target: Some("14.0".to_string()),
        };
        assert_eq!(manifest.platform(&defaults), Platform::Macos);
        assert_eq!(manifest.deployment_version(&defaults), "14.0");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = parse(
            r#"
[project]
name = ""
template = "app"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::EmptyName));
    }

    #[test]
    fn test_unknown_template_rejected() {
        let err = parse(
            r#"
[project]
name = "X"
template = "watch-extension"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_sources_rejected_for_app() {
        let err = parse(
            r#"
[project]
name = "X"
template = "app"
sources = ["App/**"]
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ManifestError::UnsupportedField { field: "sources", .. }
        ));
    }

    #[test]
    fn test_find_manifest_walks_up() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(MANIFEST_NAME),
            "[project]\nname = \"A\"\ntemplate = \"app\"\n",
        )
        .unwrap();
        let nested = tmp.path().join("Sources").join("A");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_manifest(&nested).unwrap();
        assert_eq!(found, tmp.path().join(MANIFEST_NAME));
    }

    #[test]
    fn test_error_display() {
        let err = ManifestError::UnsupportedField {
            template: Template::Framework,
            field: "info-plist",
        };
        assert_eq!(
            err.to_string(),
            "`framework` template does not accept `info-plist`"
        );

        let err = ManifestError::NotFound {
            dir: PathBuf::from("/work/app"),
        };
        assert_eq!(
            err.to_string(),
            "could not find `Xcplan.toml` in `/work/app` or any parent directory"
        );
    }
}
