//! Implementation of `xcplan init`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::info_plist::PlistEntries;
use crate::core::manifest::{ManifestError, ProjectSection, Template, MANIFEST_NAME};
use crate::core::platform::Platform;
use crate::core::target::{SOURCES_DIR, TESTS_DIR};

/// Options for initializing a project.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Project name
    pub name: String,

    pub template: Template,

    pub platform: Option<Platform>,

    /// Minimum OS version
    pub deployment_target: Option<String>,
}

/// Write an `Xcplan.toml` into `path` and create the conventional
/// `Sources/` and `Tests/` directories.
pub fn init_project(path: &Path, opts: &InitOptions) -> Result<()> {
    if opts.name.trim().is_empty() {
        return Err(ManifestError::EmptyName.into());
    }

    let manifest_path = path.join(MANIFEST_NAME);
    if manifest_path.exists() {
        bail!("`{}` already exists in `{}`", MANIFEST_NAME, path.display());
    }

    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))?;

    let section = ProjectSection {
        name: opts.name.clone(),
        template: opts.template,
        platform: opts.platform,
        deployment_target: opts.deployment_target.clone(),
        sources: None,
        resources: None,
        dependencies: Vec::new(),
        info_plist: PlistEntries::new(),
    };
    let manifest = toml::to_string_pretty(&ManifestFile { project: section })
        .with_context(|| format!("failed to serialize {}", MANIFEST_NAME))?;
    fs::write(&manifest_path, manifest)
        .with_context(|| format!("failed to write {}", MANIFEST_NAME))?;

    for dir in [SOURCES_DIR, TESTS_DIR] {
        let dir = path.join(dir);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create directory: {}", dir.display()))?;
    }

    tracing::info!(project = %opts.name, template = %opts.template, "initialized project");
    Ok(())
}

#[derive(serde::Serialize)]
struct ManifestFile {
    project: ProjectSection,
}
