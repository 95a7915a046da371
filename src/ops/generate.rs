//! Implementation of `xcplan generate`.
//!
//! Locates the manifest, layers the project config underneath it, expands
//! the manifest's template and renders the resulting description.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::manifest::{find_manifest, Manifest};
use crate::core::project::ProjectDescription;
use crate::ops::render::{render, write_description, OutputFormat};
use crate::util::config::Config;

/// Options for generating a description from a manifest.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Explicit manifest path (otherwise searched upward from `cwd`)
    pub manifest_path: Option<PathBuf>,

    /// Where to write the description (otherwise returned only)
    pub output: Option<PathBuf>,

    /// Output format (otherwise inferred from `output`, then config)
    pub format: Option<OutputFormat>,

    /// Directory to start the manifest search from
    pub cwd: PathBuf,
}

/// Result of a generate run.
#[derive(Debug, Clone)]
pub struct Generated {
    pub project: ProjectDescription,

    pub format: OutputFormat,

    /// Rendered description
    pub content: String,

    /// Set when the description was written to disk
    pub written_to: Option<PathBuf>,
}

/// Expand the manifest and render it.
pub fn generate(opts: &GenerateOptions) -> Result<Generated> {
    let manifest_path = match &opts.manifest_path {
        Some(path) => path.clone(),
        None => find_manifest(&opts.cwd)?,
    };
    let manifest = Manifest::load(&manifest_path)?;
    let root = manifest_path.parent().unwrap_or(Path::new("."));
    let config = Config::discover(root);

    tracing::debug!(
        manifest = %manifest_path.display(),
        template = %manifest.template(),
        "loaded manifest"
    );

    let project = manifest.to_project(&config.defaults);
    let format = opts
        .format
        .or_else(|| opts.output.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or(config.output.format);
    let content = match &opts.output {
        Some(output) => write_description(&project, output, format, config.output.pretty)?,
        None => render(&project, format, config.output.pretty)?,
    };

    Ok(Generated {
        project,
        format,
        content,
        written_to: opts.output.clone(),
    })
}
