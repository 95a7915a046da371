//! Command implementations

pub mod app;
pub mod completions;
pub mod framework;
pub mod generate;
pub mod init;

use std::path::Path;

use anyhow::{bail, Context, Result};
use xcplan::core::{dependency, DependencyRef, InfoManifest, PlistEntries, PlistValue, Platform};
use xcplan::core::DEFAULT_DEPLOYMENT_VERSION;
use xcplan::ops::{render, OutputFormat};
use xcplan::{Config, ProjectDescription};

use crate::cli::TargetArgs;

/// Target settings after applying the project config and built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
    pub platform: Platform,
    pub deployment_version: String,
    pub dependencies: Vec<DependencyRef>,
    pub format: OutputFormat,
}

impl ResolvedTarget {
    /// Resolve `args` against the nearest project config above `start`.
    pub fn resolve(args: &TargetArgs, start: &Path) -> Self {
        let config = Config::discover(start);
        ResolvedTarget {
            platform: args
                .platform
                .or(config.defaults.platform)
                .unwrap_or_default(),
            deployment_version: args
                .deployment_target
                .clone()
                .or(config.defaults.deployment_target)
                .unwrap_or_else(|| DEFAULT_DEPLOYMENT_VERSION.to_string()),
            dependencies: dependency::targets(args.dependencies.iter().cloned()),
            format: args.format.unwrap_or(config.output.format),
        }
    }

    /// Resolve `args` against the nearest project config above the current
    /// directory.
    pub fn from_cwd(args: &TargetArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::resolve(args, &cwd))
    }
}

/// Reject names the builders cannot expand.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("project name must not be empty");
    }
    Ok(())
}

/// Parse `KEY=VALUE` pairs into info manifest entries.
pub fn parse_info_plist(pairs: &[String]) -> Result<PlistEntries> {
    let mut entries = PlistEntries::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid info-plist entry `{}`; expected KEY=VALUE", pair);
        };
        if key.is_empty() {
            bail!("invalid info-plist entry `{}`; key is empty", pair);
        }
        entries.insert(key.to_string(), PlistValue::parse_scalar(value));
    }
    Ok(entries)
}

/// Info manifest for `pairs`; no pairs means the default manifest.
pub fn info_manifest(pairs: &[String]) -> Result<InfoManifest> {
    Ok(InfoManifest::extending(parse_info_plist(pairs)?))
}

/// Print a description to stdout.
pub fn print_description(project: &ProjectDescription, format: OutputFormat) -> Result<()> {
    print!("{}", render(project, format, true)?);
    Ok(())
}
