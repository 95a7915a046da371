//! Project configuration.
//!
//! Optional `.xcplan/config.toml` in the project root, found by walking up from
//! the manifest or working directory. It supplies defaults
//! for values a manifest or command line leaves out:
//!
//! ```toml
//! [defaults]
//! platform = "iOS"
//! deployment-target = "16.0"
//!
//! [output]
//! format = "json"
//! pretty = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::platform::Platform;
use crate::ops::render::OutputFormat;

/// Directory holding project-local xcplan state.
pub const CONFIG_DIR: &str = ".xcplan";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// xcplan configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,

    pub output: OutputConfig,
}

/// Fallbacks for target settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Defaults {
    pub platform: Option<Platform>,

    /// Minimum OS version
    pub deployment_target: Option<String>,
}

/// How descriptions are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl Config {
    /// Path of the project config for a project rooted at `root`.
    pub fn path_for(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Find the nearest project config in `start` or a parent directory.
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(Self::path_for)
            .find(|path| path.is_file())
    }

    /// Load the nearest project config above `start`, or the defaults.
    pub fn discover(start: &Path) -> Self {
        match Self::find(start) {
            Some(path) => {
                tracing::debug!(config = %path.display(), "using project config");
                Self::load_or_default(&path)
            }
            None => Self::default(),
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
