//! Rendering project descriptions for the host tool.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::project::ProjectDescription;

/// Serialization format of an emitted description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl OutputFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            _ => Err(format!(
                "invalid output format '{}'; expected 'json' or 'toml'",
                s
            )),
        }
    }
}

/// Error serializing a description.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Serialize `project` in `format`. `pretty` only affects JSON.
pub fn render(
    project: &ProjectDescription,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, RenderError> {
    let mut out = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(project)?,
        OutputFormat::Json => serde_json::to_string(project)?,
        OutputFormat::Toml => toml::to_string_pretty(project)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Render `project` and write it to `path`, creating parent directories.
/// Returns the rendered description.
pub fn write_description(
    project: &ProjectDescription,
    path: &Path,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    let content = render(project, format, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, &content)
        .with_context(|| format!("failed to write description: {}", path.display()))?;

    tracing::info!(
        project = %project.name,
        path = %path.display(),
        "wrote project description"
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::Platform;
    use crate::ops::templates::{build_application_project, AppOptions};
    use tempfile::TempDir;

    fn checkout() -> ProjectDescription {
        build_application_project("Checkout", &AppOptions::new(Platform::Ios, "16.0"))
    }

    #[test]
    fn test_render_json() {
        let out = render(&checkout(), OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["name"], "Checkout");
        assert_eq!(value["organizationName"], "ofo.io");
        assert_eq!(value["targets"][0]["bundleId"], "ofo.io.Checkout");
        assert_eq!(value["targets"][0]["product"], "app");
        assert_eq!(value["targets"][0]["deploymentTarget"]["version"], "16.0");
        assert_eq!(value["targets"][0]["deploymentTarget"]["devices"], "iphone");
        assert_eq!(value["targets"][1]["product"], "unitTests");
        assert_eq!(value["targets"][1]["dependencies"][0]["target"], "Checkout");
        assert!(value["targets"][1].get("deploymentTarget").is_none());
    }

    #[test]
    fn test_render_compact_json_is_single_line() {
        let out = render(&checkout(), OutputFormat::Json, false).unwrap();
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_render_json_parses_back() {
        let project = checkout();
        let out = render(&project, OutputFormat::Json, true).unwrap();
        let parsed: ProjectDescription = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, project);
    }

    #[test]
    fn test_render_toml() {
        let out = render(&checkout(), OutputFormat::Toml, true).unwrap();
        assert!(out.contains("name = \"Checkout\""));
        assert!(out.contains("bundleId = \"ofo.io.CheckoutTests\""));
        assert!(out.contains("[[targets]]"));
    }

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/Project.json")),
            Some(OutputFormat::Json)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("Project.TOML")),
            Some(OutputFormat::Toml)
        );
        assert_eq!(OutputFormat::from_path(Path::new("Project")), None);
    }

    #[test]
    fn test_write_description_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gen").join("Checkout.json");

        let rendered = write_description(&checkout(), &path, OutputFormat::Json, true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"CheckoutTests\""));
        assert_eq!(rendered, content);
    }
}
