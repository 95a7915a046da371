//! Platforms, device families and deployment targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default minimum OS version used when nothing else is configured.
pub const DEFAULT_DEPLOYMENT_VERSION: &str = "16.0";

/// The operating system a target is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    #[serde(rename = "iOS", alias = "ios")]
    Ios,

    #[serde(rename = "macOS", alias = "macos")]
    Macos,

    #[serde(rename = "tvOS", alias = "tvos")]
    Tvos,

    #[serde(rename = "watchOS", alias = "watchos")]
    Watchos,

    #[serde(rename = "visionOS", alias = "visionos")]
    Visionos,
}

impl Platform {
    /// All known platforms.
    pub const ALL: [Platform; 5] = [
        Platform::Ios,
        Platform::Macos,
        Platform::Tvos,
        Platform::Watchos,
        Platform::Visionos,
    ];

    /// Canonical display name (`iOS`, `macOS`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Macos => "macOS",
            Platform::Tvos => "tvOS",
            Platform::Watchos => "watchOS",
            Platform::Visionos => "visionOS",
        }
    }

    /// Device family declared by main targets on this platform, if any.
    pub fn default_devices(&self) -> Option<DeviceFamily> {
        match self {
            Platform::Ios => Some(DeviceFamily::Iphone),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "invalid platform '{}'; expected one of iOS, macOS, tvOS, watchOS, visionOS",
                    s
                )
            })
    }
}

/// Device family an iOS target declares support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFamily {
    Iphone,
    Ipad,
    Mac,
}

/// Minimum OS version a target declares, together with its device family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeploymentTarget {
    pub platform: Platform,

    /// Minimum OS version, e.g. `16.0`
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<DeviceFamily>,
}

impl DeploymentTarget {
    /// Deployment target for a main (non-test) target on `platform`.
    pub fn new(platform: Platform, version: impl Into<String>) -> Self {
        DeploymentTarget {
            platform,
            version: version.into(),
            devices: platform.default_devices(),
        }
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.platform, self.version)
    }
}
