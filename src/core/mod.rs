//! Core data structures for xcplan.
//!
//! This module contains the value types handed to the host tool:
//! - Target and project descriptions
//! - Platforms, deployment targets and info manifests
//! - Name-only target dependencies
//! - The Xcplan.toml manifest

pub mod dependency;
pub mod info_plist;
pub mod manifest;
pub mod platform;
pub mod project;
pub mod target;

pub use dependency::DependencyRef;
pub use info_plist::{InfoManifest, PlistEntries, PlistValue};
pub use manifest::{find_manifest, Manifest, ManifestError, Template, MANIFEST_NAME};
pub use platform::{DeploymentTarget, DeviceFamily, Platform, DEFAULT_DEPLOYMENT_VERSION};
pub use project::{bundle_identifier, ProjectDescription, ORGANIZATION_NAME};
pub use target::{ProductKind, TargetDescription};
