//! xcplan - conventional project and target descriptions for mobile app builds
//!
//! This crate expands a product name, platform, deployment version and a
//! dependency list into a deterministic set of target descriptions
//! (application or framework, paired unit tests, optional demo app) that a
//! host project-generation tool consumes.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{
    dependency::DependencyRef, info_plist::InfoManifest, manifest::Manifest,
    platform::Platform, project::ProjectDescription, target::TargetDescription,
};

pub use crate::ops::templates::{
    build_application_project, build_framework_project, build_framework_with_demo_project,
    AppOptions, DemoFrameworkOptions, FrameworkOptions,
};
pub use crate::util::Config;
