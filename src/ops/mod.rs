//! High-level operations.
//!
//! Target-set synthesis lives in [`templates`]; the rest implements the
//! xcplan commands on top of it.

pub mod generate;
pub mod init;
pub mod render;
pub mod templates;

pub use generate::{generate, GenerateOptions, Generated};
pub use init::{init_project, InitOptions};
pub use render::{render, write_description, OutputFormat, RenderError};
pub use templates::{
    build_application_project, build_framework_project, build_framework_with_demo_project,
    AppOptions, DemoFrameworkOptions, FrameworkOptions,
};
