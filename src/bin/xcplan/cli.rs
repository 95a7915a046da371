//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use xcplan::core::{Platform, Template};
use xcplan::ops::OutputFormat;

/// xcplan - conventional project descriptions for mobile app builds
#[derive(Parser)]
#[command(name = "xcplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Describe an application project (app + tests)
    App(AppArgs),

    /// Describe a framework project (framework + tests, optionally a demo app)
    Framework(FrameworkArgs),

    /// Describe the project in Xcplan.toml
    Generate(GenerateArgs),

    /// Create an Xcplan.toml in a directory
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Settings shared by the `app` and `framework` commands.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Target platform (iOS, macOS, tvOS, watchOS, visionOS)
    #[arg(long, env = "XCPLAN_PLATFORM")]
    pub platform: Option<Platform>,

    /// Minimum OS version, e.g. 16.0
    #[arg(long, env = "XCPLAN_DEPLOYMENT_TARGET")]
    pub deployment_target: Option<String>,

    /// Target the main target depends on (repeatable)
    #[arg(long = "dep", value_name = "TARGET")]
    pub dependencies: Vec<String>,

    /// Output format (json or toml)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
pub struct AppArgs {
    /// Product name
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Info.plist entry as KEY=VALUE (repeatable)
    #[arg(long = "info-plist", value_name = "KEY=VALUE")]
    pub info_plist: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FrameworkArgs {
    /// Product name
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Also generate a demo app wired to the framework
    #[arg(long)]
    pub demo: bool,

    /// Framework source glob (repeatable; accepted, the framework always uses Sources/**)
    #[arg(long = "source", value_name = "GLOB", conflicts_with = "demo")]
    pub sources: Vec<String>,

    /// Framework resource glob (repeatable; accepted, the framework carries no resources)
    #[arg(long = "resource", value_name = "GLOB", conflicts_with = "demo")]
    pub resources: Vec<String>,

    /// Info.plist entry as KEY=VALUE (repeatable, demo projects only)
    #[arg(long = "info-plist", value_name = "KEY=VALUE", requires = "demo")]
    pub info_plist: Vec<String>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to Xcplan.toml (defaults to searching upward)
    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    /// Write the description to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (json or toml)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// Template names accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateArg {
    App,
    Framework,
    FrameworkWithDemo,
}

impl From<TemplateArg> for Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::App => Template::App,
            TemplateArg::Framework => Template::Framework,
            TemplateArg::FrameworkWithDemo => Template::FrameworkWithDemo,
        }
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name
    pub name: String,

    /// Which target set to describe
    #[arg(long, value_enum, default_value = "app")]
    pub template: TemplateArg,

    /// Target platform
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Minimum OS version
    #[arg(long)]
    pub deployment_target: Option<String>,

    /// Directory to initialize (defaults to current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
