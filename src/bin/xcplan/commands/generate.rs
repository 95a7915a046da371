//! `xcplan generate` command

use anyhow::{Context, Result};
use xcplan::ops::generate::{generate, GenerateOptions};

use crate::cli::GenerateArgs;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;

    let opts = GenerateOptions {
        manifest_path: args.manifest_path,
        output: args.output,
        format: args.format,
        cwd,
    };

    let generated = generate(&opts)?;

    match &generated.written_to {
        Some(path) => eprintln!(
            "   Generated `{}` ({} targets) -> {}",
            generated.project.name,
            generated.project.targets.len(),
            path.display()
        ),
        None => print!("{}", generated.content),
    }

    Ok(())
}
