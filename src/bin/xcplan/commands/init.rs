//! `xcplan init` command

use anyhow::{Context, Result};
use xcplan::ops::init::{init_project, InitOptions};

use super::validate_name;
use crate::cli::InitArgs;

pub fn execute(args: InitArgs) -> Result<()> {
    validate_name(&args.name)?;

    let path = match args.path {
        Some(path) => path,
        None => std::env::current_dir().context("failed to get current directory")?,
    };

    let opts = InitOptions {
        name: args.name.clone(),
        template: args.template.into(),
        platform: args.platform,
        deployment_target: args.deployment_target,
    };

    init_project(&path, &opts)?;

    eprintln!("     Created {} `{}` project", opts.template, args.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::cli::TemplateArg;
    use std::path::PathBuf;

    fn parse_init_args(args: &[&str]) -> InitArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            init: InitArgs,
        }
        TestCli::parse_from(args).init
    }

    #[test]
    fn test_init_args_default_template() {
        let args = parse_init_args(&["test", "Checkout"]);
        assert_eq!(args.template, TemplateArg::App);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_init_args_framework_with_demo() {
        let args = parse_init_args(&[
            "test",
            "Analytics",
            "--template",
            "framework-with-demo",
            "--path",
            "Modules/Analytics",
        ]);
        assert_eq!(args.template, TemplateArg::FrameworkWithDemo);
        assert_eq!(args.path, Some(PathBuf::from("Modules/Analytics")));
    }
}
