//! `xcplan app` command

use anyhow::Result;
use xcplan::ops::templates::{build_application_project, AppOptions};

use super::{info_manifest, print_description, validate_name, ResolvedTarget};
use crate::cli::AppArgs;

pub fn execute(args: AppArgs) -> Result<()> {
    validate_name(&args.name)?;
    let resolved = ResolvedTarget::from_cwd(&args.target)?;

    let opts = AppOptions::new(resolved.platform, resolved.deployment_version)
        .with_info_plist(info_manifest(&args.info_plist)?)
        .with_dependencies(resolved.dependencies);

    let project = build_application_project(&args.name, &opts);
    print_description(&project, resolved.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_app_args(args: &[&str]) -> AppArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            app: AppArgs,
        }
        TestCli::parse_from(args).app
    }

    #[test]
    fn test_app_args_name_only() {
        let args = parse_app_args(&["test", "Checkout"]);
        assert_eq!(args.name, "Checkout");
        assert!(args.target.platform.is_none());
        assert!(args.target.dependencies.is_empty());
        assert!(args.info_plist.is_empty());
    }

    #[test]
    fn test_app_args_full() {
        let args = parse_app_args(&[
            "test",
            "Checkout",
            "--platform",
            "ios",
            "--deployment-target",
            "17.0",
            "--dep",
            "Payments",
            "--dep",
            "Analytics",
            "--info-plist",
            "CFBundleVersion=1",
            "--format",
            "toml",
        ]);

        assert_eq!(args.target.platform, Some(xcplan::Platform::Ios));
        assert_eq!(args.target.deployment_target.as_deref(), Some("17.0"));
        assert_eq!(args.target.dependencies, vec!["Payments", "Analytics"]);
        assert_eq!(args.info_plist, vec!["CFBundleVersion=1"]);
        assert_eq!(args.target.format, Some(xcplan::ops::OutputFormat::Toml));
    }
}
