//! `xcplan framework` command

use anyhow::Result;
use xcplan::ops::templates::{
    build_framework_project, build_framework_with_demo_project, DemoFrameworkOptions,
    FrameworkOptions,
};

use super::{parse_info_plist, print_description, validate_name, ResolvedTarget};
use crate::cli::FrameworkArgs;

pub fn execute(args: FrameworkArgs) -> Result<()> {
    validate_name(&args.name)?;
    let resolved = ResolvedTarget::from_cwd(&args.target)?;

    let project = if args.demo {
        let opts = DemoFrameworkOptions::new(resolved.platform, resolved.deployment_version)
            .with_info_plist(parse_info_plist(&args.info_plist)?)
            .with_dependencies(resolved.dependencies);
        build_framework_with_demo_project(&args.name, &opts)
    } else {
        let mut opts = FrameworkOptions::new(resolved.platform, resolved.deployment_version)
            .with_dependencies(resolved.dependencies);
        if !args.sources.is_empty() {
            opts = opts.with_sources(args.sources);
        }
        if !args.resources.is_empty() {
            opts = opts.with_resources(Some(args.resources));
        }
        build_framework_project(&args.name, &opts)
    };

    print_description(&project, resolved.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        framework: FrameworkArgs,
    }

    fn parse_framework_args(args: &[&str]) -> FrameworkArgs {
        TestCli::parse_from(args).framework
    }

    #[test]
    fn test_framework_args_defaults() {
        let args = parse_framework_args(&["test", "Core"]);
        assert_eq!(args.name, "Core");
        assert!(!args.demo);
        assert!(args.sources.is_empty());
        assert!(args.resources.is_empty());
    }

    #[test]
    fn test_framework_args_sources_and_resources() {
        let args = parse_framework_args(&[
            "test",
            "Core",
            "--source",
            "Lib/**",
            "--resource",
            "Assets/**",
        ]);
        assert_eq!(args.sources, vec!["Lib/**"]);
        assert_eq!(args.resources, vec!["Assets/**"]);
    }

    #[test]
    fn test_framework_demo_conflicts_with_sources() {
        let result = TestCli::try_parse_from(["test", "Core", "--demo", "--source", "Lib/**"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_framework_info_plist_requires_demo() {
        let result = TestCli::try_parse_from(["test", "Core", "--info-plist", "A=1"]);
        assert!(result.is_err());

        let args = parse_framework_args(&["test", "Core", "--demo", "--info-plist", "A=1"]);
        assert!(args.demo);
        assert_eq!(args.info_plist, vec!["A=1"]);
    }
}
