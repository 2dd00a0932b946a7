//! Library integration tests.

use envprobe::EnvprobeError;

#[test]
fn error_types_are_public() {
    let err = EnvprobeError::AbsoluteAppName {
        name: "C:\\test".into(),
    };
    assert!(err.to_string().contains("C:\\test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> envprobe::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use envprobe::cli::{Cli, Commands};

    // Actually test parsing with parse_from
    let cli = Cli::parse_from(["envprobe", "report", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Report(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Report command");
    }
}

#[test]
fn resolver_is_usable_through_the_crate_root() {
    use envprobe::logdir::LogDirResolver;
    use envprobe::platform::Platform;

    let resolver = LogDirResolver::with_host(Box::new(Platform::Linux));
    let dir = resolver.resolve("svc").unwrap();
    assert_eq!(dir, std::path::PathBuf::from("/var/log").join("svc"));
}

#[test]
fn environment_helpers_are_public() {
    // The real environment varies; just exercise the surface.
    let name = envprobe::environment::environment_name();
    assert!(!name.is_empty());
    let _ = envprobe::environment::is_development();
    let _ = envprobe::environment::in_container();
}
