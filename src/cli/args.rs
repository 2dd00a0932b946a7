//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::platform::Platform;

/// Envprobe - deployment environment and log directory introspection.
#[derive(Debug, Parser)]
#[command(name = "envprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the deployment environment report (default if no command specified)
    Report(ReportArgs),

    /// Resolve the log directory for an application
    Logdir(LogdirArgs),

    /// Print the value of an environment variable
    Var(VarArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `logdir` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LogdirArgs {
    /// Application name (defaults to the current program's name)
    pub app_name: Option<String>,

    /// Resolve for a specific platform instead of the detected one
    #[arg(long, value_enum, value_name = "PLATFORM")]
    pub platform: Option<PlatformArg>,
}

/// Arguments for the `var` command.
#[derive(Debug, Clone, clap::Args)]
pub struct VarArgs {
    /// Name of the environment variable
    pub name: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Platform names accepted by `logdir --platform`.
///
/// Mirrors the recognized members of [`Platform`]; `unknown` is deliberately
/// not accepted, it is a detection outcome rather than a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlatformArg {
    Windows,
    Linux,
    Macos,
    Freebsd,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Linux => Platform::Linux,
            PlatformArg::Macos => Platform::MacOs,
            PlatformArg::Freebsd => Platform::FreeBsd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_logdir_with_platform_override() {
        let cli = Cli::parse_from(["envprobe", "logdir", "myapp", "--platform", "linux"]);
        match cli.command {
            Some(Commands::Logdir(args)) => {
                assert_eq!(args.app_name.as_deref(), Some("myapp"));
                assert_eq!(args.platform, Some(PlatformArg::Linux));
            }
            other => panic!("expected logdir command, got {other:?}"),
        }
    }

    #[test]
    fn logdir_app_name_is_optional() {
        let cli = Cli::parse_from(["envprobe", "logdir"]);
        match cli.command {
            Some(Commands::Logdir(args)) => assert!(args.app_name.is_none()),
            other => panic!("expected logdir command, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["envprobe"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["envprobe", "report", "--debug"]);
        assert!(cli.debug);
    }

    #[test]
    fn platform_arg_converts_to_platform() {
        assert_eq!(Platform::from(PlatformArg::Windows), Platform::Windows);
        assert_eq!(Platform::from(PlatformArg::Macos), Platform::MacOs);
        assert_eq!(Platform::from(PlatformArg::Freebsd), Platform::FreeBsd);
    }
}
