//! Report command implementation.
//!
//! The `envprobe report` command shows the full introspection report:
//! environment name, development and container flags, detected platform,
//! and the resolved log directory for the current program.

use std::path::PathBuf;

use console::style;
use serde::Serialize;

use crate::cli::args::ReportArgs;
use crate::environment::{environment_name, in_container, is_development};
use crate::error::Result;
use crate::logdir::LogDirResolver;
use crate::platform::Platform;

use super::dispatcher::{Command, CommandResult};

/// A point-in-time snapshot of the process environment.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Deployment environment name.
    pub environment: String,

    /// Whether the environment is "development".
    pub development: bool,

    /// Whether the process runs inside a container.
    pub container: bool,

    /// Detected host platform.
    pub platform: Platform,

    /// Log directory for the current program, when resolvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<PathBuf>,

    /// Why the log directory could not be resolved, when it couldn't.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_directory_error: Option<String>,
}

impl Report {
    /// Gather a report using the given resolver.
    pub fn gather(resolver: &LogDirResolver) -> Self {
        let (log_directory, log_directory_error) = match resolver.resolve_for_current_exe() {
            Ok(path) => (Some(path), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            environment: environment_name(),
            development: is_development(),
            container: in_container(),
            platform: resolver.platform(),
            log_directory,
            log_directory_error,
        }
    }
}

/// The report command implementation.
pub struct ReportCommand {
    args: ReportArgs,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(args: ReportArgs) -> Self {
        Self { args }
    }
}

impl Command for ReportCommand {
    fn execute(&self) -> Result<CommandResult> {
        let resolver = LogDirResolver::new();
        let report = Report::gather(&resolver);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{json}");
        } else {
            show_report(&report);
        }

        Ok(CommandResult::success())
    }
}

fn show_report(report: &Report) {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    show_line("Environment", &report.environment);
    show_line("Development", yes_no(report.development));
    show_line("Container", yes_no(report.container));
    show_line("Platform", report.platform.as_str());

    match (&report.log_directory, &report.log_directory_error) {
        (Some(path), _) => show_line("Log directory", &path.display().to_string()),
        (None, Some(reason)) => {
            println!(
                "{} {}",
                style(format!("{:<14}", "Log directory")).bold(),
                style(reason).yellow()
            );
        }
        (None, None) => {}
    }
}

fn show_line(label: &str, value: &str) {
    println!("{} {}", style(format!("{label:<14}")).bold(), value);
}
