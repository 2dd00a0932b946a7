//! Logdir command implementation.
//!
//! The `envprobe logdir` command resolves and prints the log directory for
//! an application. With no name it resolves for the current program; with
//! `--platform` it resolves for a named platform instead of the detected
//! one (useful when generating deployment configuration on another host).

use crate::cli::args::LogdirArgs;
use crate::error::Result;
use crate::logdir::LogDirResolver;
use crate::platform::Platform;

use super::dispatcher::{Command, CommandResult};

/// The logdir command implementation.
pub struct LogdirCommand {
    args: LogdirArgs,
}

impl LogdirCommand {
    /// Create a new logdir command.
    pub fn new(args: LogdirArgs) -> Self {
        Self { args }
    }
}

impl Command for LogdirCommand {
    fn execute(&self) -> Result<CommandResult> {
        let resolver = match self.args.platform {
            Some(platform) => LogDirResolver::with_host(Box::new(Platform::from(platform))),
            None => LogDirResolver::new(),
        };

        let path = match &self.args.app_name {
            Some(name) => resolver.resolve(name)?,
            None => resolver.resolve_for_current_exe()?,
        };

        println!("{}", path.display());
        Ok(CommandResult::success())
    }
}
