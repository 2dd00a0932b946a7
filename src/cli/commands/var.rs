//! Var command implementation.
//!
//! The `envprobe var` command prints the value of an environment variable.
//! Follows the `printenv` convention: unset variables print nothing and
//! exit with code 1.

use crate::cli::args::VarArgs;
use crate::environment;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The var command implementation.
pub struct VarCommand {
    args: VarArgs,
}

impl VarCommand {
    /// Create a new var command.
    pub fn new(args: VarArgs) -> Self {
        Self { args }
    }
}

impl Command for VarCommand {
    fn execute(&self) -> Result<CommandResult> {
        match environment::var(&self.args.name) {
            Some(value) => {
                println!("{value}");
                Ok(CommandResult::success())
            }
            None => Ok(CommandResult::failure(1)),
        }
    }
}
