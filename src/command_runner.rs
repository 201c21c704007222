//! Abstraction over external command execution for testability.
//!
//! Every child process this tool starts (the editor and the container engine)
//! goes through [`CommandRunner`]. Arguments are always an explicit vector of
//! OS strings, so paths reach the child byte for byte and nothing is ever
//! handed to a shell.
//!
//! [`RealCommandRunner`] delegates to [`std::process::Command`] with inherited
//! stdio, so the child's progress shows up live on the user's terminal.

use std::ffi::{OsStr, OsString};
use std::process::{Command, ExitStatus};
use tracing::debug;

use crate::error::BuilderError;

/// Trait for abstracting external command execution.
pub trait CommandRunner {
    /// Run a command to completion with inherited stdio and return its exit status.
    ///
    /// Blocks until the child exits. A child that cannot be started is
    /// [`BuilderError::Spawn`]; a child that exits unsuccessfully is not an error.
    fn run_status(&self, program: &OsStr, args: &[OsString]) -> Result<ExitStatus, BuilderError>;
}

/// Production implementation that delegates to [`std::process::Command`].
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run_status(&self, program: &OsStr, args: &[OsString]) -> Result<ExitStatus, BuilderError> {
        debug!(program = %program.to_string_lossy(), ?args, "Spawning child process");
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| BuilderError::Spawn {
                program: program.to_string_lossy().into_owned(),
                source,
            })?;
        debug!(program = %program.to_string_lossy(), %status, "Child process exited");
        Ok(status)
    }
}

#[cfg(test)]
pub use mock::MockCommandRunner;
