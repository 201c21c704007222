//! Container engine invocations.
//!
//! The engine is any docker-compatible CLI that accepts:
//!
//! - `pull <image>`
//! - `build -f <file> [-t <tag>] <context-dir>`
//! - `push <tag>`

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use std::process::ExitStatus;
use tracing::info;

use crate::command_runner::CommandRunner;
use crate::error::BuilderError;

/// The three engine operations, in the only order they ever run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStep {
    Pull,
    Build,
    Push,
}

impl EngineStep {
    pub fn subcommand(&self) -> &'static str {
        match self {
            EngineStep::Pull => "pull",
            EngineStep::Build => "build",
            EngineStep::Push => "push",
        }
    }
}

impl fmt::Display for EngineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}

/// A single engine call with its full argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCommand {
    pub step: EngineStep,
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl EngineCommand {
    /// Shell-quoted rendering, for display only. Non-UTF-8 bytes are replaced.
    pub fn display(&self) -> String {
        let words: Vec<String> = std::iter::once(&self.program)
            .chain(&self.args)
            .map(|word| word.to_string_lossy().into_owned())
            .collect();
        shlex::try_join(words.iter().map(String::as_str)).unwrap_or_else(|_| words.join(" "))
    }

    /// Run the command, blocking until the engine exits.
    pub fn run(&self, runner: &dyn CommandRunner) -> Result<ExitStatus, BuilderError> {
        info!(step = %self.step, command = %self.display(), "Running engine");
        runner.run_status(&self.program, &self.args)
    }
}

/// Builds argument vectors for a particular engine binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    program: OsString,
}

impl Engine {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn pull(&self, image: &str) -> EngineCommand {
        self.command(EngineStep::Pull, vec![image.into()])
    }

    pub fn build(&self, dockerfile: &Path, tag: Option<&str>, context: &Path) -> EngineCommand {
        let mut args: Vec<OsString> = vec!["-f".into(), dockerfile.into()];
        if let Some(tag) = tag {
            args.push("-t".into());
            args.push(tag.into());
        }
        args.push(context.into());
        self.command(EngineStep::Build, args)
    }

    pub fn push(&self, tag: &str) -> EngineCommand {
        self.command(EngineStep::Push, vec![tag.into()])
    }

    fn command(&self, step: EngineStep, rest: Vec<OsString>) -> EngineCommand {
        let mut args = Vec::with_capacity(rest.len() + 1);
        args.push(OsStr::new(step.subcommand()).to_os_string());
        args.extend(rest);
        EngineCommand {
            step,
            program: self.program.clone(),
            args,
        }
    }
}
