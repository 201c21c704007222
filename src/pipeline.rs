//! The build sequence.
//!
//! Render → write → [edit] → [pull] → build → [push]. Every step blocks until
//! it is done and nothing is retried. The caller reports the Dockerfile path
//! from the returned [`Report`].

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cli::{BuildRequest, RunOptions};
use crate::command_runner::CommandRunner;
use crate::editor;
use crate::engine::{Engine, EngineCommand};
use crate::error::BuilderError;
use crate::manifest::Manifest;
use crate::output::Output;

/// Stand-in for the Dockerfile path when nothing is written.
const DRY_RUN_DOCKERFILE: &str = "<temporary Dockerfile>";

/// Pick the engine calls for a request, in execution order.
///
/// Pull only with `--pull`; push only when both `--push` and `--tag` are set.
pub fn engine_commands(request: &BuildRequest, engine: &Engine, dockerfile: &Path) -> Vec<EngineCommand> {
    let mut commands = Vec::with_capacity(3);

    if request.pull {
        commands.push(engine.pull(&request.base_image));
    }

    commands.push(engine.build(dockerfile, request.tag.as_deref(), &request.build_dir));

    match (&request.tag, request.push) {
        (Some(tag), true) => commands.push(engine.push(tag)),
        (None, true) => debug!("--push given without --tag, skipping push"),
        _ => {}
    }

    commands
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct Report {
    /// Where the Dockerfile was left on disk.
    pub dockerfile: PathBuf,
    /// The engine step that stopped the run, if any.
    pub failure: Option<BuilderError>,
}

/// Everything needed to carry out a [`BuildRequest`].
pub struct Pipeline<'a> {
    runner: &'a dyn CommandRunner,
    engine: Engine,
    editor: String,
    temp_dir: PathBuf,
    ignore_engine_errors: bool,
}

impl<'a> Pipeline<'a> {
    /// Build a pipeline from CLI options, reading `$VISUAL`/`$EDITOR` from the environment.
    pub fn from_options(options: &RunOptions, runner: &'a dyn CommandRunner) -> Self {
        Self {
            runner,
            engine: Engine::new(options.engine.as_str()),
            editor: editor::resolve_editor(options.editor.as_deref(), |key| {
                std::env::var(key).ok()
            }),
            temp_dir: std::env::temp_dir(),
            ignore_engine_errors: options.ignore_engine_errors,
        }
    }

    /// Write Dockerfiles into `dir` instead of the system temp directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    /// Run the whole sequence.
    ///
    /// The only error returned is temp-file I/O, which happens before any
    /// child runs. Editor problems are reported and skipped. An engine step
    /// that fails or cannot be started ends up in [`Report::failure`], unless
    /// engine errors are being ignored.
    pub fn run(&self, request: &BuildRequest) -> Result<Report> {
        let manifest = Manifest::render(&request.base_image, &request.directives);
        let dockerfile = manifest.write_to_tempfile_in(&self.temp_dir)?;

        if request.edit {
            Output::info(format!("Opening Dockerfile in {}", self.editor));
            editor::edit(self.runner, &self.editor, &dockerfile);
        }

        let mut failure = None;
        for command in engine_commands(request, &self.engine, &dockerfile) {
            Output::running(command.display());

            let err = match command.run(self.runner) {
                Ok(status) if status.success() => {
                    Output::success(format!("{} finished", command.step));
                    continue;
                }
                Ok(status) => BuilderError::EngineFailed {
                    step: command.step,
                    status,
                },
                Err(err) => err,
            };

            if self.ignore_engine_errors {
                let err = anyhow::Error::from(err);
                warn!(step = %command.step, error = %format!("{err:#}"), "Engine step failed, continuing");
                Output::warning(format!("{} step: {err:#}", command.step));
                continue;
            }

            failure = Some(err);
            break;
        }

        Ok(Report {
            dockerfile,
            failure,
        })
    }

    /// Show what [`Pipeline::run`] would do, without side effects.
    pub fn dry_run(&self, request: &BuildRequest) {
        let manifest = Manifest::render(&request.base_image, &request.directives);
        Output::verbatim(manifest.as_str());

        if request.edit {
            Output::dry_run(format!("Would open the Dockerfile in {}", self.editor));
        }
        for command in engine_commands(request, &self.engine, Path::new(DRY_RUN_DOCKERFILE)) {
            Output::dry_run(format!("Would run: {}", command.display()));
        }
    }
}
