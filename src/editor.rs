//! Interactive editing of the generated Dockerfile.

use anyhow::{Result, bail};
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitStatus;
use tracing::{info, warn};

use crate::command_runner::CommandRunner;
use crate::output::Output;

/// Editor used when nothing else is configured.
pub const DEFAULT_EDITOR: &str = "nano";

/// Pick the editor: explicit flag, then `$VISUAL`, then `$EDITOR`, then [`DEFAULT_EDITOR`].
///
/// Empty values are skipped.
pub fn resolve_editor(explicit: Option<&str>, env: impl Fn(&str) -> Option<String>) -> String {
    explicit
        .map(str::to_string)
        .into_iter()
        .chain(env("VISUAL"))
        .chain(env("EDITOR"))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Split an editor setting such as `code --wait` and append the file to edit.
fn editor_argv(editor: &str, path: &Path) -> Result<(OsString, Vec<OsString>)> {
    let Some(words) = shlex::split(editor) else {
        bail!("Invalid editor command: {editor}");
    };
    let mut words = words.into_iter().map(OsString::from);
    let Some(program) = words.next() else {
        bail!("Editor command is empty");
    };
    let args = words.chain(std::iter::once(path.as_os_str().to_os_string())).collect();
    Ok((program, args))
}

fn run_editor(runner: &dyn CommandRunner, editor: &str, path: &Path) -> Result<ExitStatus> {
    let (program, args) = editor_argv(editor, path)?;
    info!(editor = %program.to_string_lossy(), path = %path.display(), "Opening Dockerfile in editor");
    Ok(runner.run_status(&program, &args)?)
}

/// Open `path` in `editor` and block until the editor exits.
///
/// Every outcome ends the edit session: a non-zero exit, an editor that
/// cannot be started, or an unparsable editor setting is only reported, and
/// whatever is on disk afterwards is what gets built.
pub fn edit(runner: &dyn CommandRunner, editor: &str, path: &Path) {
    match run_editor(runner, editor, path) {
        Ok(status) if status.success() => {}
        Ok(status) => {
            warn!(editor, %status, "Editor exited unsuccessfully, continuing");
        }
        Err(err) => {
            warn!(editor, error = %format!("{err:#}"), "Editor could not be run, continuing");
            Output::warning(format!("{err:#}; building the Dockerfile as written"));
        }
    }
}
