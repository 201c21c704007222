//! Dockerfile rendering and the temporary file it is written to.
//!
//! The rendered text is a direct projection of the request:
//!
//! ```dockerfile
//! FROM <image>
//! <KEYWORD> <value>
//! ...
//! ```
//!
//! with exactly one trailing newline. Values are not escaped and duplicate
//! keywords are not merged.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::directive::Directive;

/// Prefix for the generated temporary file name.
const TEMPFILE_PREFIX: &str = "Dockerfile.";

/// Rendered Dockerfile text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    text: String,
}

impl Manifest {
    /// Render the `FROM` line followed by one line per directive.
    pub fn render(base_image: &str, directives: &[Directive]) -> Self {
        let lines: Vec<String> = std::iter::once(format!("FROM {base_image}"))
            .chain(directives.iter().map(Directive::to_string))
            .collect();

        let mut text = lines.join("\n");
        text.push('\n');
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Write the manifest to a fresh temporary file in `dir` that outlives the process.
    pub fn write_to_tempfile_in(&self, dir: &Path) -> Result<PathBuf> {
        let mut tmpfile = tempfile::Builder::new()
            .prefix(TEMPFILE_PREFIX)
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create temporary Dockerfile in {}", dir.display()))?;
        debug!(path = %tmpfile.path().display(), "Created temporary Dockerfile");

        tmpfile
            .write_all(self.text.as_bytes())
            .context("Failed to write temporary Dockerfile")?;
        tmpfile
            .flush()
            .context("Failed to write temporary Dockerfile")?;

        // Closes the file handle; the path is kept on disk for the user.
        let path = tmpfile
            .into_temp_path()
            .keep()
            .context("Failed to persist temporary Dockerfile")?;

        info!(path = %path.display(), lines = self.line_count(), "Wrote Dockerfile");
        Ok(path)
    }
}
