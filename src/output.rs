//! Output helpers for consistent CLI output.
//!
//! Status lines go to stderr so stdout carries only what a caller may want to
//! capture: the summary line, or the Dockerfile and commands of a dry run.
//! Colors are only emitted when the target stream supports them.
//! Engine and editor output is never captured, so status lines interleave
//! with whatever the child processes print.

use owo_colors::{OwoColorize, Stream, Style};
use std::path::Path;

/// Standard output helper for consistent CLI formatting.
pub struct Output;

impl Output {
    /// Print a success message with a green checkmark.
    ///
    /// Example: `✓ build finished`
    pub fn success(msg: impl AsRef<str>) {
        eprintln!(
            "{} {}",
            "✓".if_supports_color(Stream::Stderr, |s| s.style(Style::new().green().bold())),
            msg.as_ref()
        );
    }

    /// Print an error message with a red X.
    pub fn error(msg: impl AsRef<str>) {
        eprintln!(
            "{} {}",
            "✗".if_supports_color(Stream::Stderr, |s| s.style(Style::new().red().bold())),
            msg.as_ref().if_supports_color(Stream::Stderr, |s| s.red())
        );
    }

    /// Print a warning message with a yellow warning symbol.
    pub fn warning(msg: impl AsRef<str>) {
        eprintln!(
            "{} {}",
            "⚠".if_supports_color(Stream::Stderr, |s| s.yellow()),
            msg.as_ref()
        );
    }

    /// Print an info/status message with a cyan arrow.
    ///
    /// Example: `→ Opening Dockerfile in nano`
    pub fn info(msg: impl AsRef<str>) {
        eprintln!(
            "{} {}",
            "→".if_supports_color(Stream::Stderr, |s| s.cyan()),
            msg.as_ref().if_supports_color(Stream::Stderr, |s| s.dimmed())
        );
    }

    /// Print the running command (for transparency).
    ///
    /// Example: `Running: docker pull alpine:3`
    pub fn running(cmd: impl AsRef<str>) {
        eprintln!(
            "{} {}",
            "Running:".if_supports_color(Stream::Stderr, |s| s.dimmed()),
            cmd.as_ref().if_supports_color(Stream::Stderr, |s| s.dimmed())
        );
    }

    /// Print a dry-run message to stdout.
    ///
    /// Example: `[dry-run] Would run: docker push me/app:1`
    pub fn dry_run(msg: impl AsRef<str>) {
        println!(
            "{} {}",
            "[dry-run]".if_supports_color(Stream::Stdout, |s| s.dimmed()),
            msg.as_ref().if_supports_color(Stream::Stdout, |s| s.dimmed())
        );
    }

    /// Print a block of text verbatim to stdout.
    pub fn verbatim(text: impl AsRef<str>) {
        print!("{}", text.as_ref());
    }

    /// Print where the generated Dockerfile was left.
    pub fn summary(dockerfile: &Path) {
        println!("Dockerfile located at: {}", dockerfile.display());
    }
}
