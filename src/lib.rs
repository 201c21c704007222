//! docker-builder: assemble a Dockerfile from command-line directives and build it
//!
//! Directive flags (`--env`, `--run`, `--label`, ...) become Dockerfile lines
//! in exactly the order they were given. The result is written to a temporary
//! file that is left on disk, optionally opened in an editor, and handed to a
//! docker-compatible engine:
//!
//! 1. `pull <image>` (with `--pull`)
//! 2. `build -f <file> [-t <tag>] <context>`
//! 3. `push <tag>` (with `--push` and `--tag`)

pub mod cli;
pub mod command_runner;
pub mod directive;
pub mod editor;
pub mod engine;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;

pub use cli::{BuildRequest, Invocation, RunOptions};
pub use directive::{Directive, Keyword};
pub use manifest::Manifest;
