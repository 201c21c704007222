//! Custom error types for docker-builder.

use std::process::ExitStatus;
use thiserror::Error;

use crate::engine::EngineStep;

/// Exit code shells use for a command that could not be found or started.
const SPAWN_FAILED_EXIT_CODE: i32 = 127;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Failed to run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{step} failed ({status})")]
    EngineFailed { step: EngineStep, status: ExitStatus },
}

impl BuilderError {
    /// Process exit code to use when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuilderError::Spawn { .. } => SPAWN_FAILED_EXIT_CODE,
            // Killed by a signal has no code.
            BuilderError::EngineFailed { status, .. } => status.code().unwrap_or(1),
        }
    }
}
