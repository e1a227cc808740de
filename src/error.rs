//! Centralized error types for gantry
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use std::process::ExitStatus;

use thiserror::Error;

/// Top-level error type for the bootstrap sequence
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),

    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),
}

/// Working-directory and environment setup errors
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to locate the entrypoint executable: {0}")]
    ExeLocation(std::io::Error),

    #[error("Project root could not be resolved from the entrypoint location. Set APP_ROOT to override")]
    RootNotFound,

    #[error("Failed to enter {path}: {source}")]
    Chdir {
        path: String,
        source: std::io::Error,
    },
}

/// Migration runner errors
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Migration runner {runner} could not be started: {source}")]
    RunnerUnavailable {
        runner: String,
        source: std::io::Error,
    },

    #[error("Migration runner exited with {status}")]
    RunnerFailed { status: ExitStatus },
}

/// Application launch errors
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Launch command is empty and no default is configured")]
    EmptyCommand,

    #[error("Application executable not found: {program}")]
    ExecutableNotFound { program: String },
}
