//! Compose execution errors.

use std::path::PathBuf;
use std::process::ExitStatus;

use dockapi_common::types::ComposeOperation;
use thiserror::Error;

/// Errors that can occur while running a compose subcommand.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The compose program could not be started or awaited.
    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        /// Program that was invoked.
        program: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The project directory does not exist or is not a directory.
    #[error("compose project directory not found: {}", .path.display())]
    ProjectDir {
        /// Configured project directory.
        path: PathBuf,
    },

    /// The subcommand exited unsuccessfully.
    #[error("docker compose {operation} failed: {status}\nOutput: {output}")]
    Failed {
        /// Subcommand that failed.
        operation: ComposeOperation,
        /// Exit status of the child.
        status: ExitStatus,
        /// Combined standard output and standard error.
        output: String,
    },
}

/// Result alias for compose operations.
pub type Result<T> = std::result::Result<T, ComposeError>;
