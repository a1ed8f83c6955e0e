//! Errors raised by the container engine.

use thiserror::Error;

/// Errors that can occur while talking to the container engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The Docker API call failed.
    #[error("{0}")]
    Docker(#[from] bollard::errors::Error),

    /// The image reference cannot be pulled.
    #[error("invalid reference format: {reference:?}")]
    InvalidReference {
        /// Reference as received.
        reference: String,
    },

    /// The daemon reported an error inside the pull progress stream.
    #[error("{message}")]
    Pull {
        /// Message reported by the daemon.
        message: String,
    },
}

impl EngineError {
    /// Returns whether the daemon itself reported the failure inside an
    /// otherwise healthy progress stream.
    #[must_use]
    pub const fn is_reported_by_daemon(&self) -> bool {
        matches!(self, Self::Pull { .. })
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
