//! Server lifecycle errors.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that stop the server itself. Request-level failures never end up
/// here; they are rendered as responses.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result alias for server lifecycle operations.
pub type Result<T> = std::result::Result<T, ServerError>;
