//! Request-level error taxonomy.
//!
//! Every failure a request can hit is reduced to an [`OperationError`]: a
//! single human-readable message plus an [`ErrorKind`] that decides the HTTP
//! status. Crates that talk to external engines define their own error enums
//! and are mapped into this one at the dispatch boundary.

use std::fmt;

use thiserror::Error;

/// Category of a request failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing input.
    BadRequest,
    /// Missing or incorrect credential.
    Unauthorized,
    /// Operation disallowed by the allow-flag policy.
    Forbidden,
    /// External engine or subprocess failure.
    Internal,
}

impl ErrorKind {
    /// Returns the HTTP status code this kind maps to.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// A failed request: what went wrong and how to report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OperationError {
    /// Category, which selects the HTTP status.
    pub kind: ErrorKind,
    /// Message shown to the caller.
    pub message: String,
}

impl OperationError {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Malformed or missing input.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// Missing or incorrect credential.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Operation disallowed by policy.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// External engine or subprocess failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

/// Result of a single request, rendered exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation completed.
    Success {
        /// Message shown to the caller.
        message: String,
    },
    /// The operation was rejected or failed.
    Failure(OperationError),
}

impl Outcome {
    /// Creates a success outcome.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }
}

impl From<OperationError> for Outcome {
    fn from(err: OperationError) -> Self {
        Self::Failure(err)
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, OperationError>;
