//! # dockapi-compose
//!
//! Runs `docker compose` subcommands for a single configured project.
//!
//! The project directory is handed to each child process as its working
//! directory; the server's own working directory is never changed, so
//! concurrent compose requests do not interfere with each other.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod command;
pub mod error;
pub mod runner;

pub use command::ComposeInvocation;
pub use error::{ComposeError, Result};
pub use runner::{ComposeOutput, ComposeRunner, DockerCompose};
