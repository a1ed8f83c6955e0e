//! # dockapi-runtime
//!
//! Container lifecycle and image pull executors for dockapi.
//!
//! Handles:
//! - **Engine**: The [`engine::ContainerEngine`] seam the dispatcher calls.
//! - **Docker**: A `bollard`-backed engine talking to the local daemon.
//! - **Progress**: Typed pull progress events and their text rendering.
//! - **Reference**: Splitting image references into repository and tag.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod docker;
pub mod engine;
pub mod error;
pub mod progress;
pub mod reference;

pub use docker::DockerEngine;
pub use engine::{ContainerEngine, PullStream};
pub use error::{EngineError, Result};
pub use progress::PullProgress;
