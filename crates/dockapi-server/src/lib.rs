//! # dockapi-server
//!
//! HTTP surface for triggering container, image, and compose operations.
//!
//! ## Request path
//!
//! ```text
//! POST /container ─┐
//! POST /image ─────┼─► auth gate ─► body decode ─► dispatcher ─► executor
//! POST /compose ───┘                                    │
//!                                                       ▼
//!                                          renderer (JSON or ?format=pretty)
//! ```
//!
//! Every failure on that path becomes an
//! [`OperationError`](dockapi_common::error::OperationError) and is rendered
//! in the format the caller asked for.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod api;
pub mod auth;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod render;
pub mod server;
pub mod trace;
pub mod wire;

pub use api::{AppState, create_router};
pub use dispatch::{Dispatched, Dispatcher};
pub use error::{Result, ServerError};
pub use render::Format;
pub use server::ApiServer;
