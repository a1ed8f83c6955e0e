//! # dockapi-common
//!
//! Shared types, error definitions, settings, and constants used across the
//! entire dockapi workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and holds the request model, the allow-flag settings and
//! the error taxonomy the other crates build upon.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
