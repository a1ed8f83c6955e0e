//! # dockapi
//!
//! Minimal HTTP API that restarts, stops, starts and removes containers,
//! pulls images, and runs Docker Compose commands on the local host.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

mod config;
mod output;
mod token;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dockapi_common::constants::{APP_NAME, GENERATED_TOKEN_LENGTH};
use dockapi_compose::DockerCompose;
use dockapi_runtime::DockerEngine;
use dockapi_server::{ApiServer, AppState, Dispatcher};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = cli.settings();

    if cli.help_api {
        output::print_api_usage(&settings);
        return Ok(());
    }

    init_tracing(&cli.log_level)?;

    if settings.auth_token.is_empty() {
        settings.auth_token = token::generate(GENERATED_TOKEN_LENGTH);
        output::print_generated_token(&settings.auth_token);
    }
    output::print_allowed_operations(&settings);

    let engine = DockerEngine::connect()
        .await
        .context("failed to create the Docker client")?;
    let compose = DockerCompose::locate(settings.compose_project_path.clone());
    tracing::debug!(
        program = %compose.program().display(),
        project = %compose.project_dir().display(),
        "compose runner configured"
    );

    let dispatcher = Dispatcher::new(Arc::new(settings), Arc::new(engine), Arc::new(compose));
    let server = ApiServer::new(AppState::new(dispatcher));
    tracing::info!(
        app = APP_NAME,
        version = env!("CARGO_PKG_VERSION"),
        addr = %server.addr(),
        "configuration loaded"
    );

    server.run().await?;
    Ok(())
}

/// Installs the JSON log subscriber. `level` is the default directive;
/// `RUST_LOG` still takes precedence when set.
fn init_tracing(level: &str) -> anyhow::Result<()> {
    let default: LevelFilter = level
        .parse()
        .with_context(|| format!("invalid log level: {level}"))?;
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .init();
    Ok(())
}
