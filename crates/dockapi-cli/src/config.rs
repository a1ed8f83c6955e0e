//! Command-line and environment configuration.
//!
//! Every setting can come from a flag or an environment variable; flags
//! win. Underscore spellings (`--allow_restart`) are accepted as aliases.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use dockapi_common::config::Settings;
use dockapi_common::constants::{
    BIN_NAME, DEFAULT_COMPOSE_PATH, DEFAULT_LOG_LEVEL, DEFAULT_PORT, ENV_ALLOW_COMPOSE,
    ENV_ALLOW_PULL, ENV_ALLOW_REMOVE, ENV_ALLOW_RESTART, ENV_ALLOW_START, ENV_ALLOW_STOP,
    ENV_AUTH_TOKEN, ENV_COMPOSE_PATH, ENV_LOG_LEVEL, ENV_PORT,
};

/// dockapi: HTTP API for Docker container, image, and compose operations.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Bearer token for API requests. A random one is generated when empty.
    #[arg(
        long,
        alias = "auth_token",
        env = ENV_AUTH_TOKEN,
        default_value = "",
        hide_env_values = true
    )]
    pub auth_token: String,

    /// Allow container restart operations.
    #[arg(
        long,
        alias = "allow_restart",
        env = ENV_ALLOW_RESTART,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub allow_restart: bool,

    /// Allow container stop operations.
    #[arg(
        long,
        alias = "allow_stop",
        env = ENV_ALLOW_STOP,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub allow_stop: bool,

    /// Allow container start operations.
    #[arg(
        long,
        alias = "allow_start",
        env = ENV_ALLOW_START,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub allow_start: bool,

    /// Allow container remove operations (forced).
    #[arg(
        long,
        alias = "allow_remove",
        env = ENV_ALLOW_REMOVE,
        default_value_t = false,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub allow_remove: bool,

    /// Allow image pull operations.
    #[arg(
        long,
        alias = "allow_pull",
        env = ENV_ALLOW_PULL,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub allow_pull: bool,

    /// Allow Docker Compose operations.
    #[arg(
        long,
        alias = "allow_compose",
        env = ENV_ALLOW_COMPOSE,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set
    )]
    pub allow_compose: bool,

    /// Port to listen on.
    #[arg(long, env = ENV_PORT, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    #[arg(long, alias = "log_level", env = ENV_LOG_LEVEL, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Path to the Docker Compose project.
    #[arg(
        long,
        alias = "compose_path",
        env = ENV_COMPOSE_PATH,
        default_value = DEFAULT_COMPOSE_PATH
    )]
    pub compose_path: PathBuf,

    /// Show API usage examples and exit.
    #[arg(long, alias = "help_api")]
    pub help_api: bool,
}

impl Cli {
    /// Builds the runtime settings. The token is taken as given, even empty.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            auth_token: self.auth_token.clone(),
            allow_restart: self.allow_restart,
            allow_stop: self.allow_stop,
            allow_start: self.allow_start,
            allow_remove: self.allow_remove,
            allow_pull: self.allow_pull,
            allow_compose: self.allow_compose,
            port: self.port,
            compose_project_path: self.compose_path.clone(),
        }
    }
}
