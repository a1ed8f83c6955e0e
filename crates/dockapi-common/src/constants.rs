//! System-wide constants and defaults.

/// Application name used in log output.
pub const APP_NAME: &str = "dockapi";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "dockapi";

/// Default TCP port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Default log level when neither `--log-level` nor `LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default compose project directory.
pub const DEFAULT_COMPOSE_PATH: &str = "./";

/// Program invoked for compose operations (`<program> compose ...`).
pub const COMPOSE_PROGRAM: &str = "docker";

/// Length of a generated auth token, in characters.
pub const GENERATED_TOKEN_LENGTH: usize = 32;

/// Scheme prefix expected in the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Value of the `format` query parameter that selects plain-text output.
pub const PRETTY_FORMAT: &str = "pretty";

/// Environment variable holding the bearer token.
pub const ENV_AUTH_TOKEN: &str = "AUTH_TOKEN";
/// Environment variable gating container restarts.
pub const ENV_ALLOW_RESTART: &str = "ALLOW_RESTART";
/// Environment variable gating container stops.
pub const ENV_ALLOW_STOP: &str = "ALLOW_STOP";
/// Environment variable gating container starts.
pub const ENV_ALLOW_START: &str = "ALLOW_START";
/// Environment variable gating container removal.
pub const ENV_ALLOW_REMOVE: &str = "ALLOW_REMOVE";
/// Environment variable gating image pulls.
pub const ENV_ALLOW_PULL: &str = "ALLOW_PULL";
/// Environment variable gating all compose operations.
pub const ENV_ALLOW_COMPOSE: &str = "ALLOW_COMPOSE";
/// Environment variable holding the listen port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Environment variable holding the compose project directory.
pub const ENV_COMPOSE_PATH: &str = "COMPOSE_PATH";
