//! Immutable runtime settings.

use std::fmt;
use std::path::PathBuf;

use crate::constants::{DEFAULT_COMPOSE_PATH, DEFAULT_PORT};
use crate::types::ContainerOperation;

/// Settings built once at startup and shared read-only by every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Bearer token required on every request. Empty disables the check.
    pub auth_token: String,
    /// Whether `restart` is allowed on containers.
    pub allow_restart: bool,
    /// Whether `stop` is allowed on containers.
    pub allow_stop: bool,
    /// Whether `start` is allowed on containers.
    pub allow_start: bool,
    /// Whether `remove` is allowed on containers.
    pub allow_remove: bool,
    /// Whether image pulls are allowed.
    pub allow_pull: bool,
    /// Single gate for every compose operation.
    pub allow_compose: bool,
    /// TCP port the server listens on.
    pub port: u16,
    /// Directory compose commands run in.
    pub compose_project_path: PathBuf,
}

impl Settings {
    /// Returns whether the given container operation is allowed.
    #[must_use]
    pub const fn allows_container(&self, operation: ContainerOperation) -> bool {
        match operation {
            ContainerOperation::Restart => self.allow_restart,
            ContainerOperation::Stop => self.allow_stop,
            ContainerOperation::Start => self.allow_start,
            ContainerOperation::Remove => self.allow_remove,
        }
    }

    /// Returns whether authorization is disabled (no token configured).
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.auth_token.is_empty()
    }

    /// One-line summary of the allow flags, printed at startup.
    #[must_use]
    pub fn allowed_operations_summary(&self) -> String {
        format!(
            "Allowed operations: restart={}, stop={}, start={}, remove={}, pull={}, compose={}",
            self.allow_restart,
            self.allow_stop,
            self.allow_start,
            self.allow_remove,
            self.allow_pull,
            self.allow_compose,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth_token: String::new(),
            allow_restart: true,
            allow_stop: true,
            allow_start: true,
            allow_remove: false,
            allow_pull: true,
            allow_compose: true,
            port: DEFAULT_PORT,
            compose_project_path: PathBuf::from(DEFAULT_COMPOSE_PATH),
        }
    }
}

// The token never reaches log output.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("auth_token", &if self.is_open() { "<none>" } else { "<redacted>" })
            .field("allow_restart", &self.allow_restart)
            .field("allow_stop", &self.allow_stop)
            .field("allow_start", &self.allow_start)
            .field("allow_remove", &self.allow_remove)
            .field("allow_pull", &self.allow_pull)
            .field("allow_compose", &self.allow_compose)
            .field("port", &self.port)
            .field("compose_project_path", &self.compose_project_path)
            .finish()
    }
}
