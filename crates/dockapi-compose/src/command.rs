//! Compose command-line construction.

use dockapi_common::types::ComposeOperation;

/// One compose subcommand to run against the configured project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeInvocation {
    /// Subcommand to run.
    pub operation: ComposeOperation,
    /// Service to target; all services when absent.
    pub service: Option<String>,
    /// Profile to activate.
    pub profile: Option<String>,
}

impl ComposeInvocation {
    /// Creates an invocation targeting every service, without a profile.
    #[must_use]
    pub const fn new(operation: ComposeOperation) -> Self {
        Self {
            operation,
            service: None,
            profile: None,
        }
    }

    /// Targets a single service. Empty names are ignored.
    #[must_use]
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into()).filter(|s| !s.is_empty());
        self
    }

    /// Activates a profile. Empty names are ignored.
    #[must_use]
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into()).filter(|p| !p.is_empty());
        self
    }

    /// Arguments passed to the compose program:
    /// `compose [--profile <profile>] <operation> [<service>]`.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["compose".to_string()];
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        args.push(self.operation.as_str().to_string());
        if let Some(service) = &self.service {
            args.push(service.clone());
        }
        args
    }
}
