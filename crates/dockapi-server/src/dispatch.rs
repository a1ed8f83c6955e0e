//! Operation dispatch: validation, allow-flag policy, and execution.
//!
//! [`plan`] turns a decoded request into an [`Action`] or a failure without
//! touching any engine. [`Dispatcher::dispatch`] runs the planned action,
//! so a request rejected by policy can never reach an executor.

use std::sync::Arc;

use dockapi_common::config::Settings;
use dockapi_common::error::{OperationError, Result};
use dockapi_common::types::{
    Action, ComposeOperation, ContainerOperation, Domain, ImageOperation, OperationRequest,
};
use dockapi_compose::{ComposeInvocation, ComposeRunner};
use dockapi_runtime::{ContainerEngine, PullStream};
use futures::{StreamExt, stream};

/// Validates a request and applies the allow-flag policy.
///
/// Checks run in a fixed order: required target, operation name, policy.
///
/// # Errors
///
/// - `BadRequest` when the target is empty (container and compose) or the
///   operation is unknown for the domain.
/// - `Forbidden` when the operation's allow flag is off.
pub fn plan(settings: &Settings, request: &OperationRequest) -> Result<Action> {
    match request.domain {
        Domain::Container => {
            if request.target.is_empty() {
                return Err(OperationError::bad_request("Container name is required"));
            }
            let operation: ContainerOperation = parse_operation(&request.operation)?;
            if !settings.allows_container(operation) {
                return Err(not_allowed(operation.label()));
            }
            Ok(Action::Container {
                operation,
                name: request.target.clone(),
            })
        }
        Domain::Image => {
            let operation: ImageOperation = parse_operation(&request.operation)?;
            if !settings.allow_pull {
                return Err(not_allowed(operation.label()));
            }
            Ok(Action::PullImage {
                reference: request.target.clone(),
            })
        }
        Domain::Compose => {
            if request.target.is_empty() {
                return Err(OperationError::bad_request("Service name is required"));
            }
            let operation: ComposeOperation = parse_operation(&request.operation)?;
            if !settings.allow_compose {
                return Err(OperationError::forbidden("Compose operations not allowed"));
            }
            Ok(Action::Compose {
                operation,
                service: request.target.clone(),
                profile: request.profile.clone(),
            })
        }
    }
}

fn parse_operation<T: std::str::FromStr>(name: &str) -> Result<T> {
    name.parse()
        .map_err(|_| OperationError::bad_request("Invalid operation"))
}

fn not_allowed(label: &str) -> OperationError {
    OperationError::forbidden(format!("{label} operation not allowed"))
}

/// What a dispatched request produced.
pub enum Dispatched {
    /// A completed operation with its success message.
    Message(String),
    /// An image pull whose first event has arrived; the rest is streamed.
    Pull {
        /// Reference being pulled.
        reference: String,
        /// Progress events, starting with the first one.
        events: PullStream,
    },
}

impl std::fmt::Debug for Dispatched {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Pull { reference, .. } => f
                .debug_struct("Pull")
                .field("reference", reference)
                .finish_non_exhaustive(),
        }
    }
}

/// Routes validated actions to the container engine or the compose runner.
#[derive(Clone)]
pub struct Dispatcher {
    settings: Arc<Settings>,
    engine: Arc<dyn ContainerEngine>,
    compose: Arc<dyn ComposeRunner>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given executors.
    pub fn new(
        settings: Arc<Settings>,
        engine: Arc<dyn ContainerEngine>,
        compose: Arc<dyn ComposeRunner>,
    ) -> Self {
        Self {
            settings,
            engine,
            compose,
        }
    }

    /// Settings the policy is evaluated against.
    #[must_use]
    pub const fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }

    /// Plans and executes one request.
    ///
    /// # Errors
    ///
    /// Returns the planning failure, or `Internal` when the executor fails.
    pub async fn dispatch(&self, request: OperationRequest) -> Result<Dispatched> {
        let action = plan(&self.settings, &request).inspect_err(|e| {
            tracing::debug!(
                domain = %request.domain,
                operation = %request.operation,
                kind = %e.kind,
                error = %e,
                "request rejected"
            );
        })?;
        self.execute(action).await
    }

    async fn execute(&self, action: Action) -> Result<Dispatched> {
        match action {
            Action::Container { operation, name } => self.run_container(operation, name).await,
            Action::PullImage { reference } => self.start_pull(reference).await,
            Action::Compose {
                operation,
                service,
                profile,
            } => self.run_compose(operation, service, profile).await,
        }
    }

    async fn run_container(
        &self,
        operation: ContainerOperation,
        name: String,
    ) -> Result<Dispatched> {
        if let Err(e) = self.engine.run_container_operation(operation, &name).await {
            tracing::error!(
                container = %name,
                operation = %operation,
                error = %e,
                "container operation failed"
            );
            return Err(OperationError::internal(format!(
                "Failed to {operation} container: {e}"
            )));
        }
        tracing::info!(container = %name, operation = %operation, "container operation completed");
        Ok(Dispatched::Message(format!(
            "Operation {operation} completed successfully on container {name}"
        )))
    }

    /// Starts the pull and waits for its first event, so that a pull that
    /// fails immediately still gets an error status. A pull that ends
    /// without any event is reported as a plain success message.
    async fn start_pull(&self, reference: String) -> Result<Dispatched> {
        let mut events = self.engine.pull_image(&reference);
        match events.next().await {
            Some(Err(e)) => {
                tracing::error!(image = %reference, error = %e, "failed to pull image");
                Err(OperationError::internal(format!("Failed to pull image: {e}")))
            }
            Some(Ok(first)) => Ok(Dispatched::Pull {
                reference,
                events: Box::pin(stream::once(async move { Ok(first) }).chain(events)),
            }),
            None => {
                tracing::info!(image = %reference, "image pulled without progress output");
                Ok(Dispatched::Message(format!(
                    "Operation pull completed successfully on image {reference}"
                )))
            }
        }
    }

    async fn run_compose(
        &self,
        operation: ComposeOperation,
        service: String,
        profile: Option<String>,
    ) -> Result<Dispatched> {
        let mut invocation = ComposeInvocation::new(operation).service(service.clone());
        if let Some(profile) = profile {
            invocation = invocation.profile(profile);
        }

        if let Err(e) = self.compose.run(&invocation).await {
            tracing::error!(
                service = %service,
                operation = %operation,
                error = %e,
                "compose operation failed"
            );
            return Err(OperationError::internal(format!(
                "Failed to perform operation: {e}"
            )));
        }
        tracing::info!(service = %service, operation = %operation, "compose operation completed");
        Ok(Dispatched::Message(format!(
            "Operation {operation} completed successfully on service {service}"
        )))
    }
}
