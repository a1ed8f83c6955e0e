//! Docker Engine API backend.

use async_trait::async_trait;
use bollard::Docker;
use bollard::container::{RemoveContainerOptions, StartContainerOptions};
use bollard::image::CreateImageOptions;
use futures::{StreamExt, future, stream};

use crate::engine::{ContainerEngine, PullStream};
use crate::error::{EngineError, Result};
use crate::progress::PullProgress;
use crate::reference::split_reference;

/// Container engine backed by the local Docker daemon.
///
/// Cloning is cheap: the underlying client shares its connection pool.
#[derive(Debug, Clone)]
pub struct DockerEngine {
    docker: Docker,
}

impl DockerEngine {
    /// Wraps an existing client.
    #[must_use]
    pub const fn new(docker: Docker) -> Self {
        Self { docker }
    }

    /// Connects using the local defaults (`DOCKER_HOST` or the platform
    /// socket) and negotiates the API version with the daemon.
    ///
    /// A failed negotiation is logged and the client keeps its built-in
    /// API version, so a daemon that is down at startup does not prevent
    /// the server from coming up.
    ///
    /// # Errors
    ///
    /// Returns an error if the client configuration is invalid.
    pub async fn connect() -> Result<Self> {
        let docker = Docker::connect_with_local_defaults()?;
        let docker = match docker.clone().negotiate_version().await {
            Ok(negotiated) => {
                tracing::debug!(
                    version = ?negotiated.client_version(),
                    "negotiated docker API version"
                );
                negotiated
            }
            Err(e) => {
                tracing::warn!(error = %e, "docker API version negotiation failed");
                docker
            }
        };
        Ok(Self { docker })
    }
}

#[async_trait]
impl ContainerEngine for DockerEngine {
    async fn restart_container(&self, name: &str) -> Result<()> {
        tracing::debug!(container = name, "restarting container");
        self.docker.restart_container(name, None).await?;
        Ok(())
    }

    async fn stop_container(&self, name: &str) -> Result<()> {
        tracing::debug!(container = name, "stopping container");
        self.docker.stop_container(name, None).await?;
        Ok(())
    }

    async fn start_container(&self, name: &str) -> Result<()> {
        tracing::debug!(container = name, "starting container");
        self.docker
            .start_container(name, None::<StartContainerOptions<String>>)
            .await?;
        Ok(())
    }

    async fn remove_container(&self, name: &str) -> Result<()> {
        tracing::debug!(container = name, "force-removing container");
        let options = RemoveContainerOptions {
            force: true,
            ..Default::default()
        };
        self.docker.remove_container(name, Some(options)).await?;
        Ok(())
    }

    fn pull_image(&self, reference: &str) -> PullStream {
        let Some(parts) = split_reference(reference) else {
            let err = EngineError::InvalidReference {
                reference: reference.to_string(),
            };
            return Box::pin(stream::once(future::ready(Err(err))));
        };

        tracing::debug!(
            image = reference,
            from_image = parts.from_image,
            tag = parts.tag,
            "pulling image"
        );
        let options = CreateImageOptions {
            from_image: parts.from_image.to_string(),
            tag: parts.tag.to_string(),
            ..Default::default()
        };

        let events = self
            .docker
            .create_image(Some(options), None, None)
            .map(|item| item.map(PullProgress::from).map_err(pull_error));
        Box::pin(events)
    }
}

fn pull_error(err: bollard::errors::Error) -> EngineError {
    match err {
        bollard::errors::Error::DockerStreamError { error } => EngineError::Pull { message: error },
        other => EngineError::Docker(other),
    }
}
