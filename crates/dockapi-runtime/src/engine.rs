//! Container engine abstraction.

use std::pin::Pin;

use async_trait::async_trait;
use dockapi_common::types::ContainerOperation;
use futures::Stream;

use crate::error::Result;
use crate::progress::PullProgress;

/// Stream of progress events produced by an image pull.
///
/// Consumers stop reading at the first error.
pub type PullStream = Pin<Box<dyn Stream<Item = Result<PullProgress>> + Send>>;

/// Container engine the dispatcher delegates to.
///
/// Implementors wrap a concrete engine client. Every call is idempotent from
/// the caller's perspective and performs no retries.
#[async_trait]
pub trait ContainerEngine: Send + Sync {
    /// Restarts the named container.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects or fails the call.
    async fn restart_container(&self, name: &str) -> Result<()>;

    /// Stops the named container.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects or fails the call.
    async fn stop_container(&self, name: &str) -> Result<()>;

    /// Starts the named container.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects or fails the call.
    async fn start_container(&self, name: &str) -> Result<()>;

    /// Force-removes the named container, stopping it first if running.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects or fails the call.
    async fn remove_container(&self, name: &str) -> Result<()>;

    /// Starts pulling an image and returns its progress stream.
    ///
    /// Nothing is sent to the engine until the stream is first polled.
    fn pull_image(&self, reference: &str) -> PullStream;

    /// Runs a container lifecycle operation by name.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying lifecycle call.
    async fn run_container_operation(
        &self,
        operation: ContainerOperation,
        name: &str,
    ) -> Result<()> {
        match operation {
            ContainerOperation::Restart => self.restart_container(name).await,
            ContainerOperation::Stop => self.stop_container(name).await,
            ContainerOperation::Start => self.start_container(name).await,
            ContainerOperation::Remove => self.remove_container(name).await,
        }
    }
}
