//! JSON request bodies.
//!
//! Missing and `null` fields decode as empty strings; which of them are
//! required is decided by the dispatcher, not here.

use dockapi_common::error::{OperationError, Result};
use dockapi_common::types::{Domain, OperationRequest};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Body of `POST /container`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContainerBody {
    /// `restart`, `stop`, `start` or `remove`.
    #[serde(deserialize_with = "null_as_empty")]
    pub operation: String,
    /// Container name or ID.
    #[serde(deserialize_with = "null_as_empty")]
    pub container: String,
}

/// Body of `POST /image`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageBody {
    /// `pull`.
    #[serde(deserialize_with = "null_as_empty")]
    pub operation: String,
    /// Image reference.
    #[serde(deserialize_with = "null_as_empty")]
    pub image: String,
}

/// Body of `POST /compose`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ComposeBody {
    /// `pull`, `up`, `down`, `restart`, `stop` or `start`.
    #[serde(deserialize_with = "null_as_empty")]
    pub operation: String,
    /// Service name.
    #[serde(deserialize_with = "null_as_empty")]
    pub service: String,
    /// Optional compose profile.
    #[serde(deserialize_with = "null_as_empty")]
    pub profile: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<ContainerBody> for OperationRequest {
    fn from(body: ContainerBody) -> Self {
        Self::new(Domain::Container, body.operation, body.container)
    }
}

impl From<ImageBody> for OperationRequest {
    fn from(body: ImageBody) -> Self {
        Self::new(Domain::Image, body.operation, body.image)
    }
}

impl From<ComposeBody> for OperationRequest {
    fn from(body: ComposeBody) -> Self {
        Self::new(Domain::Compose, body.operation, body.service).with_profile(body.profile)
    }
}

/// Decodes a request body into an [`OperationRequest`].
///
/// # Errors
///
/// Returns `BadRequest("Invalid request body")` if the body is not a JSON
/// object of the expected shape.
pub fn decode<B>(body: &[u8]) -> Result<OperationRequest>
where
    B: DeserializeOwned + Into<OperationRequest>,
{
    serde_json::from_slice::<B>(body)
        .map(Into::into)
        .map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            OperationError::bad_request("Invalid request body")
        })
}
