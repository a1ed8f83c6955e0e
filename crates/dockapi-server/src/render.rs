//! Response rendering.
//!
//! Every response leaves through this module, in one of two formats chosen
//! by the `format` query parameter:
//! - JSON (default): `{"message": ...}` or `{"error": ...}`.
//! - Pretty (`?format=pretty`): plain-text lines.
//!
//! Image pulls stream their progress instead of a single message; see
//! [`pull`].

use std::convert::Infallible;

use axum::Json;
use axum::body::Body;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use dockapi_common::constants::PRETTY_FORMAT;
use dockapi_common::error::{ErrorKind, OperationError, Outcome};
use dockapi_runtime::{EngineError, PullProgress, PullStream};
use futures::{Stream, StreamExt, stream};

const FORMAT_PARAM: &str = "format";
const TEXT_PLAIN: &str = "text/plain";
const APPLICATION_JSON: &str = "application/json";

/// Output format selected per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// JSON objects.
    #[default]
    Json,
    /// Human-readable plain text.
    Pretty,
}

impl Format {
    /// Reads the format from a request URI.
    ///
    /// Only the first `format` parameter counts. Anything other than
    /// `format=pretty`, including an unparsable query, selects JSON.
    #[must_use]
    pub fn from_uri(uri: &Uri) -> Self {
        let Ok(Query(params)) = Query::<Vec<(String, String)>>::try_from_uri(uri) else {
            return Self::Json;
        };
        match params.iter().find(|(key, _)| key == FORMAT_PARAM) {
            Some((_, value)) if value == PRETTY_FORMAT => Self::Pretty,
            _ => Self::Json,
        }
    }
}

impl<S> FromRequestParts<S> for Format
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}

/// Maps an error kind to its HTTP status.
#[must_use]
pub fn status_for(kind: ErrorKind) -> StatusCode {
    StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Renders a success message with status 200.
#[must_use]
pub fn message(format: Format, message: &str) -> Response {
    match format {
        Format::Json => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": message })),
        )
            .into_response(),
        Format::Pretty => plain(StatusCode::OK, format!("{message}\n")),
    }
}

/// Renders an error with the status its kind maps to.
#[must_use]
pub fn error(format: Format, err: &OperationError) -> Response {
    let status = status_for(err.kind);
    match format {
        Format::Json => {
            (status, Json(serde_json::json!({ "error": err.message }))).into_response()
        }
        Format::Pretty => plain(status, format!("Error: {}\n", err.message)),
    }
}

/// Renders any outcome.
#[must_use]
pub fn outcome(format: Format, outcome: &Outcome) -> Response {
    match outcome {
        Outcome::Success { message: msg } => message(format, msg),
        Outcome::Failure(err) => error(format, err),
    }
}

fn plain(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}

/// Streams an image pull to the caller.
///
/// The response is committed with status 200 before the pull finishes:
/// - JSON: each progress event as one JSON line.
/// - Pretty: each event as `"<status>: <id>"` / `"Progress: <bar>"` lines.
///
/// An error reported by the daemon inside the stream is forwarded as a last
/// `{"error": ...}` or `Error: ...` line. Any other failure is logged and
/// ends the body early; the status cannot change at that point.
#[must_use]
pub fn pull(format: Format, reference: String, events: PullStream) -> Response {
    let content_type = match format {
        Format::Json => APPLICATION_JSON,
        Format::Pretty => TEXT_PLAIN,
    };
    let body = Body::from_stream(pull_body(format, reference, events));
    (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response()
}

fn pull_body(
    format: Format,
    reference: String,
    events: PullStream,
) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
    stream::unfold(Some(events), move |state| {
        let reference = reference.clone();
        async move {
            let mut events = state?;
            loop {
                match events.next().await {
                    None => {
                        tracing::info!(image = %reference, "image pulled");
                        return None;
                    }
                    Some(Ok(event)) => match encode_event(format, &event) {
                        Ok(chunk) if chunk.is_empty() => {}
                        Ok(chunk) => return Some((Ok(chunk), Some(events))),
                        Err(e) => {
                            tracing::error!(
                                image = %reference,
                                error = %e,
                                "failed to encode pull progress"
                            );
                            return None;
                        }
                    },
                    Some(Err(e)) if e.is_reported_by_daemon() => {
                        tracing::error!(image = %reference, error = %e, "image pull failed");
                        return Some((Ok(encode_stream_error(format, &e)), None));
                    }
                    Some(Err(e)) => {
                        tracing::error!(
                            image = %reference,
                            error = %e,
                            "pull progress stream interrupted"
                        );
                        return None;
                    }
                }
            }
        }
    })
}

fn encode_event(format: Format, event: &PullProgress) -> serde_json::Result<Bytes> {
    match format {
        Format::Json => event.to_json_line().map(Bytes::from),
        Format::Pretty => Ok(Bytes::from(event.to_pretty_lines())),
    }
}

fn encode_stream_error(format: Format, err: &EngineError) -> Bytes {
    match format {
        Format::Json => {
            let mut line = serde_json::json!({ "error": err.to_string() }).to_string();
            line.push('\n');
            Bytes::from(line)
        }
        Format::Pretty => Bytes::from(format!("Error: {err}\n")),
    }
}
