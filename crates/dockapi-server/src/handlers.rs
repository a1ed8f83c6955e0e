//! Endpoint handlers.

use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::Response;
use bytes::Bytes;
use dockapi_common::error::{OperationError, Outcome, Result};
use dockapi_common::types::OperationRequest;

use crate::api::AppState;
use crate::dispatch::Dispatched;
use crate::render::{self, Format};
use crate::wire::{self, ComposeBody, ContainerBody, ImageBody};

/// Request body, or the reason axum could not buffer it.
type RawBody = std::result::Result<Bytes, BytesRejection>;

/// `POST /container`: restart, stop, start, or remove a container.
pub async fn container(State(state): State<AppState>, format: Format, body: RawBody) -> Response {
    let request = read_body(body).and_then(|body| wire::decode::<ContainerBody>(&body));
    respond(&state, format, request).await
}

/// `POST /image`: pull an image, streaming its progress.
pub async fn image(State(state): State<AppState>, format: Format, body: RawBody) -> Response {
    let request = read_body(body).and_then(|body| wire::decode::<ImageBody>(&body));
    respond(&state, format, request).await
}

/// `POST /compose`: run a compose subcommand for one service.
pub async fn compose(State(state): State<AppState>, format: Format, body: RawBody) -> Response {
    let request = read_body(body).and_then(|body| wire::decode::<ComposeBody>(&body));
    respond(&state, format, request).await
}

/// Reports a body that could not be read, e.g. one over the size limit, as
/// an invalid body instead of axum's plain-text rejection.
fn read_body(body: RawBody) -> Result<Bytes> {
    body.map_err(|rejection| {
        tracing::debug!(
            status = %rejection.status(),
            error = %rejection,
            "failed to read request body"
        );
        OperationError::bad_request("Invalid request body")
    })
}

async fn respond(state: &AppState, format: Format, request: Result<OperationRequest>) -> Response {
    let request = match request {
        Ok(request) => request,
        Err(err) => return render::error(format, &err),
    };

    let outcome = match state.dispatcher.dispatch(request).await {
        Ok(Dispatched::Pull { reference, events }) => {
            return render::pull(format, reference, events);
        }
        Ok(Dispatched::Message(message)) => Outcome::success(message),
        Err(err) => err.into(),
    };
    render::outcome(format, &outcome)
}
