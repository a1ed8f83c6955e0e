//! Bearer-token authorization gate.
//!
//! When no token is configured every request passes. This open mode is an
//! insecure default kept for compatibility; the CLI always generates a token
//! when none is supplied, so it is only reachable by embedding the router
//! with such settings.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use dockapi_common::config::Settings;
use dockapi_common::constants::BEARER_PREFIX;
use dockapi_common::error::{OperationError, Result};

use crate::render::{self, Format};

/// Checks an `Authorization` header value against the configured token.
///
/// # Errors
///
/// Returns `Unauthorized` when a token is configured and the header is
/// missing or not exactly `Bearer <token>`.
pub fn check_authorization(token: &str, header: Option<&HeaderValue>) -> Result<()> {
    if token.is_empty() {
        return Ok(());
    }
    let Some(value) = header else {
        return Err(OperationError::unauthorized("Missing authorization token"));
    };
    let presented = value.as_bytes();
    let matches = presented.len() == BEARER_PREFIX.len() + token.len()
        && presented.starts_with(BEARER_PREFIX.as_bytes())
        && &presented[BEARER_PREFIX.len()..] == token.as_bytes();
    if matches {
        Ok(())
    } else {
        Err(OperationError::unauthorized("Invalid authorization token"))
    }
}

/// Axum middleware rejecting requests that fail [`check_authorization`].
///
/// Rejections are rendered in the format the request asked for and logged
/// with the remote address when the server exposes it.
pub async fn auth_middleware(
    State(settings): State<Arc<Settings>>,
    format: Format,
    request: Request,
    next: Next,
) -> Response {
    let presented = request.headers().get(header::AUTHORIZATION);
    if let Err(err) = check_authorization(&settings.auth_token, presented) {
        let remote = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map_or_else(
                || "unknown".to_string(),
                |ConnectInfo(addr)| addr.to_string(),
            );
        tracing::warn!(remote = %remote, reason = %err, "rejected unauthorized request");
        return render::error(format, &err);
    }
    next.run(request).await
}
