//! HTTP router.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::post;
use dockapi_common::config::Settings;

use crate::auth::auth_middleware;
use crate::dispatch::Dispatcher;
use crate::handlers;
use crate::trace::request_id_middleware;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable runtime settings.
    pub settings: Arc<Settings>,
    /// Dispatcher over the configured executors.
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Builds the state around a dispatcher, sharing its settings.
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            settings: Arc::clone(dispatcher.settings()),
            dispatcher: Arc::new(dispatcher),
        }
    }
}

/// Creates the router with all endpoints.
///
/// Every operation route sits behind the authorization gate; the request ID
/// layer wraps everything, including rejections.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/container", post(handlers::container))
        .route("/image", post(handlers::image))
        .route("/compose", post(handlers::compose))
        .route_layer(middleware::from_fn_with_state(
            state.settings.clone(),
            auth_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
