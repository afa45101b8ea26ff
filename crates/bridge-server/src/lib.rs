//! Shared library surface for the bridge server and its tests.

pub mod api;
pub mod config;
pub mod state;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::state::AppState;

/// Full application: API routes, health check and middleware.
pub fn app(state: Arc<AppState>) -> Router {
    let config = state.config().clone();
    api::routes(&config)
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(api::request_id::tag_request))
        .layer(CorsLayer::permissive())
}

/// Build state from configuration and return the application.
pub fn build_app(config: Config) -> Router {
    app(Arc::new(AppState::new(config)))
}
