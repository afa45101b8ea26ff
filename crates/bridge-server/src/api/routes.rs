//! REST API routes.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::{compute, simulations};
use crate::config::Config;
use crate::state::AppState;

/// Create the API router, mounted under the configured base path.
pub fn create_router(config: &Config) -> Router<Arc<AppState>> {
    let uav_routes = Router::new()
        .route("/uav/compute", post(compute::compute))
        .route("/uav/compute/", post(compute::compute))
        .route("/uav/simulations", get(simulations::list_simulations))
        .route("/uav/simulations/:id", get(simulations::get_simulation));

    if config.base_api_path.is_empty() {
        uav_routes
    } else {
        Router::new().nest(&config.base_api_path, uav_routes)
    }
}
