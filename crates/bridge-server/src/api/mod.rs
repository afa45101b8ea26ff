//! API routes for the bridge server.

pub mod compute;
pub mod request_id;
mod routes;
pub mod simulations;

use crate::config::Config;
use axum::Router;

pub fn routes(config: &Config) -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router(config)
}

#[cfg(test)]
mod tests;
