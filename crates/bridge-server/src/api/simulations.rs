//! Stored simulation lookup.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::api::compute::ApiError;
use crate::state::{AppState, SimulationRecord, SimulationSummary};

/// List stored simulations.
pub async fn list_simulations(State(state): State<Arc<AppState>>) -> Json<Vec<SimulationSummary>> {
    Json(state.list_simulations())
}

/// Get a stored simulation by ID.
pub async fn get_simulation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<SimulationRecord>, ApiError> {
    state.get_simulation(id).map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Simulation not found",
                "simulation_id": id,
            })),
        )
    })
}
