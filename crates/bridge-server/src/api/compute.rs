//! Bridge computation endpoint.
//!
//! Fills in defaults the caller omitted, runs the planner and records the
//! run as a simulation.

use axum::{extract::State, http::StatusCode, Extension, Json};
use bridge_core::{
    default_fleet, plan_bridge, BridgeError, BridgePlan, BridgeRequest, Coordinates2D, Drone,
    Point3D,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::request_id::RequestId;
use crate::state::{AppState, SimulationRecord};

/// Drone pose as sent by clients: yaw travels with the coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct PoseInput {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub yaw: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DroneInput {
    pub label: String,
    pub coordinates: PoseInput,
}

impl From<DroneInput> for Drone {
    fn from(input: DroneInput) -> Self {
        let PoseInput { x, y, z, yaw } = input.coordinates;
        Drone::new(input.label, Point3D::new(x, y, z), yaw)
    }
}

#[derive(Debug, Deserialize)]
pub struct ComputeRequest {
    pub user: Coordinates2D,
    /// Defaults to the origin
    #[serde(default)]
    pub base: Option<Point3D>,
    /// Defaults to the sample fleet
    #[serde(default)]
    pub initial_drone_positions: Option<Vec<DroneInput>>,
    #[serde(default)]
    pub step_size: Option<f64>,
    #[serde(default)]
    pub max_spacing: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ComputeResponse {
    pub base_coordinates: Point3D,
    pub user_coordinates: Coordinates2D,
    pub drone_positions: BridgePlan,
    pub simulation_id: u64,
}

pub type ApiError = (StatusCode, Json<Value>);

/// Client-facing error body for a planner failure.
pub fn bridge_error_response(err: &BridgeError) -> ApiError {
    let body = match err {
        BridgeError::InsufficientDrones { needed, available } => json!({
            "error": "Insufficient drones to build the bridge",
            "needed": needed,
            "available": available,
            "hint": "Provide more drones or increase max_spacing",
        }),
        other => json!({
            "error": "Invalid computation request",
            "details": other.to_string(),
        }),
    };
    (StatusCode::BAD_REQUEST, Json(body))
}

/// Plan the bridge for one request and store it as a simulation.
pub async fn compute(
    State(state): State<Arc<AppState>>,
    request_id: Option<Extension<RequestId>>,
    Json(req): Json<ComputeRequest>,
) -> Result<Json<ComputeResponse>, ApiError> {
    let started_at = Utc::now();
    let request_id = request_id
        .map(|Extension(id)| id)
        .unwrap_or_else(RequestId::generate);
    let planner = state.config().planner(req.max_spacing, req.step_size);

    let drones: Vec<Drone> = match req.initial_drone_positions {
        Some(inputs) => inputs.into_iter().map(Drone::from).collect(),
        None => default_fleet(),
    };
    let request = BridgeRequest::new(req.user)
        .with_base(req.base.unwrap_or_else(Point3D::origin))
        .with_drones(drones);

    let plan = plan_bridge(&request, &planner).map_err(|err| {
        if err.is_insufficient_drones() {
            tracing::info!("Rejected computation: {}", err);
        } else {
            tracing::warn!("Invalid computation request: {}", err);
        }
        bridge_error_response(&err)
    })?;

    let simulation_id = state.next_simulation_id();
    let BridgeRequest { user, base, drones } = request;
    state.insert_simulation(SimulationRecord {
        simulation_id,
        request_id: request_id.clone(),
        base,
        user,
        max_spacing: planner.max_spacing,
        step_size: planner.step_size,
        drones,
        drone_positions: plan.clone(),
        started_at,
        finished_at: Utc::now(),
    });

    tracing::info!(
        simulation_id,
        relays = plan.len(),
        request_id = %request_id,
        "Computed bridge"
    );

    Ok(Json(ComputeResponse {
        base_coordinates: base,
        user_coordinates: user,
        drone_positions: plan,
        simulation_id,
    }))
}
