//! Drone fleet files.
//!
//! Same shape as the API's `initial_drone_positions`: a JSON array of
//! `{ "label": ..., "coordinates": { "x", "y", "z", "yaw" } }`.

use anyhow::{Context, Result};
use bridge_core::{Drone, Point3D};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FleetPose {
    x: f64,
    y: f64,
    z: f64,
    #[serde(default)]
    yaw: f64,
}

#[derive(Debug, Deserialize)]
struct FleetEntry {
    label: String,
    coordinates: FleetPose,
}

/// Parse a fleet from JSON text.
pub fn parse_fleet(json: &str) -> Result<Vec<Drone>> {
    let entries: Vec<FleetEntry> =
        serde_json::from_str(json).context("Fleet must be a JSON array of drones")?;
    Ok(entries
        .into_iter()
        .map(|e| {
            let FleetPose { x, y, z, yaw } = e.coordinates;
            Drone::new(e.label, Point3D::new(x, y, z), yaw)
        })
        .collect())
}

/// Read and parse a fleet file.
pub fn load_fleet(path: &Path) -> Result<Vec<Drone>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fleet file {}", path.display()))?;
    parse_fleet(&text).with_context(|| format!("Invalid fleet file {}", path.display()))
}
