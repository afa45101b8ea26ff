//! Default parameters and sample fleet, injected at the request boundary.

use crate::models::{Drone, Point3D};

/// Maximum distance between neighbouring relays (meters).
pub const DEFAULT_MAX_SPACING: f64 = 7.0;

/// Distance between trajectory waypoints (meters).
pub const DEFAULT_STEP_SIZE: f64 = 3.0;

/// Sample five-drone fleet used when a caller supplies no drones.
///
/// Drones sit in a row along +x, slightly off the axis and just above ground.
pub fn default_fleet() -> Vec<Drone> {
    [10.0, 20.0, 30.0, 40.0, 50.0]
        .iter()
        .enumerate()
        .map(|(i, &x)| Drone::new(format!("UAV{}", i + 1), Point3D::new(x, 1.0, 0.5), 0.0))
        .collect()
}
