//! Core data models for bridge planning.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A point in the local planning frame (meters).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Ground position of the mobile user.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates2D {
    pub x: f64,
    pub y: f64,
}

impl Coordinates2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lift to 3D at ground level (z = 0), the end of the bridge line.
    pub fn to_ground(self) -> Point3D {
        Point3D::new(self.x, self.y, 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A drone available for relay duty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    /// Unique within a request
    pub label: String,
    pub coordinates: Point3D,
    /// Current heading in degrees
    #[serde(default)]
    pub yaw: f64,
}

impl Drone {
    pub fn new(label: impl Into<String>, coordinates: Point3D, yaw: f64) -> Self {
        Self {
            label: label.into(),
            coordinates,
            yaw,
        }
    }
}

/// One waypoint of a planned path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryStep {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Heading in degrees
    pub yaw: f64,
}

impl TrajectoryStep {
    pub fn at(position: Point3D, yaw: f64) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            yaw,
        }
    }

    pub fn position(&self) -> Point3D {
        Point3D::new(self.x, self.y, self.z)
    }
}

/// Ordered waypoints; index is the zero-based step number.
pub type Trajectory = Vec<TrajectoryStep>;

/// Planned trajectories keyed by drone label.
pub type BridgePlan = BTreeMap<String, Trajectory>;
