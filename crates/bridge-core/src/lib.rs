//! Relay-drone bridge planning.
//!
//! Positions a fleet of relay drones on the line between a fixed base
//! station and a mobile user, and synthesizes a smooth trajectory for each
//! relay from its current pose to its slot.

pub mod assignment;
pub mod defaults;
pub mod error;
pub mod geometry;
pub mod models;
pub mod planner;
pub mod targets;
pub mod trajectory;

pub use assignment::{assign, Assignment};
pub use defaults::{default_fleet, DEFAULT_MAX_SPACING, DEFAULT_STEP_SIZE};
pub use error::BridgeError;
pub use models::{BridgePlan, Coordinates2D, Drone, Point3D, Trajectory, TrajectoryStep};
pub use planner::{plan_bridge, BridgeRequest, IdlePolicy, PlannerConfig};
pub use targets::generate_targets;
pub use trajectory::{synthesize, MAX_TRAJECTORY_STEPS};
