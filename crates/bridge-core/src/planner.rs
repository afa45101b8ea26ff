//! Bridge planning pipeline: targets → assignment → trajectories.

use crate::assignment::assign;
use crate::defaults::{default_fleet, DEFAULT_MAX_SPACING, DEFAULT_STEP_SIZE};
use crate::error::BridgeError;
use crate::models::{BridgePlan, Coordinates2D, Drone, Point3D, TrajectoryStep};
use crate::targets::generate_targets;
use crate::trajectory::{required_steps, synthesize, MAX_TRAJECTORY_STEPS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What to emit for drones that are not selected as relays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdlePolicy {
    /// Leave them out of the plan
    #[default]
    Omit,
    /// Single-step trajectory at the current pose
    HoldPosition,
}

impl IdlePolicy {
    /// Parse a config value (`omit`, `hold`, `hold_position`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "omit" => Some(IdlePolicy::Omit),
            "hold" | "hold_position" => Some(IdlePolicy::HoldPosition),
            _ => None,
        }
    }
}

/// Tunable planning parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum distance between neighbouring relays (meters)
    pub max_spacing: f64,
    /// Distance between trajectory waypoints (meters)
    pub step_size: f64,
    #[serde(default)]
    pub idle_policy: IdlePolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_spacing: DEFAULT_MAX_SPACING,
            step_size: DEFAULT_STEP_SIZE,
            idle_policy: IdlePolicy::default(),
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<(), BridgeError> {
        check_positive("max_spacing", self.max_spacing)?;
        check_positive("step_size", self.step_size)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), BridgeError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BridgeError::InvalidParameter {
            name,
            reason: format!("must be a positive finite number, got {value}"),
        })
    }
}

/// Snapshot of the world a plan is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRequest {
    pub user: Coordinates2D,
    pub base: Point3D,
    pub drones: Vec<Drone>,
}

impl BridgeRequest {
    /// Request with the base at the origin and the default sample fleet.
    pub fn new(user: Coordinates2D) -> Self {
        Self {
            user,
            base: Point3D::origin(),
            drones: default_fleet(),
        }
    }

    pub fn with_base(mut self, base: Point3D) -> Self {
        self.base = base;
        self
    }

    pub fn with_drones(mut self, drones: Vec<Drone>) -> Self {
        self.drones = drones;
        self
    }

    /// Reject non-finite coordinates and duplicate labels.
    pub fn validate(&self) -> Result<(), BridgeError> {
        if !self.user.is_finite() {
            return Err(BridgeError::NonFiniteInput { field: "user".into() });
        }
        if !self.base.is_finite() {
            return Err(BridgeError::NonFiniteInput { field: "base".into() });
        }

        let mut seen = HashSet::with_capacity(self.drones.len());
        for drone in &self.drones {
            if !drone.coordinates.is_finite() || !drone.yaw.is_finite() {
                return Err(BridgeError::NonFiniteInput {
                    field: format!("drones[{}]", drone.label),
                });
            }
            if !seen.insert(drone.label.as_str()) {
                return Err(BridgeError::DuplicateLabel(drone.label.clone()));
            }
        }
        Ok(())
    }
}

/// Compute a trajectory for every relay drone.
///
/// An empty fleet yields an empty plan. Drones not chosen as relays follow
/// `config.idle_policy`.
///
/// # Errors
/// [`BridgeError::InsufficientDrones`] when the fleet cannot span the
/// distance, or a validation error for bad parameters or inputs. A
/// `step_size` that would need more than [`MAX_TRAJECTORY_STEPS`] waypoints
/// for any relay is an invalid parameter.
pub fn plan_bridge(
    request: &BridgeRequest,
    config: &PlannerConfig,
) -> Result<BridgePlan, BridgeError> {
    config.validate()?;
    request.validate()?;

    let mut plan = BridgePlan::new();
    if request.drones.is_empty() {
        return Ok(plan);
    }

    let targets = generate_targets(
        request.base,
        request.user,
        config.max_spacing,
        request.drones.len(),
    )?;
    tracing::debug!(
        targets = targets.len(),
        drones = request.drones.len(),
        "Generated bridge targets"
    );

    for assignment in assign(&request.drones, &targets, request.base, request.user) {
        let drone = assignment.drone;
        tracing::debug!(
            drone = %drone.label,
            x = assignment.target.x,
            y = assignment.target.y,
            z = assignment.target.z,
            "Assigned relay target"
        );
        let steps = required_steps(drone.coordinates, assignment.target, config.step_size);
        if steps > MAX_TRAJECTORY_STEPS {
            return Err(BridgeError::InvalidParameter {
                name: "step_size",
                reason: format!(
                    "{} needs {} waypoints at step {}, limit is {}",
                    drone.label, steps, config.step_size, MAX_TRAJECTORY_STEPS
                ),
            });
        }
        let trajectory = synthesize(
            drone.coordinates,
            assignment.target,
            request.user,
            config.step_size,
            drone.yaw,
        );
        plan.insert(drone.label.clone(), trajectory);
    }

    let relays = plan.len();
    if config.idle_policy == IdlePolicy::HoldPosition {
        for drone in &request.drones {
            plan.entry(drone.label.clone())
                .or_insert_with(|| vec![TrajectoryStep::at(drone.coordinates, drone.yaw)]);
        }
    }

    tracing::info!(
        relays,
        idle = request.drones.len() - relays,
        "Bridge plan computed"
    );

    Ok(plan)
}
