//! Per-drone trajectory synthesis.
//!
//! Each waypoint is produced by a single-link kinematic chain: the start
//! pose composed with a Denavit-Hartenberg link whose rotation is the
//! movement heading, whose length is the horizontal progress and whose
//! offset is the climb (or descent). For one link this is a straight line,
//! but position and orientation stay decoupled, so richer chains can be
//! substituted without touching callers.

use crate::geometry::{yaw_towards_deg, Mat4, Vec3, POSITION_EPS};
use crate::models::{Coordinates2D, Point3D, Trajectory, TrajectoryStep};

/// A moving drone always gets at least this many waypoints.
pub const MIN_MOVING_STEPS: usize = 3;

/// Upper bound on waypoints for a single trajectory.
pub const MAX_TRAJECTORY_STEPS: usize = 10_000;

/// Number of waypoints for a move of `distance` at `step_size` spacing.
///
/// Saturates at `usize::MAX` instead of overflowing for tiny step sizes.
pub fn step_count(distance: f64, step_size: f64) -> usize {
    let hops = (distance / step_size).ceil() as usize;
    hops.saturating_add(1).max(MIN_MOVING_STEPS)
}

/// Waypoints `synthesize` would need to go from `start` to `target`,
/// before any cap is applied. A drone already in place needs one.
pub fn required_steps(start: Point3D, target: Point3D, step_size: f64) -> usize {
    let distance = (Vec3::from(target) - Vec3::from(start)).norm();
    if distance < POSITION_EPS {
        1
    } else {
        step_count(distance, step_size)
    }
}

/// Plan a discretized path from `start` to `target`.
///
/// The first waypoint keeps `initial_yaw`; every later waypoint faces the
/// user. The last waypoint is pinned to `target` exactly, whatever drift the
/// transform chain accumulated. At most [`MAX_TRAJECTORY_STEPS`] waypoints
/// are produced; a smaller `step_size` is coarsened to fit.
///
/// Forward and vertical progress come from the horizontal distance and the
/// climb separately. A purely vertical move therefore rises straight up at
/// the start's x/y, whereas a pitch-only decomposition with yaw and pitch
/// forced to 0 would slide the intermediate waypoints along +x at the
/// start altitude.
pub fn synthesize(
    start: Point3D,
    target: Point3D,
    user: Coordinates2D,
    step_size: f64,
    initial_yaw: f64,
) -> Trajectory {
    let origin = Vec3::from(start);
    let goal = Vec3::from(target);
    let user_pos = Vec3::from(user.to_ground());
    let movement = goal - origin;
    let distance = movement.norm();

    if distance < POSITION_EPS {
        return vec![TrajectoryStep::at(start, initial_yaw)];
    }

    let steps = step_count(distance, step_size).min(MAX_TRAJECTORY_STEPS);
    let horizontal = movement.horizontal_norm();
    let heading = if horizontal > POSITION_EPS {
        movement.y.atan2(movement.x)
    } else {
        0.0
    };

    let intervals = (steps - 1) as f64;
    let step_forward = if horizontal > POSITION_EPS {
        horizontal / intervals
    } else {
        0.0
    };
    let step_vertical = movement.z / intervals;

    let base_frame = Mat4::translation(origin);
    let mut trajectory = Vec::with_capacity(steps);
    trajectory.push(TrajectoryStep::at(start, initial_yaw));

    for k in 1..steps {
        let k = k as f64;
        let link = Mat4::dh(heading, step_vertical * k, step_forward * k, 0.0);
        let pos = base_frame.mul(&link).translation_part();
        trajectory.push(TrajectoryStep::at(pos.into(), yaw_towards_deg(pos, user_pos)));
    }

    if let Some(last) = trajectory.last_mut() {
        *last = TrajectoryStep::at(target, yaw_towards_deg(goal, user_pos));
    }

    trajectory
}
