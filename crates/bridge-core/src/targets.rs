//! Bridge target generation along the base→user line.

use crate::error::BridgeError;
use crate::geometry::{Vec3, MIN_SEGMENT_LENGTH};
use crate::models::{Coordinates2D, Point3D};

/// Number of relays needed to keep every hop at or under `max_spacing`.
///
/// Always at least one once a bridge is needed at all.
pub fn required_relays(distance: f64, max_spacing: f64) -> usize {
    let hops = (distance / max_spacing).ceil() as usize;
    hops.saturating_sub(1).max(1)
}

/// Generate evenly spaced relay points between base and user.
///
/// x/y interpolate linearly, while z descends from the base altitude to the
/// user's ground level (`z = base_z * (1 - t)`).
///
/// # Errors
/// [`BridgeError::InsufficientDrones`] when `available_drones` cannot cover
/// the required relay count.
pub fn generate_targets(
    base: Point3D,
    user: Coordinates2D,
    max_spacing: f64,
    available_drones: usize,
) -> Result<Vec<Point3D>, BridgeError> {
    let distance = (Vec3::from(user.to_ground()) - Vec3::from(base)).norm();
    if distance < MIN_SEGMENT_LENGTH {
        return Ok(Vec::new());
    }

    let needed = required_relays(distance, max_spacing);
    if available_drones < needed {
        return Err(BridgeError::InsufficientDrones {
            needed,
            available: available_drones,
        });
    }
    let count = needed.min(available_drones);

    let targets = (1..=count)
        .map(|i| {
            let t = i as f64 / (count + 1) as f64;
            Point3D::new(
                base.x + (user.x - base.x) * t,
                base.y + (user.y - base.y) * t,
                base.z * (1.0 - t),
            )
        })
        .collect();

    Ok(targets)
}
