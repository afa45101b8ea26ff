//! Relay selection and drone→target pairing.
//!
//! Drones are chosen by how close they already are to the bridge segment,
//! then paired with targets in order along the segment so that the drone
//! nearest the base flies to the target nearest the base. Matching by raw
//! distance instead would let paths cross.

use crate::geometry::{distance_to_segment, projection_factor, Vec3};
use crate::models::{Coordinates2D, Drone, Point3D};

/// A drone paired with the bridge target it should occupy.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<'a> {
    pub drone: &'a Drone,
    pub target: Point3D,
}

/// Pair drones with targets.
///
/// Returns at most `min(drones.len(), targets.len())` pairs, ordered by
/// projection along base→user. Sorting is stable, so equal keys keep their
/// input order.
pub fn assign<'a>(
    drones: &'a [Drone],
    targets: &[Point3D],
    base: Point3D,
    user: Coordinates2D,
) -> Vec<Assignment<'a>> {
    if targets.is_empty() {
        return Vec::new();
    }

    let a = Vec3::from(base);
    let b = Vec3::from(user.to_ground());

    let mut candidates: Vec<(f64, &Drone)> = drones
        .iter()
        .map(|drone| (distance_to_segment(drone.coordinates.into(), a, b), drone))
        .collect();
    candidates.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));
    candidates.truncate(targets.len());

    let mut selected: Vec<(f64, &Drone)> = candidates
        .into_iter()
        .map(|(_, drone)| (projection_factor(drone.coordinates.into(), a, b), drone))
        .collect();
    selected.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));

    let mut ordered_targets: Vec<(f64, Point3D)> = targets
        .iter()
        .map(|target| (projection_factor((*target).into(), a, b), *target))
        .collect();
    ordered_targets.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));

    selected
        .into_iter()
        .zip(ordered_targets)
        .map(|((_, drone), (_, target))| Assignment { drone, target })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drone(label: &str, x: f64, y: f64, z: f64) -> Drone {
        Drone::new(label, Point3D::new(x, y, z), 0.0)
    }

    fn line_targets(xs: &[f64]) -> Vec<Point3D> {
        xs.iter().map(|&x| Point3D::new(x, 0.0, 0.0)).collect()
    }

    #[test]
    fn empty_targets_assign_nothing() {
        let drones = vec![drone("A", 1.0, 0.0, 0.0)];
        let pairs = assign(&drones, &[], Point3D::origin(), Coordinates2D::new(10.0, 0.0));
        assert!(pairs.is_empty());
    }

    #[test]
    fn selects_drones_closest_to_segment() {
        let drones = vec![
            drone("far", 5.0, 40.0, 0.0),
            drone("near", 5.0, 1.0, 0.0),
            drone("mid", 5.0, 10.0, 0.0),
        ];
        let targets = line_targets(&[3.0, 6.0]);
        let pairs = assign(&drones, &targets, Point3D::origin(), Coordinates2D::new(10.0, 0.0));
        let labels: Vec<&str> = pairs.iter().map(|p| p.drone.label.as_str()).collect();
        assert_eq!(pairs.len(), 2);
        assert!(labels.contains(&"near"));
        assert!(labels.contains(&"mid"));
    }

    #[test]
    fn pairs_follow_segment_order_without_crossing() {
        // Input order is reversed along the line
        let drones = vec![
            drone("C", 9.0, 0.5, 0.0),
            drone("B", 5.0, 0.5, 0.0),
            drone("A", 1.0, 0.5, 0.0),
        ];
        let targets = line_targets(&[7.5, 2.5, 5.0]);
        let base = Point3D::origin();
        let user = Coordinates2D::new(10.0, 0.0);
        let pairs = assign(&drones, &targets, base, user);

        let labels: Vec<&str> = pairs.iter().map(|p| p.drone.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        let xs: Vec<f64> = pairs.iter().map(|p| p.target.x).collect();
        assert_eq!(xs, vec![2.5, 5.0, 7.5]);

        let a = Vec3::from(base);
        let b = Vec3::from(user.to_ground());
        for window in pairs.windows(2) {
            let t0 = projection_factor(window[0].drone.coordinates.into(), a, b);
            let t1 = projection_factor(window[1].drone.coordinates.into(), a, b);
            assert!(t0 <= t1);
        }
    }

    #[test]
    fn out_of_range_drones_order_by_unclamped_projection() {
        // Both sit beyond the user end of the segment
        let drones = vec![
            drone("beyond_far", 16.0, 0.0, 0.0),
            drone("beyond_near", 12.0, 0.0, 0.0),
        ];
        let targets = line_targets(&[3.0, 6.0]);
        let pairs = assign(&drones, &targets, Point3D::origin(), Coordinates2D::new(10.0, 0.0));
        assert_eq!(pairs[0].drone.label, "beyond_near");
        assert_eq!(pairs[0].target.x, 3.0);
        assert_eq!(pairs[1].drone.label, "beyond_far");
    }

    #[test]
    fn distance_ties_keep_input_order() {
        let drones = vec![
            drone("first", 5.0, 2.0, 0.0),
            drone("second", 5.0, -2.0, 0.0),
            drone("third", 5.0, 0.0, 2.0),
        ];
        let targets = line_targets(&[5.0]);
        let pairs = assign(&drones, &targets, Point3D::origin(), Coordinates2D::new(10.0, 0.0));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].drone.label, "first");
    }

    #[test]
    fn never_returns_more_pairs_than_drones() {
        let drones = vec![drone("solo", 2.0, 0.0, 0.0)];
        let targets = line_targets(&[2.0, 4.0, 6.0]);
        let pairs = assign(&drones, &targets, Point3D::origin(), Coordinates2D::new(10.0, 0.0));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].target.x, 2.0);
    }

    #[test]
    fn degenerate_segment_keeps_input_order() {
        let drones = vec![drone("A", 3.0, 3.0, 3.0), drone("B", -1.0, 0.0, 0.0)];
        let targets = line_targets(&[0.0, 0.0]);
        let pairs = assign(&drones, &targets, Point3D::origin(), Coordinates2D::new(0.0, 0.0));
        let labels: Vec<&str> = pairs.iter().map(|p| p.drone.label.as_str()).collect();
        // Selection by distance to the point puts B first; projection is 0 for both
        assert_eq!(labels, vec!["B", "A"]);
    }
}
