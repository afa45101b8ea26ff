//! Spatial math for bridge placement and trajectory synthesis.
//!
//! Only ever needs 3D points and single 4x4 homogeneous transforms, so the
//! types here are fixed-size and `Copy`.

use crate::models::Point3D;
use std::ops::{Add, Mul, Sub};

/// Base and user closer than this (meters) need no bridge at all.
pub const MIN_SEGMENT_LENGTH: f64 = 0.1;

/// Squared segment length under which projection is treated as degenerate.
pub const DEGENERATE_SEGMENT_EPS: f64 = 1e-12;

/// Positional tolerance for "no movement" and "already at the user".
pub const POSITION_EPS: f64 = 1e-6;

/// Minimal 3-vector used for positions and displacements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Length of the XY component only.
    pub fn horizontal_norm(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<Point3D> for Vec3 {
    fn from(p: Point3D) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Vec3> for Point3D {
    fn from(v: Vec3) -> Self {
        Point3D::new(v.x, v.y, v.z)
    }
}

// ==== Homogeneous transforms ====

/// Row-major 4x4 homogeneous transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [[f64; 4]; 4]);

impl Mat4 {
    pub fn identity() -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Mat4(m)
    }

    /// Pure translation placing the frame origin at `v`.
    pub fn translation(v: Vec3) -> Self {
        let mut m = Self::identity();
        m.0[0][3] = v.x;
        m.0[1][3] = v.y;
        m.0[2][3] = v.z;
        m
    }

    /// Standard Denavit-Hartenberg link transform.
    ///
    /// # Arguments
    /// * `theta` - Joint rotation about the previous z axis (radians)
    /// * `d` - Offset along the previous z axis
    /// * `a` - Link length along the rotated x axis
    /// * `alpha` - Link twist about the rotated x axis (radians)
    pub fn dh(theta: f64, d: f64, a: f64, alpha: f64) -> Self {
        let (st, ct) = theta.sin_cos();
        let (sa, ca) = alpha.sin_cos();
        Mat4([
            [ct, -st * ca, st * sa, a * ct],
            [st, ct * ca, -ct * sa, a * st],
            [0.0, sa, ca, d],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Compose `self * rhs` (apply `rhs` in the frame of `self`).
    pub fn mul(&self, rhs: &Mat4) -> Mat4 {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        Mat4(out)
    }

    /// Origin of the transformed frame.
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.0[0][3], self.0[1][3], self.0[2][3])
    }
}

// ==== Segment helpers ====

/// Parametric position of `p` projected onto the line through `a` and `b`.
///
/// `t < 0` lies before `a`, `t > 1` beyond `b`. A degenerate segment yields 0.
pub fn projection_factor(p: Vec3, a: Vec3, b: Vec3) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < DEGENERATE_SEGMENT_EPS {
        return 0.0;
    }
    (p - a).dot(ab) / len_sq
}

/// Distance from `p` to the closest point on segment `a`→`b`.
///
/// Unlike the infinite-line distance, the projection is clamped to the
/// segment, so points beyond either end measure to that endpoint.
pub fn distance_to_segment(p: Vec3, a: Vec3, b: Vec3) -> f64 {
    let ab = b - a;
    if ab.norm_squared() < DEGENERATE_SEGMENT_EPS {
        return (p - a).norm();
    }
    let t = projection_factor(p, a, b).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).norm()
}

/// Planar heading in degrees from `from` to `to` (0 = +x, counterclockwise).
///
/// Returns 0 when the two points coincide in XY.
pub fn yaw_towards_deg(from: Vec3, to: Vec3) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() < POSITION_EPS && dy.abs() < POSITION_EPS {
        return 0.0;
    }
    dy.atan2(dx).to_degrees()
}
