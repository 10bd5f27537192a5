//! Ground-plane geometry used by formation and targeting logic.
//!
//! The ground plane is x/z; y is height and is ignored by bounds and centers.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl GroundBounds {
    /// Smallest rectangle holding every point. `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_z: first.z,
            max_z: first.z,
        };
        for p in points {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_z = bounds.min_z.min(p.z);
            bounds.max_z = bounds.max_z.max(p.z);
        }
        Some(bounds)
    }

    /// Rectangle spanned by two opposite corners in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min_x: a.x.min(b.x),
            max_x: a.x.max(b.x),
            min_z: a.z.min(b.z),
            max_z: a.z.max(b.z),
        }
    }

    /// True only for points strictly inside; the boundary is outside.
    /// A degenerate (zero-width) rectangle contains nothing.
    pub fn contains_strict(&self, point: Vec3) -> bool {
        point.x > self.min_x && point.x < self.max_x && point.z > self.min_z && point.z < self.max_z
    }
}

/// Mean x and z of the points, at height `ground_y`. `None` for no points.
pub fn ground_center(points: impl IntoIterator<Item = Vec3>, ground_y: f32) -> Option<Vec3> {
    let (mut x, mut z, mut count) = (0.0_f32, 0.0_f32, 0_u32);
    for p in points {
        x += p.x;
        z += p.z;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let n = count as f32;
    Some(Vec3::new(x / n, ground_y, z / n))
}

/// Straight-line distance in 3D.
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Step from `current` toward `target` by at most `max_delta`, landing
/// exactly on `target` when it is within reach.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let dist = delta.length();
    if dist <= max_delta || dist == 0.0 {
        target
    } else {
        current + delta / dist * max_delta
    }
}

/// `point` projected onto the horizontal plane at `height`.
pub fn at_height(point: Vec3, height: f32) -> Vec3 {
    Vec3::new(point.x, height, point.z)
}
