//! 2D geometry in image-surface space.
//!
//! All coordinates are in surface pixels with the origin at the top-left of
//! the drawing surface. Provides the vector primitive used throughout the
//! editor, the displacement projection that constrains extraction-point
//! drags, and the quadrilateral containment test used for plane hit-testing.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Tolerance for the point-on-edge test.
const EDGE_EPSILON: f64 = 1e-9;

/// A 2D point or displacement in surface coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Creates a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product.
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 2D cross product.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Projects this displacement onto `axis`.
    ///
    /// Returns the component of `self` parallel to `axis`. A degenerate
    /// (zero-length) axis absorbs the whole displacement and the projection
    /// is zero.
    pub fn project_onto(self, axis: Vec2) -> Vec2 {
        let denom = axis.dot(axis);
        if denom == 0.0 {
            return Vec2::default();
        }
        axis * (self.dot(axis) / denom)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

/// Returns `true` when `point` lies on the closed segment `a`..`b`.
pub fn point_on_edge(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let edge = b - a;
    let to_point = point - a;
    if edge.cross(to_point).abs() > EDGE_EPSILON * edge.length().max(1.0) {
        return false;
    }
    let along = to_point.dot(edge);
    along >= 0.0 && along <= edge.dot(edge)
}

/// Tests whether `point` lies strictly inside the simple quadrilateral
/// `corners` (given in winding order).
///
/// Uses an even-odd crossing test, so convex and simple non-convex
/// quadrilaterals are handled uniformly. Points exactly on an edge count as
/// outside: adjacent planes sharing an edge never both claim a point.
pub fn point_in_quad(point: Vec2, corners: &[Vec2; 4]) -> bool {
    for i in 0..4 {
        if point_on_edge(point, corners[i], corners[(i + 1) % 4]) {
            return false;
        }
    }

    let mut inside = false;
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        if (a.y > point.y) != (b.y > point.y) {
            let t = (point.y - a.y) / (b.y - a.y);
            let crossing_x = a.x + t * (b.x - a.x);
            if point.x < crossing_x {
                inside = !inside;
            }
        }
    }
    inside
}
