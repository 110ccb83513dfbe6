//! Scalar/vector primitives and the point–line duality.
//!
//! - `cross`: scalar 2D cross product (z-component of the 3D one).
//! - `area`, `centroid`, `area_moment`: triangle properties from raw vertices.
//! - `join`/`meet`: line through two points, point on two lines, both as the
//!   cross product of homogeneous triples `(x, y, w)` and `(a, b, c)`.
//! - `project`: orthogonal projection onto a line.

use nalgebra::{Matrix2, Vector2};

use crate::error::GeomError;
use crate::line::Line;
use crate::point::Point;

#[inline]
pub fn dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.dot(&b)
}

/// `a.x*b.y − a.y*b.x`; positive when `a → b` turns counterclockwise.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotate `v` by `angle` radians (counterclockwise).
#[inline]
pub fn rotate(v: Vector2<f64>, angle: f64) -> Vector2<f64> {
    let (s, c) = angle.sin_cos();
    Matrix2::new(c, -s, s, c) * v
}

#[inline]
pub fn rotate_about(v: Vector2<f64>, pivot: Vector2<f64>, angle: f64) -> Vector2<f64> {
    pivot + rotate(v - pivot, angle)
}

/// Signed triangle area (shoelace); positive for CCW order.
#[inline]
pub fn area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    0.5 * (cross(a, b) + cross(b, c) + cross(c, a))
}

#[inline]
pub fn centroid(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Vector2<f64> {
    (a + b + c) / 3.0
}

/// Polar second moment of the triangle's area about its own centroid.
///
/// `area/18 · (a·a + b·b + c·c − a·b − b·c − c·a)`; the bracket equals
/// half the sum of squared side lengths, so the value does not depend on
/// where the origin sits. Signed like `area`.
#[inline]
pub fn area_moment(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    area(a, b, c) / 18.0 * (dot(a, a) + dot(b, b) + dot(c, c) - dot(a, b) - dot(b, c) - dot(c, a))
}

/// Line through two points.
///
/// For ordinary points with `w = 1` this is `n = (A.y − B.y, B.x − A.x)`,
/// `c = cross(A, B)`. An ordinary point joined with an ideal one gives the
/// line through the point along that direction. Coincident points, or two
/// ideal points (the line at infinity), fail with `DegenerateLine`.
pub fn join(a: impl Into<Point>, b: impl Into<Point>) -> Result<Line, GeomError> {
    let (a, b) = (a.into(), b.into());
    let n = Vector2::new(a.v.y * b.w - a.w * b.v.y, a.w * b.v.x - a.v.x * b.w);
    Line::new(n, cross(a.v, b.v))
}

/// Intersection of two lines as a homogeneous point.
///
/// Cramer's rule with `d = n_A.x*n_B.y − n_A.y*n_B.x` as the weight. Parallel
/// lines give `d = 0`: an ideal point along their common direction (the zero
/// vector if the lines coincide).
pub fn meet(a: &Line, b: &Line) -> Point {
    Point::new(
        Vector2::new(a.n.y * b.c - a.c * b.n.y, a.c * b.n.x - a.n.x * b.c),
        a.n.x * b.n.y - a.n.y * b.n.x,
    )
}

/// `meet` resolved to a Cartesian position; fails for parallel lines.
pub fn meet_position(a: &Line, b: &Line) -> Result<Vector2<f64>, GeomError> {
    meet(a, b).position().map_err(|_| GeomError::ParallelLines)
}

/// Orthogonal projection of `p` onto the supporting line.
#[inline]
pub fn project(line: &Line, p: Vector2<f64>) -> Vector2<f64> {
    line.project(p)
}
