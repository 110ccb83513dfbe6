//! Triangles with cached physical properties and barycentric queries.
//!
//! Vertices keep the caller's cyclic order; `area` is signed (positive for
//! CCW). Zero-area triangles are rejected at construction, so barycentric
//! weights are always defined on a constructed value.

use nalgebra::Vector2;

use crate::algebra::{area, area_moment, centroid, rotate_about};
use crate::error::GeomError;
use crate::point::Point;
use crate::side::Side;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    sides: [Side; 3],
    area: f64,
    centroid: Vector2<f64>,
    area_moment: f64,
}

impl Triangle {
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Result<Self, GeomError> {
        let signed = area(a, b, c);
        if !(signed != 0.0 && signed.is_finite()) {
            return Err(GeomError::DegenerateTriangle { area: signed });
        }
        Ok(Self {
            a,
            b,
            c,
            sides: [Side::new(a, b)?, Side::new(b, c)?, Side::new(c, a)?],
            area: signed,
            centroid: centroid(a, b, c),
            area_moment: area_moment(a, b, c),
        })
    }

    pub fn from_points(a: Point, b: Point, c: Point) -> Result<Self, GeomError> {
        Self::new(a.position()?, b.position()?, c.position()?)
    }

    #[inline]
    pub fn a(&self) -> Vector2<f64> {
        self.a
    }
    #[inline]
    pub fn b(&self) -> Vector2<f64> {
        self.b
    }
    #[inline]
    pub fn c(&self) -> Vector2<f64> {
        self.c
    }
    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        [self.a, self.b, self.c]
    }
    #[inline]
    pub fn ab(&self) -> Side {
        self.sides[0]
    }
    #[inline]
    pub fn bc(&self) -> Side {
        self.sides[1]
    }
    #[inline]
    pub fn ca(&self) -> Side {
        self.sides[2]
    }
    /// `[AB, BC, CA]`.
    #[inline]
    pub fn sides(&self) -> [Side; 3] {
        self.sides
    }
    /// Signed area, positive for counterclockwise vertices.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }
    #[inline]
    pub fn centroid(&self) -> Vector2<f64> {
        self.centroid
    }
    /// Polar second moment of area about the centroid (signed like `area`).
    #[inline]
    pub fn area_moment(&self) -> f64 {
        self.area_moment
    }
    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.area > 0.0
    }

    pub fn offset(&self, delta: Vector2<f64>) -> Result<Self, GeomError> {
        Self::new(self.a + delta, self.b + delta, self.c + delta)
    }

    pub fn rotate(&self, pivot: Vector2<f64>, angle: f64) -> Result<Self, GeomError> {
        Self::new(
            rotate_about(self.a, pivot, angle),
            rotate_about(self.b, pivot, angle),
            rotate_about(self.c, pivot, angle),
        )
    }

    /// Weights `(w_A, w_B, w_C)` with `p = w_A A + w_B B + w_C C`.
    pub fn bary_coords(&self, p: Vector2<f64>) -> (f64, f64, f64) {
        let d = area(self.a, self.b, self.c);
        (
            area(p, self.b, self.c) / d,
            area(self.a, p, self.c) / d,
            area(self.a, self.b, p) / d,
        )
    }

    /// All weights in `[−eps, 1 + eps]`.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let (wa, wb, wc) = self.bary_coords(p);
        let inside = |w: f64| w >= -eps && w <= 1.0 + eps;
        inside(wa) && inside(wb) && inside(wc)
    }

    /// All weights in `[0, 1]`, boundary inclusive.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.contains_eps(p, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::f64::consts::PI;

    fn unit() -> Triangle {
        Triangle::new(vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]).unwrap()
    }

    #[test]
    fn derived_properties() {
        let t = unit();
        assert_eq!(t.area(), 0.5);
        assert!(t.is_ccw());
        assert!((t.centroid() - vector![1.0 / 3.0, 1.0 / 3.0]).norm() < 1e-12);
        assert!((t.area_moment() - 1.0 / 18.0).abs() < 1e-12);
        assert_eq!(t.ab().a(), t.a());
        assert_eq!(t.bc().b(), t.c());
        assert_eq!(t.ca().b(), t.a());
    }

    #[test]
    fn clockwise_order_has_negative_area() {
        let t = Triangle::new(vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 0.0]).unwrap();
        assert_eq!(t.area(), -0.5);
        assert!(!t.is_ccw());
        assert!(t.contains(vector![0.2, 0.2]));
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        let err = Triangle::new(vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]);
        assert!(matches!(err, Err(GeomError::DegenerateTriangle { .. })));
        let err = Triangle::new(vector![1.0, 1.0], vector![1.0, 1.0], vector![2.0, 0.0]);
        assert!(matches!(err, Err(GeomError::DegenerateTriangle { .. })));
    }

    #[test]
    fn vertices_have_unit_weights() {
        let t = Triangle::new(vector![-1.5, 0.25], vector![3.0, -2.0], vector![0.5, 4.0]).unwrap();
        assert_eq!(t.bary_coords(t.a()), (1.0, 0.0, 0.0));
        assert_eq!(t.bary_coords(t.b()), (0.0, 1.0, 0.0));
        assert_eq!(t.bary_coords(t.c()), (0.0, 0.0, 1.0));
        for v in t.vertices() {
            assert!(t.contains(v));
        }
    }

    #[test]
    fn interior_point_has_weights_strictly_inside() {
        let t = unit();
        let p = vector![0.25, 0.25];
        assert!(t.contains(p));
        let (wa, wb, wc) = t.bary_coords(p);
        for w in [wa, wb, wc] {
            assert!(w > 0.0 && w < 1.0);
        }
        assert!((wa - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weights_sum_to_one_outside() {
        let t = unit();
        let p = vector![3.0, -2.0];
        assert!(!t.contains(p));
        let (wa, wb, wc) = t.bary_coords(p);
        assert!((wa + wb + wc - 1.0).abs() < 1e-12);
        assert!(t.contains_eps(vector![0.5, 0.5 + 1e-9], 1e-6));
        assert!(!t.contains(vector![0.5, 0.5 + 1e-9]));
    }

    #[test]
    fn offset_and_rotate_keep_shape() {
        let t = unit();
        let moved = t.offset(vector![3.0, 0.0]).unwrap();
        assert_eq!(moved.a(), vector![3.0, 0.0]);
        assert_eq!(moved.area(), t.area());
        let turned = t.rotate(t.centroid(), PI / 3.0).unwrap();
        assert!((turned.area() - t.area()).abs() < 1e-12);
        assert!((turned.centroid() - t.centroid()).norm() < 1e-12);
        assert!((turned.area_moment() - t.area_moment()).abs() < 1e-12);
    }
}
