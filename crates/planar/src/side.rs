//! Finite directed segments ("sides").
//!
//! A `Side` is validated at construction (`A ≠ B`) and carries its derived
//! frame: unit tangent along `A → B`, unit normal on the left, length and
//! the supporting line `join(A, B)`. Closest-point queries live in
//! `nearest` (see `Nearest`).

use nalgebra::Vector2;

use crate::algebra::{join, meet_position, rotate_about};
use crate::cfg::ON_LINE_EPS;
use crate::error::GeomError;
use crate::line::Line;
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Side {
    a: Vector2<f64>,
    b: Vector2<f64>,
    tangent: Vector2<f64>,
    normal: Vector2<f64>,
    length: f64,
    line: Line,
}

impl Side {
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Result<Self, GeomError> {
        let d = b - a;
        let length = d.norm();
        if !(length > 0.0) {
            return Err(GeomError::ZeroLengthSide { x: a.x, y: a.y });
        }
        let tangent = d / length;
        Ok(Self {
            a,
            b,
            tangent,
            normal: Vector2::new(-tangent.y, tangent.x),
            length,
            line: join(a, b)?,
        })
    }

    /// Side between two homogeneous points; both must be ordinary.
    pub fn from_points(a: Point, b: Point) -> Result<Self, GeomError> {
        Self::new(a.position()?, b.position()?)
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
    pub fn tangent(&self) -> Vector2<f64> {
        self.tangent
    }
    /// Tangent rotated by +90°.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        self.normal
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
    /// Supporting infinite line, `join(A, B)`.
    #[inline]
    pub fn on_line(&self) -> Line {
        self.line
    }

    pub fn offset(&self, delta: Vector2<f64>) -> Result<Self, GeomError> {
        Self::new(self.a + delta, self.b + delta)
    }

    pub fn rotate(&self, pivot: Vector2<f64>, angle: f64) -> Result<Self, GeomError> {
        Self::new(
            rotate_about(self.a, pivot, angle),
            rotate_about(self.b, pivot, angle),
        )
    }

    /// Signed perpendicular distance `normal·(p − A)`, positive on the left.
    #[inline]
    pub fn signed_distance(&self, p: Vector2<f64>) -> f64 {
        self.normal.dot(&(p - self.a))
    }

    // Parameter of the projection of `p` along A → B (0 at A, 1 at B).
    #[inline]
    fn param(&self, p: Vector2<f64>) -> f64 {
        let d = self.b - self.a;
        d.dot(&(p - self.a)) / d.dot(&d)
    }

    /// Weights `(w_A, w_B)` of the projection of `p`, `w_A + w_B = 1`.
    pub fn bary_coords(&self, p: Vector2<f64>) -> (f64, f64) {
        let w_b = self.param(p);
        (1.0 - w_b, w_b)
    }

    /// On the supporting line within `eps` and projecting inside `[0, 1]`.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        if self.signed_distance(p).abs() > eps {
            return false;
        }
        let w = self.param(p);
        (0.0..=1.0).contains(&w)
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.contains_eps(p, ON_LINE_EPS)
    }

    /// Point where the two segments cross, if their supporting lines meet on both.
    pub fn crossing(&self, other: &Side) -> Option<Vector2<f64>> {
        let x = meet_position(&self.line, &other.line).ok()?;
        (self.contains(x) && other.contains(x)).then_some(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::f64::consts::FRAC_PI_2;

    fn side(a: [f64; 2], b: [f64; 2]) -> Side {
        Side::new(Vector2::from(a), Vector2::from(b)).unwrap()
    }

    #[test]
    fn frame_of_diagonal_side() {
        let s = side([1.0, 1.0], [4.0, 5.0]);
        assert_eq!(s.length(), 5.0);
        assert!((s.tangent() - vector![0.6, 0.8]).norm() < 1e-12);
        assert!((s.normal() - vector![-0.8, 0.6]).norm() < 1e-12);
        assert!((s.on_line().normal() - s.normal()).norm() < 1e-12);
        assert!((s.on_line().tangent() - s.tangent()).norm() < 1e-12);
    }

    #[test]
    fn zero_length_is_rejected() {
        let p = vector![2.0, 3.0];
        assert_eq!(Side::new(p, p), Err(GeomError::ZeroLengthSide { x: 2.0, y: 3.0 }));
        let ideal = Side::from_points(Point::at(p), Point::ideal(vector![1.0, 0.0]));
        assert_eq!(ideal, Err(GeomError::IdealPoint));
    }

    #[test]
    fn endpoints_are_contained_with_unit_weights() {
        let s = side([-2.0, 0.5], [3.0, 7.25]);
        assert!(s.contains(s.a()));
        assert!(s.contains(s.b()));
        assert_eq!(s.bary_coords(s.a()), (1.0, 0.0));
        assert_eq!(s.bary_coords(s.b()), (0.0, 1.0));
    }

    #[test]
    fn containment_needs_both_conditions() {
        let s = side([0.0, 0.0], [2.0, 0.0]);
        assert!(s.contains(vector![1.0, 0.0]));
        assert!(s.contains(vector![1.0, 5e-7]));
        assert!(!s.contains(vector![1.0, 1e-3]));
        assert!(!s.contains(vector![2.5, 0.0]));
        assert!(!s.contains(vector![-0.1, 0.0]));
        assert!(s.contains_eps(vector![1.0, 1e-3], 1e-2));
    }

    #[test]
    fn bary_coords_project_off_line_points() {
        let s = side([0.0, 0.0], [4.0, 0.0]);
        let (wa, wb) = s.bary_coords(vector![1.0, 3.0]);
        assert!((wa - 0.75).abs() < 1e-12 && (wb - 0.25).abs() < 1e-12);
        let (wa, wb) = s.bary_coords(vector![6.0, -1.0]);
        assert!((wa + 0.5).abs() < 1e-12 && (wb - 1.5).abs() < 1e-12);
    }

    #[test]
    fn offset_and_rotate_build_new_sides() {
        let s = side([0.0, 0.0], [1.0, 0.0]);
        let moved = s.offset(vector![2.0, 3.0]).unwrap();
        assert_eq!(moved.a(), vector![2.0, 3.0]);
        assert_eq!(moved.b(), vector![3.0, 3.0]);
        let turned = s.rotate(vector![0.0, 0.0], FRAC_PI_2).unwrap();
        assert!((turned.b() - vector![0.0, 1.0]).norm() < 1e-12);
        assert!((turned.length() - 1.0).abs() < 1e-12);
        assert_eq!(s.a(), vector![0.0, 0.0]);
    }

    #[test]
    fn crossing_requires_overlap_on_both_segments() {
        let s = side([0.0, 0.0], [2.0, 2.0]);
        let t = side([0.0, 2.0], [2.0, 0.0]);
        let x = s.crossing(&t).unwrap();
        assert!((x - vector![1.0, 1.0]).norm() < 1e-12);
        // lines meet at (5,5), outside the first segment
        let far = side([5.0, 0.0], [5.0, 10.0]);
        assert!(s.crossing(&far).is_none());
        // parallel
        let par = side([0.0, 1.0], [2.0, 3.0]);
        assert!(s.crossing(&par).is_none());
    }
}
