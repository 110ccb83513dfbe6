//! Oriented infinite lines `n · p + c = 0`.
//!
//! `n` is not normalised. Orientation follows `n`: the unit tangent is `n`
//! rotated by −90°, so walking along the tangent keeps the positive
//! half-plane on the left.

use nalgebra::Vector2;

use crate::algebra::cross;
use crate::cfg::ON_LINE_EPS;
use crate::error::GeomError;
use crate::point::Point;

/// Oriented line `{p : n·p + c = 0}` with `n ≠ 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Line {
    pub fn new(n: Vector2<f64>, c: f64) -> Result<Self, GeomError> {
        let nn = n.norm_squared();
        if !nn.is_finite() || nn == 0.0 {
            return Err(GeomError::DegenerateLine);
        }
        Ok(Self { n, c })
    }

    /// Unit tangent, `normalize((n.y, −n.x))`.
    #[inline]
    pub fn tangent(&self) -> Vector2<f64> {
        Vector2::new(self.n.y, -self.n.x) / self.n.norm()
    }

    /// Unit normal, `normalize(n)`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        self.n / self.n.norm()
    }

    /// Raw residual `n·p + c`.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.n.dot(&p) + self.c
    }

    /// Signed distance, positive on the side `n` points to.
    #[inline]
    pub fn signed_distance(&self, p: Vector2<f64>) -> f64 {
        self.eval(p) / self.n.norm()
    }

    /// Signed distance of a homogeneous point, `(n·v + c w) / (w |n|)`.
    pub fn signed_distance_point(&self, p: &Point) -> Result<f64, GeomError> {
        if p.is_ideal() {
            return Err(GeomError::IdealPoint);
        }
        Ok((self.n.dot(&p.v) + self.c * p.w) / (p.w * self.n.norm()))
    }

    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.signed_distance(p).abs() <= eps
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.contains_eps(p, ON_LINE_EPS)
    }

    /// Orthogonal projection of `p` onto the line.
    #[inline]
    pub fn project(&self, p: Vector2<f64>) -> Vector2<f64> {
        p - self.n * (self.eval(p) / self.n.norm_squared())
    }

    /// Homogeneous projection; keeps ideal points ideal.
    ///
    /// `|n|² w · x = −c w n + cross(n, v) n⊥` with `n⊥ = (−n.y, n.x)`.
    pub fn project_point(&self, p: &Point) -> Point {
        let t = cross(self.n, p.v);
        let n_perp = Vector2::new(-self.n.y, self.n.x);
        Point::new(
            -self.n * (self.c * p.w) + n_perp * t,
            self.n.norm_squared() * p.w,
        )
    }

    /// Point at arc length `s` from the foot of the origin, along the tangent.
    pub fn point_along(&self, s: f64) -> Vector2<f64> {
        let foot = -self.n * (self.c / self.n.norm_squared());
        foot + self.tangent() * s
    }

    /// Same set and same orientation, up to `eps` on the normalised form.
    pub fn coincides_eps(&self, other: &Line, eps: f64) -> bool {
        let (na, nb) = (self.n.norm(), other.n.norm());
        (self.n / na - other.n / nb).norm() <= eps && (self.c / na - other.c / nb).abs() <= eps
    }
}
