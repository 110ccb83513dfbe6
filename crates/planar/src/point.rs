//! Homogeneous planar points.
//!
//! A `Point` is a pair `(v, w)` standing for the ordinary point `v / w`.
//! `w = 0` is an ideal point (a direction, "at infinity"); this is what
//! `meet` returns for parallel lines. Ordinary points built from a `Vec2`
//! carry `w = 1`, and the kernel never rescales `w` on its own.

use nalgebra::Vector2;

use crate::error::GeomError;

/// Ordinary/ideal tag of a homogeneous point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointKind {
    Ordinary,
    Ideal,
}

/// Homogeneous point `(v, w)` representing `v / w`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub v: Vector2<f64>,
    pub w: f64,
}

impl Point {
    #[inline]
    pub fn new(v: Vector2<f64>, w: f64) -> Self {
        Self { v, w }
    }

    /// Ordinary point at `p` (weight 1).
    #[inline]
    pub fn at(p: Vector2<f64>) -> Self {
        Self { v: p, w: 1.0 }
    }

    /// Ideal point in direction `dir`.
    #[inline]
    pub fn ideal(dir: Vector2<f64>) -> Self {
        Self { v: dir, w: 0.0 }
    }

    #[inline]
    pub fn kind(&self) -> PointKind {
        if self.w == 0.0 {
            PointKind::Ideal
        } else {
            PointKind::Ordinary
        }
    }

    #[inline]
    pub fn is_ideal(&self) -> bool {
        self.kind() == PointKind::Ideal
    }

    /// Cartesian position `v / w`; fails for ideal points.
    pub fn position(&self) -> Result<Vector2<f64>, GeomError> {
        match self.kind() {
            PointKind::Ideal => Err(GeomError::IdealPoint),
            PointKind::Ordinary => Ok(self.v / self.w),
        }
    }

    pub fn distance_to(&self, other: &Point) -> Result<f64, GeomError> {
        Ok((self.position()? - other.position()?).norm())
    }

    /// Translate by `delta` without changing the weight.
    #[inline]
    pub fn offset(&self, delta: Vector2<f64>) -> Self {
        Self {
            v: self.v + delta * self.w,
            w: self.w,
        }
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(p: Vector2<f64>) -> Self {
        Point::at(p)
    }
}

impl std::ops::Add<Vector2<f64>> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector2<f64>) -> Self::Output {
        self.offset(rhs)
    }
}

impl std::ops::Sub<Vector2<f64>> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Vector2<f64>) -> Self::Output {
        self.offset(-rhs)
    }
}
