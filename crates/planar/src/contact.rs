//! Closest-point query result.

use nalgebra::Vector2;

use crate::error::GeomError;

/// Pair of closest points, source on the queried shape, target on the other.
///
/// `direction` is `normalize(target − source)` and is absent when the two
/// points coincide (touching or overlapping shapes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    source: Vector2<f64>,
    target: Vector2<f64>,
    direction: Option<Vector2<f64>>,
    distance: f64,
}

impl Contact {
    pub fn new(source: Vector2<f64>, target: Vector2<f64>) -> Self {
        let delta = target - source;
        let distance = delta.norm();
        let direction = (distance > 0.0).then(|| delta / distance);
        Self {
            source,
            target,
            direction,
            distance,
        }
    }

    #[inline]
    pub fn source(&self) -> Vector2<f64> {
        self.source
    }

    #[inline]
    pub fn target(&self) -> Vector2<f64> {
        self.target
    }

    #[inline]
    pub fn direction(&self) -> Option<Vector2<f64>> {
        self.direction
    }

    /// Direction for callers that cannot tolerate coincident points.
    pub fn try_direction(&self) -> Result<Vector2<f64>, GeomError> {
        self.direction.ok_or(GeomError::CoincidentContact)
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn is_touching(&self) -> bool {
        self.direction.is_none()
    }

    /// Swap source and target; the direction is negated, distance kept.
    pub fn flip(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            direction: self.direction.map(|d| -d),
            distance: self.distance,
        }
    }
}
