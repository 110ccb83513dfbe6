//! Nearest-feature resolution between points, sides and triangles.
//!
//! Purpose
//! - Answer "which two points are closest, and how far apart?" for every
//!   ordered pair of shape kinds, returning a `Contact` whose source lies on
//!   the receiver and whose target lies on the argument.
//!
//! Model
//! - Each pair enumerates a short, fixed list of candidate contacts
//!   (vertex/vertex, vertex/edge, crossings, containment) and hands it to
//!   `reduce::select_nearest`, a single arg-min with first-wins ties.
//! - Bigger pairs reduce to smaller ones:
//!   triangle↔triangle → triangle↔side / triangle↔point → side↔point.
//! - Triangles are solid: a point inside, or crossing edges, gives 0.
//!
//! Code cross-refs: `Contact`, `Side`, `Triangle`, `reduce::{argmin, select_nearest}`

mod pairs;
pub mod reduce;

use nalgebra::Vector2;

use crate::cfg::ON_LINE_EPS;
use crate::contact::Contact;
use crate::error::GeomError;
use crate::side::Side;
use crate::triangle::Triangle;

pub use reduce::{argmin, select_nearest};

/// Closest-point query against a shape of type `Rhs`.
pub trait Nearest<Rhs: ?Sized = Self> {
    /// Closest pair, source on `self`, target on `other`.
    fn closest_points(&self, other: &Rhs) -> Result<Contact, GeomError>;

    fn distance_to(&self, other: &Rhs) -> Result<f64, GeomError> {
        Ok(self.closest_points(other)?.distance())
    }
}

/// Free-function form of `Nearest::closest_points`.
#[inline]
pub fn closest_points<A, B>(a: &A, b: &B) -> Result<Contact, GeomError>
where
    A: Nearest<B>,
{
    a.closest_points(b)
}

/// Free-function form of `Nearest::distance_to`.
#[inline]
pub fn distance<A, B>(a: &A, b: &B) -> Result<f64, GeomError>
where
    A: Nearest<B>,
{
    a.distance_to(b)
}

/// Any supported shape, for callers that only know kinds at run time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Point(Vector2<f64>),
    Side(Side),
    Triangle(Triangle),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Side(_) => "side",
            Shape::Triangle(_) => "triangle",
        }
    }

    /// Membership; a point shape contains what lies within `ON_LINE_EPS` of it.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        match self {
            Shape::Point(q) => (p - q).norm() <= ON_LINE_EPS,
            Shape::Side(s) => s.contains(p),
            Shape::Triangle(t) => t.contains(p),
        }
    }

    pub fn offset(&self, delta: Vector2<f64>) -> Result<Shape, GeomError> {
        Ok(match self {
            Shape::Point(q) => Shape::Point(q + delta),
            Shape::Side(s) => Shape::Side(s.offset(delta)?),
            Shape::Triangle(t) => Shape::Triangle(t.offset(delta)?),
        })
    }

    pub fn rotate(&self, pivot: Vector2<f64>, angle: f64) -> Result<Shape, GeomError> {
        Ok(match self {
            Shape::Point(q) => Shape::Point(crate::algebra::rotate_about(*q, pivot, angle)),
            Shape::Side(s) => Shape::Side(s.rotate(pivot, angle)?),
            Shape::Triangle(t) => Shape::Triangle(t.rotate(pivot, angle)?),
        })
    }
}

impl From<Vector2<f64>> for Shape {
    fn from(p: Vector2<f64>) -> Self {
        Shape::Point(p)
    }
}

impl From<Side> for Shape {
    fn from(s: Side) -> Self {
        Shape::Side(s)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl Nearest for Shape {
    fn closest_points(&self, other: &Shape) -> Result<Contact, GeomError> {
        match (self, other) {
            (Shape::Point(a), Shape::Point(b)) => a.closest_points(b),
            (Shape::Point(a), Shape::Side(b)) => a.closest_points(b),
            (Shape::Point(a), Shape::Triangle(b)) => a.closest_points(b),
            (Shape::Side(a), Shape::Point(b)) => a.closest_points(b),
            (Shape::Side(a), Shape::Side(b)) => a.closest_points(b),
            (Shape::Side(a), Shape::Triangle(b)) => a.closest_points(b),
            (Shape::Triangle(a), Shape::Point(b)) => a.closest_points(b),
            (Shape::Triangle(a), Shape::Side(b)) => a.closest_points(b),
            (Shape::Triangle(a), Shape::Triangle(b)) => a.closest_points(b),
        }
    }
}
