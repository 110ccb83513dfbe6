//! Planar nearest-feature kernel.
//!
//! Points, sides (directed segments) and triangles, with exact-as-possible
//! closest-point and distance queries between any two of them.
//!
//! Layout (leaf to root)
//! - `algebra`: dot/cross, rotation, signed area, area moment, join/meet/project.
//! - `point`, `line`: homogeneous points and oriented infinite lines.
//! - `side`, `triangle`: validated shape values with barycentric queries.
//! - `contact`: the closest-point result value.
//! - `nearest`: arg-min reducer and the `Nearest` trait for every shape pair.
//!
//! Conventions
//! - Right-handed, CCW-positive signed area.
//! - `join(A, B)` has its normal on the left of travel `A → B`, matching
//!   `Side::normal`; signed distances are positive on the left.
//! - All values are immutable `Copy` types; "moving" a shape builds a new one.

pub mod algebra;
pub mod cfg;
pub mod contact;
pub mod error;
pub mod line;
pub mod nearest;
pub mod point;
pub mod sample;
pub mod side;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use contact::Contact;
pub use error::GeomError;
pub use line::Line;
pub use nalgebra::{Matrix2 as Mat2, Vector2};
pub use nearest::{Nearest, Shape};
pub use point::{Point, PointKind};
pub use side::Side;
pub use triangle::Triangle;

/// Cartesian 2D vector used for positions, directions and offsets.
pub type Vec2 = Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{area, cross, join, meet, meet_position, project, rotate, rotate_about};
    pub use crate::nearest::{Nearest, Shape};
    pub use crate::{Contact, GeomError, Line, Point, PointKind, Side, Triangle, Vec2};
}
