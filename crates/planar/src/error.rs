//! Error taxonomy for the kernel.
//!
//! - Degenerate input: the caller handed us something with no defined answer
//!   (zero-length side, zero-area triangle, parallel lines, ...).
//! - `Unresolved`: the nearest-feature reducer found no finite candidate. This
//!   is an internal-invariant violation (NaN inputs or a coding defect).

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeomError {
    #[error("kind=zero_length_side: endpoints coincide at ({x}, {y})")]
    ZeroLengthSide { x: f64, y: f64 },
    #[error("kind=degenerate_triangle: vertices are collinear (area {area})")]
    DegenerateTriangle { area: f64 },
    #[error("kind=degenerate_line: normal vector is zero")]
    DegenerateLine,
    #[error("kind=ideal_point: point at infinity has no position")]
    IdealPoint,
    #[error("kind=parallel_lines: lines do not meet at a finite point")]
    ParallelLines,
    #[error("kind=coincident_contact: source and target coincide, direction undefined")]
    CoincidentContact,
    #[error("kind=unresolved: none of {candidates} candidates had a finite distance")]
    Unresolved { candidates: usize },
}

impl GeomError {
    pub fn kind(&self) -> &'static str {
        match self {
            GeomError::ZeroLengthSide { .. } => "zero_length_side",
            GeomError::DegenerateTriangle { .. } => "degenerate_triangle",
            GeomError::DegenerateLine => "degenerate_line",
            GeomError::IdealPoint => "ideal_point",
            GeomError::ParallelLines => "parallel_lines",
            GeomError::CoincidentContact => "coincident_contact",
            GeomError::Unresolved { .. } => "unresolved",
        }
    }

    /// True for errors caused by the caller's input rather than the kernel.
    pub fn is_degenerate_input(&self) -> bool {
        !matches!(self, GeomError::Unresolved { .. })
    }
}
