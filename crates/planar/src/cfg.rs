//! Tolerance defaults for planar queries.
//!
//! Policy
//! - Defaults are fixed constants; every predicate that takes a tolerance also
//!   has an `_eps` variant for callers that need a different slack.

/// Perpendicular distance below which a point counts as lying on a side.
pub const ON_LINE_EPS: f64 = 1e-6;
