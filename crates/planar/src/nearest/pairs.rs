//! `Nearest` for every ordered pair of {point, side, triangle}.
//!
//! Enumeration order is part of the contract (it decides ties):
//! - side↔point: projection (if on the segment), A, B
//! - side↔side: self↔other.A, self↔other.B, other↔self.A, other↔self.B, crossing
//! - triangle↔point: A, B, C, AB, BC, CA, interior
//! - triangle↔side: side↔A, side↔B, side↔C, self↔side.A, self↔side.B,
//!   crossings with AB, BC, CA
//! - triangle↔triangle: self↔other.AB/BC/CA, self↔other.A/B/C, other↔self.A/B/C
//!
//! Reversed pairs delegate and flip.

use nalgebra::Vector2;

use super::reduce::select_nearest;
use super::Nearest;
use crate::algebra::project;
use crate::contact::Contact;
use crate::error::GeomError;
use crate::side::Side;
use crate::triangle::Triangle;

#[inline]
fn touching(x: Vector2<f64>) -> Contact {
    Contact::new(x, x)
}

impl Nearest for Vector2<f64> {
    fn closest_points(&self, other: &Vector2<f64>) -> Result<Contact, GeomError> {
        select_nearest(&[Some(Contact::new(*self, *other))])
    }
}

impl Nearest<Side> for Vector2<f64> {
    fn closest_points(&self, other: &Side) -> Result<Contact, GeomError> {
        Ok(other.closest_points(self)?.flip())
    }
}

impl Nearest<Triangle> for Vector2<f64> {
    fn closest_points(&self, other: &Triangle) -> Result<Contact, GeomError> {
        Ok(other.closest_points(self)?.flip())
    }
}

impl Nearest<Vector2<f64>> for Side {
    fn closest_points(&self, other: &Vector2<f64>) -> Result<Contact, GeomError> {
        let hit = project(&self.on_line(), *other);
        select_nearest(&[
            self.contains(hit).then(|| Contact::new(hit, *other)),
            Some(Contact::new(self.a(), *other)),
            Some(Contact::new(self.b(), *other)),
        ])
    }
}

impl Nearest for Side {
    fn closest_points(&self, other: &Side) -> Result<Contact, GeomError> {
        select_nearest(&[
            Some(self.closest_points(&other.a())?),
            Some(self.closest_points(&other.b())?),
            Some(other.closest_points(&self.a())?.flip()),
            Some(other.closest_points(&self.b())?.flip()),
            self.crossing(other).map(touching),
        ])
    }
}

impl Nearest<Triangle> for Side {
    fn closest_points(&self, other: &Triangle) -> Result<Contact, GeomError> {
        Ok(other.closest_points(self)?.flip())
    }
}

impl Nearest<Vector2<f64>> for Triangle {
    fn closest_points(&self, other: &Vector2<f64>) -> Result<Contact, GeomError> {
        let [ab, bc, ca] = self.sides();
        select_nearest(&[
            Some(Contact::new(self.a(), *other)),
            Some(Contact::new(self.b(), *other)),
            Some(Contact::new(self.c(), *other)),
            Some(ab.closest_points(other)?),
            Some(bc.closest_points(other)?),
            Some(ca.closest_points(other)?),
            self.contains(*other).then(|| touching(*other)),
        ])
    }
}

impl Nearest<Side> for Triangle {
    fn closest_points(&self, other: &Side) -> Result<Contact, GeomError> {
        let [ab, bc, ca] = self.sides();
        select_nearest(&[
            Some(other.closest_points(&self.a())?.flip()),
            Some(other.closest_points(&self.b())?.flip()),
            Some(other.closest_points(&self.c())?.flip()),
            Some(self.closest_points(&other.a())?),
            Some(self.closest_points(&other.b())?),
            ab.crossing(other).map(touching),
            bc.crossing(other).map(touching),
            ca.crossing(other).map(touching),
        ])
    }
}

impl Nearest for Triangle {
    fn closest_points(&self, other: &Triangle) -> Result<Contact, GeomError> {
        let [ab, bc, ca] = other.sides();
        select_nearest(&[
            Some(self.closest_points(&ab)?),
            Some(self.closest_points(&bc)?),
            Some(self.closest_points(&ca)?),
            Some(self.closest_points(&other.a())?),
            Some(self.closest_points(&other.b())?),
            Some(self.closest_points(&other.c())?),
            Some(other.closest_points(&self.a())?.flip()),
            Some(other.closest_points(&self.b())?.flip()),
            Some(other.closest_points(&self.c())?.flip()),
        ])
    }
}
