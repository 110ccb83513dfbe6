//! Arg-min over a fixed candidate list.
//!
//! `None` entries stand for "+∞" (a candidate that does not apply, such as a
//! projection falling outside its segment). Comparison is strict, so the
//! first candidate in enumeration order wins ties. Candidates with a
//! non-finite distance are skipped.

use crate::contact::Contact;
use crate::error::GeomError;

/// Index of the nearest applicable candidate.
pub fn argmin(candidates: &[Option<Contact>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in candidates.iter().enumerate() {
        let Some(c) = c else { continue };
        let d = c.distance();
        if !d.is_finite() {
            continue;
        }
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Nearest candidate, or `Unresolved` when none has a finite distance.
pub fn select_nearest(candidates: &[Option<Contact>]) -> Result<Contact, GeomError> {
    if let Some(c) = argmin(candidates).and_then(|i| candidates[i]) {
        return Ok(c);
    }
    tracing::error!(
        candidates = candidates.len(),
        "nearest-feature reduction found no finite candidate"
    );
    Err(GeomError::Unresolved {
        candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn at(d: f64) -> Option<Contact> {
        Some(Contact::new(vector![0.0, 0.0], vector![d, 0.0]))
    }

    #[test]
    fn picks_smallest_distance() {
        assert_eq!(argmin(&[at(3.0), at(1.0), at(2.0)]), Some(1));
    }

    #[test]
    fn first_candidate_wins_ties() {
        assert_eq!(argmin(&[at(2.0), at(1.0), at(1.0), at(1.0)]), Some(1));
        let a = Contact::new(vector![0.0, 0.0], vector![0.0, 1.0]);
        let b = Contact::new(vector![5.0, 0.0], vector![5.0, 1.0]);
        assert_eq!(select_nearest(&[Some(a), Some(b)]), Ok(a));
        assert_eq!(select_nearest(&[Some(b), Some(a)]), Ok(b));
    }

    #[test]
    fn none_counts_as_infinite() {
        assert_eq!(argmin(&[None, at(4.0), None]), Some(1));
        assert_eq!(argmin(&[None, None]), None);
    }

    #[test]
    fn non_finite_candidates_are_skipped() {
        let nan = Some(Contact::new(vector![f64::NAN, 0.0], vector![0.0, 0.0]));
        assert_eq!(argmin(&[nan, at(7.0)]), Some(1));
        assert_eq!(
            select_nearest(&[nan, None, nan]),
            Err(GeomError::Unresolved { candidates: 3 })
        );
    }

    #[test]
    fn empty_list_is_unresolved() {
        assert_eq!(
            select_nearest(&[]),
            Err(GeomError::Unresolved { candidates: 0 })
        );
    }
}
