//! Equatorial to Cartesian coordinate transform.
//!
//! Given right ascension `α`, declination `δ` (both radians), and distance
//! `r`:
//!
//! ```text
//! x = r·cos(δ)·cos(α)
//! y = r·cos(δ)·sin(α)
//! z = r·sin(δ)
//! ```
//!
//! The output shares the unit of `r`. A missing input makes the whole
//! position missing.

use starchart_core::{geometry::Cartesian, reading::Reading};

/// Catalog index of the observer's own system.
pub const REFERENCE_INDEX: usize = 0;

/// Converts equatorial coordinates to a Cartesian position.
///
/// # Examples
///
/// ```
/// # use starchart::transform::to_cartesian;
/// # use starchart_core::reading::Reading;
/// let position = to_cartesian(Reading::Value(0.0), Reading::Value(0.0), Reading::Value(4.2));
/// assert_eq!(position.value().map(|p| p.x()), Some(4.2));
///
/// let unknown = to_cartesian(Reading::Missing, Reading::Value(0.0), Reading::Value(4.2));
/// assert!(unknown.is_missing());
/// ```
pub fn to_cartesian(
    right_ascension: Reading,
    declination: Reading,
    distance: Reading,
) -> Reading<Cartesian> {
    right_ascension
        .zip_with(declination, |ra, dec| (ra, dec))
        .zip_with(distance, |(ra, dec), r| Cartesian::from_spherical(ra, dec, r))
}

/// Computes the position of the catalog entry at `index`.
///
/// The reference row ignores its angles and is placed on the +x axis at its
/// distance, which for the observer's own system is the origin.
pub fn position(
    index: usize,
    right_ascension: Reading,
    declination: Reading,
    distance: Reading,
) -> Reading<Cartesian> {
    if index == REFERENCE_INDEX {
        to_cartesian(Reading::Value(0.0), Reading::Value(0.0), distance)
    } else {
        to_cartesian(right_ascension, declination, distance)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_to_cartesian_on_axes() {
        let on_y = to_cartesian(Reading::Value(FRAC_PI_2), Reading::Value(0.0), Reading::Value(3.0))
            .value()
            .unwrap();
        assert_approx_eq!(f64, on_y.x(), 0.0, epsilon = 1e-12);
        assert_approx_eq!(f64, on_y.y(), 3.0);
        assert_approx_eq!(f64, on_y.z(), 0.0);

        let south_pole = to_cartesian(Reading::Value(1.0), Reading::Value(-FRAC_PI_2), Reading::Value(3.0))
            .value()
            .unwrap();
        assert_approx_eq!(f64, south_pole.z(), -3.0);
        assert_approx_eq!(f64, south_pole.planar().hypot(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_input_never_yields_origin() {
        let known = Reading::Value(1.0);
        assert!(to_cartesian(Reading::Missing, known, known).is_missing());
        assert!(to_cartesian(known, Reading::Missing, known).is_missing());
        assert!(to_cartesian(known, known, Reading::Missing).is_missing());
    }

    #[test]
    fn test_reference_row_ignores_angles() {
        let origin = position(REFERENCE_INDEX, Reading::Missing, Reading::Missing, Reading::Value(0.0));
        assert_eq!(origin, Reading::Value(Cartesian::new(0.0, 0.0, 0.0)));

        let offset = position(REFERENCE_INDEX, Reading::Value(2.0), Reading::Value(1.0), Reading::Value(1.5));
        assert_eq!(offset, Reading::Value(Cartesian::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_non_reference_row_missing_angle() {
        let unplaced = position(3, Reading::Missing, Reading::Value(0.2), Reading::Value(8.0));
        assert!(unplaced.is_missing());
    }
}
