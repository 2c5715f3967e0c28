//! Value-or-missing measurements.
//!
//! Catalog fields are free text, and any of them may fail to parse. Instead of
//! raising, a failed parse produces [`Reading::Missing`], which then flows
//! through every later computation: combining a missing reading with anything
//! yields a missing reading. A missing value is never replaced by zero, so a
//! system with an unknown angle or distance can never land at the origin.
//!
//! # Example
//!
//! ```
//! # use starchart_core::reading::Reading;
//! let distance = Reading::Value(4.2);
//! let angle = Reading::<f64>::Missing;
//!
//! let product = distance.zip_with(angle, |d, a| d * a.cos());
//! assert!(product.is_missing());
//! assert!(product.to_f64().is_nan());
//! ```

use std::fmt;

/// A measurement that is either known or missing.
///
/// The default type parameter covers the common case of a scalar reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading<T = f64> {
    /// A successfully parsed or derived value.
    Value(T),
    /// The source was absent or did not match the expected notation.
    Missing,
}

impl<T> Reading<T> {
    /// Returns `true` if this reading carries no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns the inner value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing => None,
        }
    }

    /// Returns a reading borrowing the inner value.
    pub fn as_ref(&self) -> Reading<&T> {
        match self {
            Self::Value(value) => Reading::Value(value),
            Self::Missing => Reading::Missing,
        }
    }

    /// Applies `f` to a known value; a missing reading stays missing.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reading<U> {
        match self {
            Self::Value(value) => Reading::Value(f(value)),
            Self::Missing => Reading::Missing,
        }
    }

    /// Combines two readings; the result is missing if either side is.
    pub fn zip_with<U, R>(self, other: Reading<U>, f: impl FnOnce(T, U) -> R) -> Reading<R> {
        match (self, other) {
            (Self::Value(a), Reading::Value(b)) => Reading::Value(f(a, b)),
            _ => Reading::Missing,
        }
    }

    /// Chains a computation that may itself produce a missing reading.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Reading<U>) -> Reading<U> {
        match self {
            Self::Value(value) => f(value),
            Self::Missing => Reading::Missing,
        }
    }
}

impl Reading<f64> {
    /// Wraps a float, treating NaN and infinities as missing.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::Missing
        }
    }

    /// Converts to a plain float, with NaN standing in for a missing value.
    ///
    /// Only meant for handing values to collaborators that expect the NaN
    /// convention; internal code should keep working with the [`Reading`].
    pub fn to_f64(self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }
}

impl<T> Default for Reading<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> From<Option<T>> for Reading<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Missing,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Reading<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt(f),
            Self::Missing => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_map() {
        assert_eq!(Reading::Value(2.0).map(|v| v * 3.0), Reading::Value(6.0));
        assert!(Reading::<f64>::Missing.map(|v| v * 3.0).is_missing());
    }

    #[test]
    fn test_reading_zip_with_propagates_missing() {
        let known = Reading::Value(1.5);
        let missing = Reading::<f64>::Missing;

        assert_eq!(known.zip_with(known, |a, b| a + b), Reading::Value(3.0));
        assert!(known.zip_with(missing, |a, b| a + b).is_missing());
        assert!(missing.zip_with(known, |a, b| a + b).is_missing());
    }

    #[test]
    fn test_reading_and_then() {
        let halve_positive = |v: f64| {
            if v > 0.0 {
                Reading::Value(v / 2.0)
            } else {
                Reading::Missing
            }
        };

        assert_eq!(Reading::Value(4.0).and_then(halve_positive), Reading::Value(2.0));
        assert!(Reading::Value(-4.0).and_then(halve_positive).is_missing());
    }

    #[test]
    fn test_reading_from_f64() {
        assert_eq!(Reading::from_f64(0.0), Reading::Value(0.0));
        assert!(Reading::from_f64(f64::NAN).is_missing());
        assert!(Reading::from_f64(f64::INFINITY).is_missing());
    }

    #[test]
    fn test_reading_to_f64() {
        assert_eq!(Reading::Value(-1.5).to_f64(), -1.5);
        assert!(Reading::Missing.to_f64().is_nan());
    }

    #[test]
    fn test_reading_default_is_missing() {
        assert!(Reading::<f64>::default().is_missing());
    }

    #[test]
    fn test_reading_display() {
        assert_eq!(Reading::Value(2.5).to_string(), "2.5");
        assert_eq!(Reading::<f64>::Missing.to_string(), "NaN");
    }
}
