//! Hour-minute-second right ascension notation.

use std::f64::consts::TAU;

use winnow::{
    ModalResult, Parser as _,
    ascii::multispace0,
    combinator::{opt, preceded, terminated},
};

use starchart_core::reading::Reading;

use crate::{numeral::unsigned_number, read_prefix};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parses a right ascension such as `14h 29m 43.0s` into radians.
///
/// The grammar is `<hours>h`, optionally followed by `<minutes>m` and, only
/// after minutes, optionally `<seconds>s`, with optional whitespace between
/// components. No sign is recognized. Missing minutes and seconds count as
/// zero. The result is `(hours·3600 + minutes·60 + seconds)·(360/86400)`
/// degrees, converted to radians.
///
/// Blank input or input that does not start with this grammar gives
/// [`Reading::Missing`].
///
/// # Examples
///
/// ```
/// # use starchart_parser::parse_right_ascension;
/// # use std::f64::consts::FRAC_PI_2;
/// assert_eq!(parse_right_ascension("0h").value(), Some(0.0));
/// let six_hours = parse_right_ascension("6h 0m 0s").value().unwrap();
/// assert!((six_hours - FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn parse_right_ascension(text: &str) -> Reading {
    read_prefix("right ascension", right_ascension, text)
}

fn right_ascension(input: &mut &str) -> ModalResult<f64> {
    preceded(
        multispace0,
        (
            terminated(unsigned_number, 'h'),
            opt((
                preceded(multispace0, terminated(unsigned_number, 'm')),
                opt(preceded(multispace0, terminated(unsigned_number, 's'))),
            )),
        ),
    )
    .map(|(hours, rest)| {
        let (minutes, seconds) = rest
            .map(|(minutes, seconds)| (minutes, seconds.unwrap_or(0.0)))
            .unwrap_or((0.0, 0.0));
        let total_seconds = hours * 3600.0 + minutes * 60.0 + seconds;
        let degrees = total_seconds * (360.0 / SECONDS_PER_DAY);
        degrees * (TAU / 360.0)
    })
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    fn radians(hours: f64, minutes: f64, seconds: f64) -> f64 {
        (hours * 3600.0 + minutes * 60.0 + seconds) * (360.0 / 86_400.0) * PI / 180.0
    }

    fn parsed(text: &str) -> f64 {
        parse_right_ascension(text)
            .value()
            .unwrap_or_else(|| panic!("`{text}` should parse"))
    }

    #[test]
    fn test_zero() {
        assert_eq!(parse_right_ascension("0h"), Reading::Value(0.0));
    }

    #[test]
    fn test_six_hours_is_quarter_turn() {
        assert_approx_eq!(f64, parsed("6h 0m 0s"), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_full_notation() {
        assert_approx_eq!(f64, parsed("6h 5m 30s"), radians(6.0, 5.0, 30.0), epsilon = 1e-12);
        assert_approx_eq!(f64, parsed("14h 29m 43.0s"), radians(14.0, 29.0, 43.0), epsilon = 1e-12);
    }

    #[test]
    fn test_without_whitespace() {
        assert_approx_eq!(f64, parsed("17h57m48.5s"), radians(17.0, 57.0, 48.5), epsilon = 1e-12);
    }

    #[test]
    fn test_components_default_to_zero() {
        assert_approx_eq!(f64, parsed("12h"), PI, epsilon = 1e-12);
        assert_approx_eq!(f64, parsed("12h 30m"), radians(12.0, 30.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_unmarked_minutes_ignored() {
        assert_approx_eq!(f64, parsed("12h 30"), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_trailing_content_ignored() {
        assert_approx_eq!(
            f64,
            parsed("10h 56m 29.2s[7]"),
            radians(10.0, 56.0, 29.2),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_missing() {
        assert!(parse_right_ascension("").is_missing());
        assert!(parse_right_ascension("h").is_missing());
        assert!(parse_right_ascension("-6h").is_missing());
        assert!(parse_right_ascension("45° 30′").is_missing());
        assert!(parse_right_ascension("unknown").is_missing());
    }
}
