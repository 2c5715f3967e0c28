//! Degree-minute-second declination notation.

use std::f64::consts::TAU;

use winnow::{
    ModalResult, Parser,
    ascii::multispace0,
    combinator::{opt, preceded, terminated},
    error::{ContextError, ErrMode},
    token::one_of,
};

use starchart_core::reading::Reading;

use crate::{
    numeral::{sign, unsigned_number},
    read_prefix,
};

const DEGREE_MARKS: [char; 2] = ['°', 'd'];
const MINUTE_MARKS: [char; 2] = ['′', 'm'];
const SECOND_MARKS: [char; 2] = ['″', 's'];

/// Parses a declination such as `−53°19′06″` into signed radians.
///
/// The grammar is an optional sign followed by `<degrees>°`, optionally
/// `<minutes>′`, and, only after minutes, optionally `<seconds>″`. The ASCII
/// marks `d`, `m`, and `s` are accepted in place of `°`, `′`, and `″`, and
/// whitespace may separate the components. Missing minutes and seconds count
/// as zero. The sign applies to the whole angle, so `−0° 30′` is south of the
/// equator.
///
/// Trailing content (error margins, citation markers) is ignored. Blank input
/// or input that does not start with this grammar gives
/// [`Reading::Missing`].
///
/// # Examples
///
/// ```
/// # use starchart_parser::parse_declination;
/// # use std::f64::consts::FRAC_PI_2;
/// assert_eq!(parse_declination("0°").value(), Some(0.0));
/// let south_pole = parse_declination("\u{2014}90°").value().unwrap();
/// assert!((south_pole + FRAC_PI_2).abs() < 1e-12);
/// assert!(parse_declination("12h").is_missing());
/// ```
pub fn parse_declination(text: &str) -> Reading {
    read_prefix("declination", declination, text)
}

fn declination(input: &mut &str) -> ModalResult<f64> {
    preceded(
        multispace0,
        (
            sign,
            terminated(unsigned_number, one_of(DEGREE_MARKS)),
            opt((
                marked_component(MINUTE_MARKS),
                opt(marked_component(SECOND_MARKS)),
            )),
        ),
    )
    .map(|(sign, degrees, rest)| {
        let (minutes, seconds) = rest
            .map(|(minutes, seconds)| (minutes, seconds.unwrap_or(0.0)))
            .unwrap_or((0.0, 0.0));
        let total_degrees = degrees + minutes / 60.0 + seconds / 3600.0;
        sign * total_degrees * (TAU / 360.0)
    })
    .parse_next(input)
}

/// A number immediately followed by one of `marks`, after optional whitespace.
fn marked_component<'s>(
    marks: [char; 2],
) -> impl Parser<&'s str, f64, ErrMode<ContextError>> {
    preceded(multispace0, terminated(unsigned_number, one_of(marks)))
}
