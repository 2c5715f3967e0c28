//! Parsers for the notations found in nearby-star catalogs.
//!
//! Catalog cells are free text written for people: distances carry error
//! margins and footnote markers, declinations use typographic minus signs
//! and degree/prime/double-prime marks, and right ascensions are written in
//! hours, minutes, and seconds. Each notation has its own grammar here:
//!
//! - [`parse_numeral`] - a leading signed decimal number
//! - [`parse_declination`] - `±DD°MM′SS″`, in radians
//! - [`parse_right_ascension`] - `HHh MMm SSs`, in radians
//!
//! All three read a prefix of their input and ignore whatever follows it.
//! None of them fail: input that does not match, and blank input, produce
//! [`Reading::Missing`].
//!
//! ```
//! # use starchart_parser::{parse_declination, parse_numeral, parse_right_ascension};
//! assert_eq!(parse_numeral("4.2465±0.0003").value(), Some(4.2465));
//! assert!(parse_declination("\u{2212}62° 40′ 46.1″").value().unwrap() < 0.0);
//! assert!(parse_right_ascension("n/a").is_missing());
//! ```

mod declination;
mod numeral;
mod right_ascension;

pub use declination::parse_declination;
pub use numeral::parse_numeral;
pub use right_ascension::parse_right_ascension;

use log::trace;
use winnow::ModalResult;

use starchart_core::reading::Reading;

/// Runs a notation grammar over the start of `text`.
///
/// Trailing content is left unread; a grammar mismatch or a non-finite result
/// becomes [`Reading::Missing`].
fn read_prefix(
    notation: &'static str,
    mut grammar: impl FnMut(&mut &str) -> ModalResult<f64>,
    text: &str,
) -> Reading {
    let mut input = text;
    match grammar(&mut input) {
        Ok(value) => {
            trace!(notation, text, value, rest = input; "Parsed notation");
            Reading::from_f64(value)
        }
        Err(_) => {
            trace!(notation, text; "Unrecognized notation");
            Reading::Missing
        }
    }
}
