//! Leading signed decimal numbers.
//!
//! Also home to the sign and digit grammars the angle parsers build on.

use winnow::{
    ModalResult, Parser as _,
    ascii::{digit0, digit1, multispace0},
    combinator::{alt, opt, preceded},
    token::one_of,
};

use starchart_core::reading::Reading;

use crate::read_prefix;

/// Characters read as a negative sign: ASCII hyphen-minus, minus sign,
/// en dash, and em dash.
const NEGATIVE_SIGNS: [char; 4] = ['-', '\u{2212}', '\u{2013}', '\u{2014}'];

/// Parses the leading signed decimal number of `text`.
///
/// Whitespace before the number is skipped. The sign may be `+`, an ASCII
/// `-`, or one of the typographic minus and dash characters; no sign means
/// positive. The number is the longest run of digits with at most one
/// decimal point. Anything after it (error margins, footnote brackets, unit
/// suffixes) is ignored.
///
/// # Examples
///
/// ```
/// # use starchart_parser::parse_numeral;
/// assert_eq!(parse_numeral("0").value(), Some(0.0));
/// assert_eq!(parse_numeral("\u{2014}1.5").value(), Some(-1.5));
/// assert_eq!(parse_numeral("8.6 ± 0.1 [4]").value(), Some(8.6));
/// assert!(parse_numeral("").is_missing());
/// ```
pub fn parse_numeral(text: &str) -> Reading {
    read_prefix("numeral", numeral, text)
}

fn numeral(input: &mut &str) -> ModalResult<f64> {
    preceded(multispace0, (sign, unsigned_number))
        .map(|(sign, magnitude)| sign * magnitude)
        .parse_next(input)
}

/// Optional sign, as a factor of `1.0` or `-1.0`.
pub(crate) fn sign(input: &mut &str) -> ModalResult<f64> {
    opt(one_of(|c: char| c == '+' || NEGATIVE_SIGNS.contains(&c)))
        .map(|sign| match sign {
            Some(c) if NEGATIVE_SIGNS.contains(&c) => -1.0,
            _ => 1.0,
        })
        .parse_next(input)
}

/// Digits with at most one decimal point: `12`, `12.`, `12.5`, or `.5`.
pub(crate) fn unsigned_number(input: &mut &str) -> ModalResult<f64> {
    alt(((digit1, opt(('.', digit0))).take(), ('.', digit1).take()))
        .try_map(|digits: &str| digits.parse::<f64>())
        .parse_next(input)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn numeral_text_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            (0u32..1_000_000).prop_map(|n| n.to_string()),
            (0u32..100_000, 0u32..10_000).prop_map(|(i, f)| format!("{i}.{f}")),
        ]
    }

    /// Negating the text negates the value, for every negative sign form.
    fn check_sign_negates(text: &str) -> Result<(), TestCaseError> {
        let positive = parse_numeral(text).value().expect("generated numerals parse");
        for negative_sign in NEGATIVE_SIGNS {
            let negated = parse_numeral(&format!("{negative_sign}{text}"));
            prop_assert_eq!(negated, Reading::Value(-positive));
        }
        Ok(())
    }

    /// The value matches the standard library's parse of the same digits.
    fn check_matches_std_parse(text: &str) -> Result<(), TestCaseError> {
        let expected: f64 = text.parse().expect("generated numerals are valid floats");
        prop_assert_eq!(parse_numeral(text), Reading::Value(expected));
        Ok(())
    }

    proptest! {
        #[test]
        fn sign_negates(text in numeral_text_strategy()) {
            check_sign_negates(&text)?;
        }

        #[test]
        fn matches_std_parse(text in numeral_text_strategy(), suffix in "[ ±\\[\\]a-z]{0,6}") {
            check_matches_std_parse(&text)?;
            let with_suffix = format!("{text}{suffix}");
            prop_assert_eq!(parse_numeral(&with_suffix), parse_numeral(&text));
        }
    }
}
