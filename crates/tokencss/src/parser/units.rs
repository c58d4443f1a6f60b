//! Numeric prefix parsing for `oklch()` component tokens.
//!
//! Component tokens carry optional unit suffixes (`60%`, `250deg`). The
//! number is read from the longest decimal prefix of the token and whatever
//! follows is left to the caller.

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Recognize a decimal literal: sign, digits with an optional fraction (or a
/// bare `.5` fraction), and an optional exponent.
fn decimal_literal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Parse a floating point or integer number.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(decimal_literal, |s: &str| s.parse::<f64>())(input)
}

/// Returns the value of the token's leading number, ignoring any suffix.
///
/// `None` when the token does not start with a number or the number is not
/// finite (`1e999`).
pub fn leading_number(token: &str) -> Option<f64> {
    parse_number(token)
        .ok()
        .map(|(_, value)| value)
        .filter(|value| value.is_finite())
}
