//! `oklch()` value parsing.
//!
//! Accepts the three-component form used by design tokens:
//!
//! ```css
//! oklch(60% 0.15 250deg)
//! oklch(0.6 0.15 250)
//! ```
//!
//! - Lightness: a number, or a percentage divided by 100. Clamped to `[0, 1]`.
//! - Chroma: a bare number.
//! - Hue: degrees, with or without the `deg` suffix.
//!
//! Each component is read from its leading numeric prefix, so a trailing
//! unit other than `%`/`deg` is ignored rather than rejected. An alpha
//! component (`/ 0.5`) or any fourth token makes the value unparseable.

use nom::{
    IResult,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::char,
    sequence::tuple,
};

use crate::error::{ColorParseError, Component};
use crate::parser::units::leading_number;
use crate::types::color::Oklch;

fn is_space(c: char) -> bool {
    c.is_whitespace()
}

fn is_token_char(c: char) -> bool {
    !c.is_whitespace()
}

/// Matches `oklch( L C h )` and returns the three raw component tokens.
fn oklch_expression(input: &str) -> IResult<&str, (&str, &str, &str)> {
    let (input, (_, _, l, _, c, _, h, _, _)) = tuple((
        tag_no_case("oklch("),
        take_while(is_space),
        take_while1(is_token_char),
        take_while1(is_space),
        take_while1(is_token_char),
        take_while1(is_space),
        take_while1(|ch: char| is_token_char(ch) && ch != ')'),
        take_while(is_space),
        char(')'),
    ))(input)?;

    Ok((input, (l, c, h)))
}

fn component(token: &str, component: Component) -> Result<f64, ColorParseError> {
    leading_number(token).ok_or_else(|| ColorParseError::InvalidComponent {
        component,
        token: token.to_string(),
    })
}

/// Parses the first `oklch(L C h)` expression found in `raw`.
///
/// The function name is case-insensitive and the expression may be
/// surrounded by other text.
///
/// # Examples
///
/// ```
/// use tokencss::parser::oklch::parse_oklch;
///
/// let color = parse_oklch("oklch(60% 0.1 30deg)").unwrap();
/// assert_eq!(color, parse_oklch("oklch(0.6 0.1 30)").unwrap());
/// assert_eq!(color.l, 0.6);
/// ```
pub fn parse_oklch(raw: &str) -> Result<Oklch, ColorParseError> {
    let (l_token, c_token, h_token) = raw
        .char_indices()
        .find_map(|(idx, _)| oklch_expression(&raw[idx..]).ok())
        .map(|(_, tokens)| tokens)
        .ok_or_else(|| ColorParseError::NoMatch(raw.to_string()))?;

    let lightness = component(l_token, Component::Lightness)?;
    let lightness = if l_token.ends_with('%') {
        lightness / 100.0
    } else {
        lightness
    };
    let chroma = component(c_token, Component::Chroma)?;
    let hue = component(
        h_token.strip_suffix("deg").unwrap_or(h_token),
        Component::Hue,
    )?;

    Ok(Oklch::new(lightness, chroma, hue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_lightness() {
        let color = parse_oklch("oklch(60% 0.15 250deg)").unwrap();
        assert_eq!(color.l, 0.6);
        assert_eq!(color.c, 0.15);
        assert_eq!(color.h, 250.0);
    }

    #[test]
    fn test_bare_lightness() {
        let color = parse_oklch("oklch(0.7 0.1 30)").unwrap();
        assert_eq!(color, Oklch::new(0.7, 0.1, 30.0));
    }

    #[test]
    fn test_unit_equivalence() {
        assert_eq!(
            parse_oklch("oklch(60% 0.1 30deg)").unwrap(),
            parse_oklch("oklch(0.6 0.1 30)").unwrap()
        );
    }

    #[test]
    fn test_lightness_clamped_after_parse() {
        assert_eq!(
            parse_oklch("oklch(150% 0 0)").unwrap(),
            parse_oklch("oklch(100% 0 0)").unwrap()
        );
        assert_eq!(parse_oklch("oklch(-0.5 0 0)").unwrap().l, 0.0);
    }

    #[test]
    fn test_chroma_and_hue_not_validated() {
        let color = parse_oklch("oklch(0.5 -0.3 -400deg)").unwrap();
        assert_eq!(color.c, -0.3);
        assert_eq!(color.h, -400.0);
    }

    #[test]
    fn test_whitespace_and_case() {
        let expected = Oklch::new(0.5, 0.1, 120.0);
        assert_eq!(parse_oklch("OKLCH(0.5 0.1 120)").unwrap(), expected);
        assert_eq!(parse_oklch("oklch(  0.5\t0.1\n120  )").unwrap(), expected);
        assert_eq!(parse_oklch("  oklch(0.5 0.1 120) !important").unwrap(), expected);
    }

    #[test]
    fn test_other_hue_units_read_as_degrees() {
        assert_eq!(parse_oklch("oklch(0.5 0.1 2rad)").unwrap().h, 2.0);
    }

    #[test]
    fn test_trailing_text_after_numbers_is_ignored() {
        // Components are read from their numeric prefix only
        assert_eq!(
            parse_oklch("oklch(0.5, 0.1, 30)").unwrap(),
            Oklch::new(0.5, 0.1, 30.0)
        );
    }

    #[test]
    fn test_no_match() {
        for raw in [
            "#ff0000",
            "rgb(255, 0, 0)",
            "oklch(0.5 0.1)",
            "oklch(0.5 0.1 30 / 0.5)",
            "oklch(0.5 0.1 30",
            "",
        ] {
            assert!(
                matches!(parse_oklch(raw), Err(ColorParseError::NoMatch(_))),
                "expected no match for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_invalid_components() {
        assert_eq!(
            parse_oklch("oklch(notanumber 0.1 30)"),
            Err(ColorParseError::InvalidComponent {
                component: Component::Lightness,
                token: "notanumber".to_string(),
            })
        );
        assert!(matches!(
            parse_oklch("oklch(0.5 none 30)"),
            Err(ColorParseError::InvalidComponent {
                component: Component::Chroma,
                ..
            })
        ));
        assert!(matches!(
            parse_oklch("oklch(0.5 0.1 deg)"),
            Err(ColorParseError::InvalidComponent {
                component: Component::Hue,
                ..
            })
        ));
    }
}
