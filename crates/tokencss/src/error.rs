//! Error types for OKLCH value parsing.
//!
//! Parsing failures never abort an extraction. The aggregator turns every
//! [`ColorParseError`] into an entry with `null` hex/rgba fields and logs
//! the reason, so these errors exist mostly for diagnostics and for callers
//! that use [`parse_oklch`](crate::parser::oklch::parse_oklch) directly.

use thiserror::Error;

/// Which of the three `oklch()` components failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Lightness,
    Chroma,
    Hue,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Component::Lightness => "lightness",
            Component::Chroma => "chroma",
            Component::Hue => "hue",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when parsing an `oklch()` value.
///
/// # Examples
///
/// ```rust
/// use tokencss::parser::oklch::parse_oklch;
/// use tokencss::ColorParseError;
///
/// let err = parse_oklch("#ff0000").unwrap_err();
/// assert!(matches!(err, ColorParseError::NoMatch(_)));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// The value does not contain an `oklch(L C h)` expression.
    #[error("not an oklch(L C h) expression: {0}")]
    NoMatch(String),

    /// A component token has no numeric prefix, or is not a finite number.
    #[error("invalid {component} component: {token}")]
    InvalidComponent { component: Component, token: String },
}
