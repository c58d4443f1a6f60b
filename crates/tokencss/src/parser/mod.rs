//! Token discovery and color value parsing.
//!
//! ## Submodules
//!
//! - [`declarations`]: Finds color token declarations in raw CSS
//! - [`oklch`]: Parses `oklch(L C h)` values
//! - [`units`]: Numeric prefix parsing for component tokens
//!
//! ## Example
//!
//! ```rust
//! use tokencss::parser::{extract_color_groups, parse_oklch};
//!
//! let groups = extract_color_groups("--kf-color-accent: oklch(0.7 0.1 30);", "kf-color");
//! let raw = groups.resolve("accent", "base").unwrap();
//! assert_eq!(parse_oklch(raw).unwrap().to_rgb().to_hex(), "#d58679");
//! ```

pub mod declarations;
pub mod oklch;
pub mod units;

pub use crate::parser::declarations::{
    BASE_SHADE, ColorGroups, FlatFamily, ShadeValues, TokenDeclaration, TokenGrammar,
    extract_color_groups, extract_flat_family, scan_flat, scan_shaded, scan_unshaded,
};
pub use crate::parser::oklch::parse_oklch;
