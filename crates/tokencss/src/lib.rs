//! # tokencss - OKLCH color tokens from CSS
//!
//! Finds design-token color declarations in CSS custom properties and
//! converts their `oklch()` values to hex and `rgba()` strings.
//!
//! This crate provides:
//!
//! - **Extraction**: Scan raw CSS for grouped (`--kf-color-primary-500`,
//!   `--kf-color-accent`) and flat (`--vipps-color-50`) token declarations
//! - **Conversion**: OKLCH → linear sRGB → 8-bit sRGB with exact Oklab matrices
//! - **Records**: Ordered, serializable records ready for JSON export
//!
//! ## Quick Start
//!
//! ```rust
//! use tokencss::{TokenGrammar, extract_palette};
//!
//! let css = r#"
//!     :root {
//!         --kf-color-primary-500: oklch(60% 0.15 250deg);
//!         --kf-color-accent: oklch(0.7 0.1 30);
//!         --kf-color-broken-100: oklch(notanumber 0.1 30);
//!     }
//! "#;
//!
//! let palette = extract_palette(css, &TokenGrammar::default());
//! assert_eq!(palette.groups.len(), 3);
//!
//! let accent = &palette.groups[2];
//! assert_eq!(accent.variable, "--kf-color-accent");
//! assert_eq!(accent.values["base"].rgba.as_deref(), Some("rgba(213, 134, 121, 1)"));
//!
//! // Malformed values keep their raw string and have no formats
//! assert_eq!(palette.groups[1].values["100"].hex, None);
//! ```
//!
//! ## Not Supported
//!
//! - Alpha (`oklch(L C h / a)`), `color-mix()` and relative color syntax
//! - Resolving `var()` references
//! - Hue normalization or chroma gamut mapping
//!
//! ## Modules
//!
//! - [`parser`]: Token discovery and `oklch()` parsing
//! - [`types`]: Color types and output records
//! - [`palette`]: Assembly of records from extracted tokens
//! - [`error`]: Error types for value parsing

pub mod error;
pub mod palette;
pub mod parser;
pub mod types;

pub use error::ColorParseError;
pub use palette::extract_palette;
pub use parser::{ColorGroups, FlatFamily, TokenGrammar};
pub use types::{EnrichedValue, OutputRecord, Palette};
