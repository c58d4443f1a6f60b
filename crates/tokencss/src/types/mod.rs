//! Core types for parsed colors and exported records.
//!
//! - [`color`]: [`Oklch`] and [`Rgb`], plus the conversion between them
//! - [`record`]: [`EnrichedValue`], [`OutputRecord`] and [`Palette`]

pub mod color;
pub mod record;

pub use color::{Oklch, Rgb};
pub use record::{EnrichedValue, FamilyRecords, OutputRecord, Palette};
