//! Output records produced by [`extract_palette`](crate::extract_palette).
//!
//! These are the serialized shapes of the exported JSON:
//!
//! ```json
//! [
//!   {
//!     "name": "primary",
//!     "variable": "--kf-color-primary",
//!     "values": {
//!       "500": {
//!         "oklch": "oklch(60% 0.15 250deg)",
//!         "hex": "#2784d5",
//!         "rgba": "rgba(39, 132, 213, 1)"
//!       }
//!     }
//!   }
//! ]
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::parser::declarations::FlatFamily;
use crate::parser::oklch::parse_oklch;

/// A single token value in every exported format.
///
/// `hex` and `rgba` are `None` exactly when the raw value could not be
/// parsed as `oklch()`. The raw string is always kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedValue {
    pub oklch: String,
    pub hex: Option<String>,
    pub rgba: Option<String>,
}

impl EnrichedValue {
    /// Converts a raw declaration value, degrading to `null` formats on
    /// parse failure.
    pub fn from_raw(raw: &str) -> Self {
        match parse_oklch(raw) {
            Ok(color) => {
                let rgb = color.to_rgb();
                Self {
                    oklch: raw.to_string(),
                    hex: Some(rgb.to_hex()),
                    rgba: Some(rgb.to_rgba_string()),
                }
            }
            Err(err) => {
                log::warn!("Keeping unconverted value {:?}: {}", raw, err);
                Self::unparsed(raw)
            }
        }
    }

    /// A value that kept only its raw string.
    pub fn unparsed(raw: &str) -> Self {
        Self {
            oklch: raw.to_string(),
            hex: None,
            rgba: None,
        }
    }

    /// Returns true if the value was converted.
    pub fn is_converted(&self) -> bool {
        self.hex.is_some()
    }
}

/// One named token family with its values keyed by shade.
///
/// `values` keeps the order in which shades were first seen in the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    /// CSS property prefix shared by the family, e.g. `--kf-color-primary`.
    pub variable: String,
    pub values: IndexMap<String, EnrichedValue>,
}

/// The records of one flat family. Always a single record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FamilyRecords {
    pub family: FlatFamily,
    pub records: Vec<OutputRecord>,
}

/// Everything extracted from one stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Grouped records, in first-seen group order.
    pub groups: Vec<OutputRecord>,
    /// Flat families, in configuration order.
    pub families: Vec<FamilyRecords>,
}

impl Palette {
    /// Looks up a flat family's records by its output name.
    pub fn family(&self, name: &str) -> Option<&[OutputRecord]> {
        self.families
            .iter()
            .find(|entry| entry.family.name == name)
            .map(|entry| entry.records.as_slice())
    }

    /// Total number of values across all records, converted or not.
    pub fn value_count(&self) -> usize {
        self.groups
            .iter()
            .chain(self.families.iter().flat_map(|entry| entry.records.iter()))
            .map(|record| record.values.len())
            .sum()
    }
}
