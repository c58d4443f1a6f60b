//! Palette assembly: extracted tokens to exported records.
//!
//! Every extracted (name, shade) pair becomes exactly one [`EnrichedValue`].
//! Values that fail to parse keep their raw string with `null` formats and
//! never abort the run.

use indexmap::IndexMap;

use crate::parser::declarations::{
    ColorGroups, FlatFamily, ShadeValues, TokenGrammar, extract_color_groups, extract_flat_family,
};
use crate::types::record::{EnrichedValue, FamilyRecords, OutputRecord, Palette};

/// Converts every raw value, keeping shade order.
pub fn enrich_values(values: &ShadeValues) -> IndexMap<String, EnrichedValue> {
    values
        .iter()
        .map(|(shade, raw)| (shade.clone(), EnrichedValue::from_raw(raw)))
        .collect()
}

/// Builds one record per group, in first-seen group order.
pub fn group_records(groups: &ColorGroups, grammar: &TokenGrammar) -> Vec<OutputRecord> {
    groups
        .iter()
        .map(|(name, shades)| OutputRecord {
            name: name.to_string(),
            variable: grammar.group_variable(name),
            values: enrich_values(shades),
        })
        .collect()
}

/// Builds the single-record list of a flat family.
///
/// A family with no declarations still yields its record, with no values.
pub fn family_records(shades: &ShadeValues, family: &FlatFamily) -> Vec<OutputRecord> {
    vec![OutputRecord {
        name: family.name.clone(),
        variable: family.variable(),
        values: enrich_values(shades),
    }]
}

/// Extracts and converts every color token in `source`.
///
/// # Examples
///
/// ```
/// use tokencss::{TokenGrammar, extract_palette};
///
/// let css = r#"
///     :root {
///         --kf-color-primary-500: oklch(60% 0.15 250deg);
///         --vipps-color-50: oklch(1 0 0);
///     }
/// "#;
///
/// let palette = extract_palette(css, &TokenGrammar::default());
/// assert_eq!(palette.groups.len(), 1);
/// assert_eq!(palette.groups[0].values["500"].hex.as_deref(), Some("#2784d5"));
/// assert_eq!(palette.family("vipps").unwrap()[0].values["50"].hex.as_deref(), Some("#ffffff"));
/// ```
pub fn extract_palette(source: &str, grammar: &TokenGrammar) -> Palette {
    let groups = extract_color_groups(source, &grammar.group_prefix);
    let palette = Palette {
        groups: group_records(&groups, grammar),
        families: grammar
            .flat_families
            .iter()
            .map(|family| FamilyRecords {
                family: family.clone(),
                records: family_records(&extract_flat_family(source, &family.prefix), family),
            })
            .collect(),
    };

    log::debug!(
        "Extracted {} groups and {} flat families ({} values)",
        palette.groups.len(),
        palette.families.len(),
        palette.value_count()
    );
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrich_values_keeps_order_and_count() {
        let mut shades = ShadeValues::new();
        shades.insert("900".into(), "oklch(0.2 0.05 250)".into());
        shades.insert("100".into(), "broken".into());
        shades.insert("base".into(), "oklch(1 0 0)".into());

        let enriched = enrich_values(&shades);
        let keys: Vec<_> = enriched.keys().map(String::as_str).collect();
        assert_eq!(keys, ["900", "100", "base"]);
        assert!(enriched["900"].is_converted());
        assert_eq!(enriched["100"], EnrichedValue::unparsed("broken"));
        assert_eq!(enriched["base"].hex.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_empty_family_still_has_record() {
        let family = FlatFamily::new("vipps-color", "vipps");
        let records = family_records(&ShadeValues::new(), &family);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "vipps");
        assert_eq!(records[0].variable, "--vipps-color");
        assert!(records[0].values.is_empty());
    }

    #[test]
    fn test_group_variable_uses_prefix() {
        let mut groups = ColorGroups::new();
        groups.define("primary", "500", "oklch(0.6 0.15 250)");
        let grammar = TokenGrammar {
            group_prefix: "brand".to_string(),
            flat_families: Vec::new(),
        };
        let records = group_records(&groups, &grammar);
        assert_eq!(records[0].variable, "--brand-primary");
    }

    #[test]
    fn test_empty_source() {
        let palette = extract_palette("", &TokenGrammar::default());
        assert!(palette.groups.is_empty());
        assert_eq!(palette.families.len(), 2);
        assert_eq!(palette.value_count(), 0);
    }
}
