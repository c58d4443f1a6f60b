//! Integration tests for palette assembly and the exported JSON shape.

use tokencss::{EnrichedValue, FlatFamily, OutputRecord, TokenGrammar, extract_palette};

const TOKENS: &str = r#"
:root {
    --kf-color-primary-500: oklch(60% 0.15 250deg);
    --kf-color-primary-600: oklch(notanumber 0.1 30);
    --kf-color-accent: oklch(0.7 0.1 30);
    --vipps-color-50: oklch(0.45 0.05 200);
    --pink-ribbon-color-100: oklch(0.8 0.12 320);
}
"#;

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn test_palette_shape() {
    let palette = extract_palette(TOKENS, &TokenGrammar::default());

    assert_eq!(palette.groups.len(), 2);
    assert_eq!(palette.groups[0].name, "primary");
    assert_eq!(palette.groups[0].variable, "--kf-color-primary");
    assert_eq!(palette.groups[1].name, "accent");
    assert_eq!(palette.groups[1].variable, "--kf-color-accent");

    let vipps = palette.family("vipps").unwrap();
    assert_eq!(vipps.len(), 1);
    assert_eq!(vipps[0].variable, "--vipps-color");
    let shades: Vec<_> = vipps[0].values.keys().map(String::as_str).collect();
    assert_eq!(shades, ["50"]);
    assert_eq!(vipps[0].values["50"].hex.as_deref(), Some("#315e60"));

    let pink = palette.family("pink-ribbon").unwrap();
    assert_eq!(pink.len(), 1);
    assert_eq!(pink[0].variable, "--pink-ribbon-color");
    assert_eq!(pink[0].values["100"].rgba.as_deref(), Some("rgba(224, 164, 238, 1)"));

    assert_eq!(palette.value_count(), 5);
}

#[test]
fn test_malformed_value_is_kept_with_nulls() {
    let palette = extract_palette(TOKENS, &TokenGrammar::default());
    let primary = &palette.groups[0];

    assert_eq!(
        primary.values["600"],
        EnrichedValue {
            oklch: "oklch(notanumber 0.1 30)".to_string(),
            hex: None,
            rgba: None,
        }
    );
    // Its sibling is unaffected
    assert_eq!(primary.values["500"].hex.as_deref(), Some("#2784d5"));
}

#[test]
fn test_custom_grammar() {
    let grammar = TokenGrammar {
        group_prefix: "brand".to_string(),
        flat_families: vec![FlatFamily::new("promo-color", "promo")],
    };
    let css = "--brand-sky-200: oklch(0.8 0.12 320); --promo-color-10: oklch(1 0 0); --kf-color-x-100: oklch(0 0 0);";
    let palette = extract_palette(css, &grammar);

    assert_eq!(palette.groups.len(), 1);
    assert_eq!(palette.groups[0].variable, "--brand-sky");
    assert_eq!(palette.families.len(), 1);
    assert_eq!(palette.family("promo").unwrap()[0].values["10"].hex.as_deref(), Some("#ffffff"));
    assert!(palette.family("vipps").is_none());
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn test_grouped_json_snapshot() {
    let palette = extract_palette(TOKENS, &TokenGrammar::default());
    let json = serde_json::to_string_pretty(&palette.groups).unwrap();

    insta::assert_snapshot!(json, @r###"
    [
      {
        "name": "primary",
        "variable": "--kf-color-primary",
        "values": {
          "500": {
            "oklch": "oklch(60% 0.15 250deg)",
            "hex": "#2784d5",
            "rgba": "rgba(39, 132, 213, 1)"
          },
          "600": {
            "oklch": "oklch(notanumber 0.1 30)",
            "hex": null,
            "rgba": null
          }
        }
      },
      {
        "name": "accent",
        "variable": "--kf-color-accent",
        "values": {
          "base": {
            "oklch": "oklch(0.7 0.1 30)",
            "hex": "#d58679",
            "rgba": "rgba(213, 134, 121, 1)"
          }
        }
      }
    ]
    "###);
}

#[test]
fn test_flat_family_json_snapshot() {
    let palette = extract_palette(TOKENS, &TokenGrammar::default());
    let json = serde_json::to_string_pretty(palette.family("vipps").unwrap()).unwrap();

    insta::assert_snapshot!(json, @r###"
    [
      {
        "name": "vipps",
        "variable": "--vipps-color",
        "values": {
          "50": {
            "oklch": "oklch(0.45 0.05 200)",
            "hex": "#315e60",
            "rgba": "rgba(49, 94, 96, 1)"
          }
        }
      }
    ]
    "###);
}

#[test]
fn test_records_round_trip_through_json() {
    let palette = extract_palette(TOKENS, &TokenGrammar::default());
    let json = serde_json::to_string(&palette.groups).unwrap();
    let parsed: Vec<OutputRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, palette.groups);
}

#[test]
fn test_shade_keys_serialize_in_source_order() {
    let css = "--kf-color-red-900: oklch(0.3 0.1 30); --kf-color-red-100: oklch(0.9 0.03 30); --kf-color-red: oklch(0.6 0.1 30);";
    let palette = extract_palette(css, &TokenGrammar::default());
    let json = serde_json::to_string(&palette.groups[0].values).unwrap();

    let positions: Vec<_> = ["\"900\"", "\"100\"", "\"base\""]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{}", json);
}
