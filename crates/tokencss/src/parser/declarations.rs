//! Color token discovery in raw CSS.
//!
//! This module finds custom-property declarations that follow the token
//! naming grammars and collects their raw values:
//!
//! - [`scan_shaded`]: `--<prefix>-<name>-<shade>: <value>;`
//! - [`scan_unshaded`]: `--<prefix>-<name>: <value>;` (stored as `base`)
//! - [`scan_flat`]: `--<prefix>-<shade>: <value>;` (no name component)
//!
//! ## Token Syntax
//!
//! ```css
//! :root {
//!     --kf-color-primary-100: oklch(95% 0.03 250deg);
//!     --kf-color-primary-500: oklch(60% 0.15 250deg);
//!     --kf-color-accent: oklch(0.7 0.1 30);
//!     --vipps-color-50: oklch(0.98 0.02 35);
//! }
//! ```
//!
//! A shade is exactly two or three digits. The `:` must directly follow the
//! name or shade, and the value runs up to the next `;` (a declaration with
//! no `;` is ignored). Matching is purely textual, so declarations inside
//! comments or media queries are found as well.
//!
//! ## Processing Steps
//!
//! 1. Shaded declarations are collected in one pass over the source
//! 2. Unshaded declarations are collected in a second pass
//! 3. Both are merged into [`ColorGroups`]; a repeated key keeps its first
//!    position and takes the last value

use indexmap::IndexMap;
use nom::{
    IResult,
    bytes::complete::{take_till1, take_while_m_n, take_while1},
    character::complete::{alpha1, char},
    combinator::{map, map_opt},
    sequence::terminated,
};
use serde::{Deserialize, Serialize};

/// Shade key used for declarations without a shade suffix.
pub const BASE_SHADE: &str = "base";

/// Raw values of one token family keyed by shade, in first-seen order.
pub type ShadeValues = IndexMap<String, String>;

/// A single matched declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDeclaration<'a> {
    /// Group name; `None` for flat families.
    pub name: Option<&'a str>,
    /// Two or three digit shade, or [`BASE_SHADE`].
    pub shade: &'a str,
    /// The declared value, trimmed.
    pub value: &'a str,
}

/// A token family without a name component, like `--vipps-color-<shade>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatFamily {
    /// Property prefix without the leading `--`, e.g. `vipps-color`.
    pub prefix: String,
    /// Name of the single exported record, e.g. `vipps`.
    pub name: String,
}

impl FlatFamily {
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
        }
    }

    /// The CSS variable shared by the family, e.g. `--vipps-color`.
    pub fn variable(&self) -> String {
        format!("--{}", self.prefix)
    }
}

/// The set of naming grammars to scan for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrammar {
    /// Prefix of grouped tokens without the leading `--`, e.g. `kf-color`.
    pub group_prefix: String,
    pub flat_families: Vec<FlatFamily>,
}

impl Default for TokenGrammar {
    fn default() -> Self {
        Self {
            group_prefix: "kf-color".to_string(),
            flat_families: vec![
                FlatFamily::new("vipps-color", "vipps"),
                FlatFamily::new("pink-ribbon-color", "pink-ribbon"),
            ],
        }
    }
}

impl TokenGrammar {
    /// The CSS variable of a grouped token family, e.g. `--kf-color-primary`.
    pub fn group_variable(&self, name: &str) -> String {
        format!("--{}-{}", self.group_prefix, name)
    }
}

/// Grouped color tokens: name → shade → raw value.
///
/// Both levels keep first-insertion order. Defining an existing
/// (name, shade) pair replaces the value without moving the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorGroups {
    groups: IndexMap<String, ShadeValues>,
}

impl ColorGroups {
    /// Creates an empty group set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a value for the given name and shade.
    pub fn define(&mut self, name: &str, shade: &str, value: &str) {
        self.groups
            .entry(name.to_string())
            .or_default()
            .insert(shade.to_string(), value.to_string());
    }

    /// Returns all shades of a group, if defined.
    pub fn get(&self, name: &str) -> Option<&ShadeValues> {
        self.groups.get(name)
    }

    /// Resolves a single value, if defined.
    pub fn resolve(&self, name: &str, shade: &str) -> Option<&str> {
        self.groups
            .get(name)
            .and_then(|shades| shades.get(shade))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShadeValues)> {
        self.groups
            .iter()
            .map(|(name, shades)| (name.as_str(), shades))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_shade(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Splits `primary-500` into (`primary`, `500`).
fn split_shade(key: &str) -> Option<(&str, &str)> {
    let (name, shade) = key.rsplit_once('-')?;
    (!name.is_empty() && is_shade(shade)).then_some((name, shade))
}

/// `<name>-<shade>:`
fn shaded_key(input: &str) -> IResult<&str, (&str, &str)> {
    map_opt(terminated(take_while1(is_name_char), char(':')), split_shade)(input)
}

/// `<name>:` where the name is letters only.
fn unshaded_key(input: &str) -> IResult<&str, &str> {
    terminated(alpha1, char(':'))(input)
}

/// `<shade>:`
fn flat_key(input: &str) -> IResult<&str, &str> {
    terminated(take_while_m_n(2, 3, |c: char| c.is_ascii_digit()), char(':'))(input)
}

/// Everything up to the terminating `;`, trimmed.
fn declaration_value(input: &str) -> IResult<&str, &str> {
    map(terminated(take_till1(|c: char| c == ';'), char(';')), str::trim)(input)
}

/// Finds every non-overlapping declaration that starts with `--<prefix>-`.
///
/// After a match the scan resumes behind its `;`, after a miss one character
/// past the candidate start.
fn find_all<'a, T>(
    source: &'a str,
    prefix: &str,
    mut declaration: impl FnMut(&'a str) -> IResult<&'a str, T>,
) -> Vec<T> {
    let marker = format!("--{}-", prefix);
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = source[cursor..].find(&marker) {
        let start = cursor + offset;
        match declaration(&source[start + marker.len()..]) {
            Ok((rest, item)) => {
                found.push(item);
                cursor = source.len() - rest.len();
            }
            // The marker starts with an ASCII '-', so start + 1 is a char boundary
            Err(_) => cursor = start + 1,
        }
    }

    found
}

/// Finds `--<prefix>-<name>-<shade>: <value>;` declarations.
pub fn scan_shaded<'a>(source: &'a str, prefix: &str) -> Vec<TokenDeclaration<'a>> {
    find_all(source, prefix, |input: &'a str| {
        let (input, (name, shade)) = shaded_key(input)?;
        let (input, value) = declaration_value(input)?;
        Ok((
            input,
            TokenDeclaration {
                name: Some(name),
                shade,
                value,
            },
        ))
    })
}

/// Finds `--<prefix>-<name>: <value>;` declarations.
///
/// The name must consist of letters only, so shaded declarations (and
/// names ending in any other numeral) are never reported here.
pub fn scan_unshaded<'a>(source: &'a str, prefix: &str) -> Vec<TokenDeclaration<'a>> {
    find_all(source, prefix, |input: &'a str| {
        let (input, name) = unshaded_key(input)?;
        let (input, value) = declaration_value(input)?;
        Ok((
            input,
            TokenDeclaration {
                name: Some(name),
                shade: BASE_SHADE,
                value,
            },
        ))
    })
}

/// Finds `--<prefix>-<shade>: <value>;` declarations.
pub fn scan_flat<'a>(source: &'a str, prefix: &str) -> Vec<TokenDeclaration<'a>> {
    find_all(source, prefix, |input: &'a str| {
        let (input, shade) = flat_key(input)?;
        let (input, value) = declaration_value(input)?;
        Ok((
            input,
            TokenDeclaration {
                name: None,
                shade,
                value,
            },
        ))
    })
}

/// Collects grouped tokens: shaded declarations first, then base ones.
pub fn extract_color_groups(source: &str, prefix: &str) -> ColorGroups {
    let mut groups = ColorGroups::new();

    let shaded = scan_shaded(source, prefix);
    log::debug!("Found {} shaded --{}-* declarations", shaded.len(), prefix);
    let unshaded = scan_unshaded(source, prefix);
    log::debug!("Found {} base --{}-* declarations", unshaded.len(), prefix);

    for decl in shaded.iter().chain(unshaded.iter()) {
        // Both scanners always set a name
        if let Some(name) = decl.name {
            log::trace!("{}[{}] = {}", name, decl.shade, decl.value);
            groups.define(name, decl.shade, decl.value);
        }
    }

    groups
}

/// Collects the shades of a flat family.
pub fn extract_flat_family(source: &str, prefix: &str) -> ShadeValues {
    let mut shades = ShadeValues::new();
    let found = scan_flat(source, prefix);
    log::debug!("Found {} --{}-* declarations", found.len(), prefix);

    for decl in found {
        log::trace!("--{}-{} = {}", prefix, decl.shade, decl.value);
        shades.insert(decl.shade.to_string(), decl.value.to_string());
    }

    shades
}
