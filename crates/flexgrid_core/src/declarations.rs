//! Style object serialization
//!
//! A [`StyleObject`] is an open-ended, insertion-ordered map of property name
//! to value. Names may be written camelCase (`backgroundColor`) or kebab-case
//! (`background-color`); serialization always emits kebab-case. Numbers on
//! length-like properties get a `px` suffix, numbers on unitless properties
//! (`opacity`, `z-index`, ...) are printed bare.

use indexmap::IndexMap;

use crate::value::CssValue;

/// Open-ended map of CSS property to value
pub type StyleObject = IndexMap<String, CssValue>;

/// Properties whose numeric values carry no unit
const UNITLESS_PROPERTIES: &[&str] = &[
    "animation-iteration-count",
    "aspect-ratio",
    "column-count",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-shrink",
    "font-weight",
    "grid-column",
    "grid-row",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "stroke-opacity",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
];

/// Convert a camelCase property name to kebab-case
///
/// Vendor prefixes written as `WebkitTransition` or `msTransform` become
/// `-webkit-transition` and `-ms-transform`. Names that already contain a
/// dash, including custom properties (`--gutter`), are returned unchanged.
pub fn kebab_case(name: &str) -> String {
    if name.contains('-') {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn is_unitless(property: &str) -> bool {
    property.starts_with("--") || UNITLESS_PROPERTIES.contains(&property)
}

/// Serialize a style object into declaration text
///
/// Declarations are emitted in insertion order as `name: value;`, separated
/// by single spaces. An empty object serializes to the empty string.
pub fn css_properties_to_string(style: &StyleObject) -> String {
    let mut out = String::new();
    for (name, value) in style {
        let property = kebab_case(name);
        let value = if is_unitless(&property) {
            value.to_css()
        } else {
            value.to_px()
        };
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&property);
        out.push_str(": ");
        out.push_str(&value);
        out.push(';');
    }
    out
}
