//! CSS values
//!
//! A property value is either a bare number or a raw string. How a number is
//! turned into CSS depends on the property it is used for: spacing properties
//! multiply by the spacing unit, length properties append `px`, and unitless
//! properties print the number as-is. Strings are always emitted verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single CSS property value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    /// Bare number, converted according to the property it is used for
    Number(f64),
    /// Raw CSS text (`"2rem"`, `"space-between"`, `"calc(100% - 8px)"`)
    Text(String),
}

impl CssValue {
    /// Emit the value verbatim
    pub fn to_css(&self) -> String {
        match self {
            CssValue::Number(n) => format_number(*n),
            CssValue::Text(s) => s.clone(),
        }
    }

    /// Emit numbers as pixel lengths (`100` -> `100px`), text verbatim
    pub fn to_px(&self) -> String {
        match self {
            CssValue::Number(n) => format!("{}px", format_number(*n)),
            CssValue::Text(s) => s.clone(),
        }
    }

    /// Emit numbers as multiples of `unit` pixels (`2` with unit 8 -> `16px`),
    /// text verbatim
    pub fn to_scaled_px(&self, unit: f64) -> String {
        match self {
            CssValue::Number(n) => format!("{}px", format_number(*n * unit)),
            CssValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => f.write_str(&format_number(*n)),
            CssValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        CssValue::Number(value)
    }
}

impl From<f32> for CssValue {
    fn from(value: f32) -> Self {
        CssValue::Number(value as f64)
    }
}

impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        CssValue::Number(value as f64)
    }
}

impl From<u32> for CssValue {
    fn from(value: u32) -> Self {
        CssValue::Number(value as f64)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Text(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Text(value)
    }
}

/// Format a number the way it appears in generated CSS
///
/// Uses the shortest representation that round-trips, so integral values
/// print without a fractional part (`50`, not `50.0`) and repeating
/// fractions keep full precision (`33.33333333333333`). Negative zero
/// prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
