//! Spacing tokens

use flexgrid_core::CssValue;

use crate::error::ThemeError;

/// Multiplier for numeric spacing values
///
/// Margins, paddings, gaps and grid spacing given as bare numbers are
/// multiples of `unit` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingScale {
    pub unit: f64,
}

impl SpacingScale {
    /// 8px spacing scale
    pub const DEFAULT: Self = Self { unit: 8.0 };

    /// Create a scale; `unit` must be finite and greater than zero
    pub fn try_new(unit: f64) -> Result<Self, ThemeError> {
        if !unit.is_finite() || unit <= 0.0 {
            return Err(ThemeError::InvalidSpacingUnit(unit));
        }
        Ok(Self { unit })
    }

    /// Convert a spacing value to CSS (`2` -> `16px`, `"1rem"` -> `1rem`)
    pub fn px(&self, value: &CssValue) -> String {
        value.to_scaled_px(self.unit)
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}
