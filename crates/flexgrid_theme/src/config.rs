//! Theme configuration
//!
//! A theme file is TOML. Every key is optional and merges over the built-in
//! defaults:
//!
//! ```toml
//! spacing_unit = 8
//!
//! [breakpoints]
//! sm = "640px"
//! xxl = "1920px"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::breakpoints::BreakpointTable;
use crate::error::ThemeError;
use crate::spacing::SpacingScale;

/// Resolved grid theme
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridTheme {
    pub spacing: SpacingScale,
    pub breakpoints: BreakpointTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    spacing_unit: Option<f64>,
    breakpoints: Option<BreakpointTable>,
}

impl GridTheme {
    /// Parse a theme from TOML text, merging it over the defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(content)?;

        let spacing = match file.spacing_unit {
            Some(unit) => SpacingScale::try_new(unit)?,
            None => SpacingScale::DEFAULT,
        };

        Ok(Self {
            spacing,
            breakpoints: BreakpointTable::default().merged(file.breakpoints.as_ref()),
        })
    }

    /// Load a theme file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            spacing_unit = theme.spacing.unit,
            breakpoints = theme.breakpoints.len(),
            "loaded grid theme"
        );
        Ok(theme)
    }

    /// Builder-style spacing unit override
    pub fn with_spacing_unit(mut self, unit: f64) -> Result<Self, ThemeError> {
        self.spacing = SpacingScale::try_new(unit)?;
        Ok(self)
    }

    /// Builder-style breakpoint overrides, merged over the current table
    pub fn with_breakpoints(mut self, overrides: &BreakpointTable) -> Self {
        self.breakpoints = self.breakpoints.merged(Some(overrides));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::Breakpoint;

    #[test]
    fn empty_file_is_default_theme() {
        assert_eq!(GridTheme::from_toml_str("").unwrap(), GridTheme::default());
    }

    #[test]
    fn rejects_non_positive_spacing_unit() {
        let err = GridTheme::from_toml_str("spacing_unit = 0").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidSpacingUnit(u) if u == 0.0));
    }

    #[test]
    fn builder_rejects_invalid_spacing_unit() {
        for unit in [0.0, f64::NAN] {
            let err = GridTheme::default().with_spacing_unit(unit).unwrap_err();
            assert!(matches!(err, ThemeError::InvalidSpacingUnit(_)));
        }
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = GridTheme::from_toml_str("columns = 16").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn builder_overrides_merge() {
        let theme = GridTheme::default()
            .with_spacing_unit(4.0)
            .unwrap()
            .with_breakpoints(&BreakpointTable::new().with("lg", "1280px"));

        assert_eq!(theme.spacing.unit, 4.0);
        assert_eq!(theme.breakpoints.width_of(Breakpoint::Lg), Some("1280px"));
        assert_eq!(theme.breakpoints.width_of(Breakpoint::Sm), Some("600px"));
    }
}
