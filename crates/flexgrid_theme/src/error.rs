use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("spacing unit must be a positive finite number, got {0}")]
    InvalidSpacingUnit(f64),
}
