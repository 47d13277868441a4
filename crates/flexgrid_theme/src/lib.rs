//! flexgrid theme
//!
//! The grid's entire theme is two tokens:
//!
//! - [`BreakpointTable`]: breakpoint name to minimum viewport width
//! - [`SpacingScale`]: the multiplier applied to numeric spacing values
//!
//! Both have built-in defaults and can be overridden from a TOML file through
//! [`GridTheme`].
//!
//! ```rust
//! use flexgrid_theme::{Breakpoint, GridTheme};
//!
//! let theme = GridTheme::from_toml_str(r#"
//!     spacing_unit = 4
//!
//!     [breakpoints]
//!     sm = "640px"
//! "#).unwrap();
//!
//! assert_eq!(theme.spacing.unit, 4.0);
//! assert_eq!(theme.breakpoints.width(Breakpoint::Sm.name()), Some("640px"));
//! assert_eq!(theme.breakpoints.width(Breakpoint::Md.name()), Some("900px"));
//! ```

pub mod breakpoints;
pub mod config;
pub mod error;
pub mod spacing;

pub use breakpoints::{Breakpoint, BreakpointTable};
pub use config::GridTheme;
pub use error::ThemeError;
pub use spacing::SpacingScale;
