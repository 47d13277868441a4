//! flexgrid
//!
//! A responsive flexbox Grid. Declarative layout props are compiled into the
//! body of a nested CSS rule; box layout itself is left to the browser's
//! flexbox implementation.
//!
//! - [`build_style`]: layout props to rule body
//! - [`resolve_breakpoints`]: column spans to mobile-first media queries
//! - [`Grid`]: the component wrapper, with a memoized style, marker classes,
//!   prop forwarding and ref binding
//!
//! # Example
//!
//! ```rust
//! use flexgrid::{build_style, LayoutProps};
//!
//! let css = build_style(&LayoutProps::new().xs(12).sm(6));
//! assert!(css.contains(
//!     "@media (min-width: 600px) { & { flex-basis: calc(50%); max-width: calc(50%); } }"
//! ));
//! ```

pub mod breakpoints;
pub mod element;
pub mod grid;
pub mod memo;
pub mod props;
pub mod style;

pub use breakpoints::{resolve_breakpoints, resolve_breakpoints_in, span_percent, GRID_COLUMNS};
pub use element::{
    is_valid_attr_name, AttrValue, Attributes, Child, ElementHandle, NodeRef, RenderedElement,
};
pub use grid::{
    grid_class_names, Grid, GridProps, GRID_CONTAINER_CLASS, GRID_ITEM_CLASS, GRID_ROOT_CLASS,
};
pub use memo::StyleMemo;
pub use props::{ColumnSpans, LayoutProps};
pub use style::{build_style, build_style_with};

pub use flexgrid_core::{CssValue, ElementTag, StyleEngine, StyleObject, StyleRegistry, StyledRule};
pub use flexgrid_theme::{Breakpoint, BreakpointTable, GridTheme};
