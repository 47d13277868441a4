//! flexgrid core helpers
//!
//! Small, framework-agnostic building blocks shared by the grid crates:
//!
//! - **CSS values**: [`CssValue`] and the number formatting used in every
//!   generated declaration
//! - **Class names**: conditional joining of class lists
//! - **Merging**: shallow, override-wins merging of ordered maps
//! - **Style objects**: serialization of open-ended property maps into
//!   declaration text
//! - **Styling engine**: the [`StyleEngine`] seam that attaches a generated
//!   rule body to an element tag, plus an in-memory [`StyleRegistry`]
//!
//! # Example
//!
//! ```rust
//! use flexgrid_core::{class_names, css_properties_to_string, CssValue, StyleObject};
//!
//! let classes = class_names([Some("card"), None, Some("_grid-root")]);
//! assert_eq!(classes, "card _grid-root");
//!
//! let mut sx = StyleObject::new();
//! sx.insert("backgroundColor".into(), CssValue::from("red"));
//! sx.insert("borderWidth".into(), CssValue::from(2));
//! assert_eq!(
//!     css_properties_to_string(&sx),
//!     "background-color: red; border-width: 2px;"
//! );
//! ```

pub mod class_names;
pub mod declarations;
pub mod element;
pub mod engine;
pub mod merge;
pub mod value;

pub use class_names::class_names;
pub use declarations::{css_properties_to_string, kebab_case, StyleObject};
pub use element::ElementTag;
pub use engine::{StyleEngine, StyleRegistry, StyledRule};
pub use merge::join_objects;
pub use value::{format_number, CssValue};
