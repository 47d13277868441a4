//! Grid component
//!
//! [`Grid`] adapts [`GridProps`] into a [`RenderedElement`]:
//!
//! - the layout props are compiled into a rule body (memoized per instance)
//!   and attached to the selected tag through a [`StyleEngine`]
//! - the class list is the caller class followed by the item, container
//!   and root marker classes
//! - only non-layout props reach the rendered element
//! - a passed [`NodeRef`] is bound to the rendered element
//!
//! ```rust
//! use flexgrid::{Grid, GridProps, LayoutProps};
//! use flexgrid_core::StyleRegistry;
//!
//! let mut engine = StyleRegistry::new();
//! let mut grid = Grid::new();
//!
//! let element = grid.render(
//!     GridProps::new()
//!         .layout(LayoutProps::new().container(true).spacing(2))
//!         .attr("id", "cards"),
//!     &mut engine,
//! );
//!
//! assert_eq!(element.class_name, "_grid-item _grid-container _grid-root");
//! assert!(element.rule_body.contains("width: calc(100% + 16px);"));
//! ```

use std::sync::Arc;

use flexgrid_core::{class_names, ElementTag, StyleEngine};
use flexgrid_theme::GridTheme;
use serde_json::Value;

use crate::element::{is_valid_attr_name, AttrValue, Attributes, Child, NodeRef, RenderedElement};
use crate::memo::StyleMemo;
use crate::props::LayoutProps;

/// Marker class present on every Grid
pub const GRID_ROOT_CLASS: &str = "_grid-root";
/// Marker class present on grid items
pub const GRID_ITEM_CLASS: &str = "_grid-item";
/// Marker class present on grid containers
pub const GRID_CONTAINER_CLASS: &str = "_grid-container";

/// Props of a single Grid render
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridProps {
    /// Style-affecting props; never forwarded
    pub layout: LayoutProps,
    /// Tag to render as
    pub component: ElementTag,
    /// Caller class, placed before the marker classes
    pub class_name: Option<String>,
    /// Everything else, forwarded unchanged
    pub attrs: Attributes,
    pub children: Vec<Child>,
    pub node_ref: Option<NodeRef>,
}

impl GridProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: LayoutProps) -> Self {
        self.layout = layout;
        self
    }

    pub fn component(mut self, tag: impl Into<ElementTag>) -> Self {
        self.component = tag.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Split a camelCase JSON prop bag into layout props and forwarded props
    ///
    /// Layout keys (see [`LayoutProps::FIELD_NAMES`]) build the layout;
    /// `component`, `className` and `children` are picked out; every other
    /// key with a valid attribute name becomes a forwarded attribute. `null`
    /// values are treated as absent. A `component` that is not a valid tag
    /// name is an error.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(map) = value else {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "grid props must be a JSON object",
            ));
        };

        let mut props = GridProps::new();
        let mut layout = serde_json::Map::new();

        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            if LayoutProps::is_layout_key(&key) {
                layout.insert(key, value);
                continue;
            }
            match key.as_str() {
                "component" => {
                    let tag: ElementTag = serde_json::from_value(value)?;
                    if !tag.is_valid_name() {
                        return Err(<serde_json::Error as serde::de::Error>::custom(
                            format!("invalid component tag name {:?}", tag.as_str()),
                        ));
                    }
                    props.component = tag;
                }
                "className" => props.class_name = Some(serde_json::from_value(value)?),
                "children" => props.children = json_children(value),
                _ if !is_valid_attr_name(&key) => {
                    tracing::debug!(attr = %key, "dropping prop with invalid attribute name");
                }
                _ => {
                    if let Some(attr) = json_attr(value) {
                        props.attrs.insert(key, attr);
                    }
                }
            }
        }

        props.layout = serde_json::from_value(Value::Object(layout))?;
        Ok(props)
    }
}

fn json_attr(value: Value) -> Option<AttrValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(AttrValue::Bool(b)),
        Value::Number(n) => n.as_f64().map(AttrValue::Number),
        Value::String(s) => Some(AttrValue::Text(s)),
        other => Some(AttrValue::Text(other.to_string())),
    }
}

fn json_children(value: Value) -> Vec<Child> {
    match value {
        Value::Array(items) => items.into_iter().flat_map(json_children).collect(),
        Value::Null => Vec::new(),
        Value::String(s) => vec![Child::Text(s)],
        other => vec![Child::Text(other.to_string())],
    }
}

/// Class list for a Grid: caller class, item, container, root
pub fn grid_class_names(layout: &LayoutProps, class_name: Option<&str>) -> String {
    class_names([
        class_name,
        layout.is_item().then_some(GRID_ITEM_CLASS),
        layout.is_container().then_some(GRID_CONTAINER_CLASS),
        Some(GRID_ROOT_CLASS),
    ])
}

/// A Grid instance
///
/// Holds the theme and the memoized style across renders.
#[derive(Debug, Default)]
pub struct Grid {
    theme: GridTheme,
    memo: StyleMemo,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: GridTheme) -> Self {
        Self {
            theme,
            memo: StyleMemo::new(),
        }
    }

    /// Replace the theme; the next render rebuilds the style
    pub fn set_theme(&mut self, theme: GridTheme) {
        self.theme = theme;
        self.memo.invalidate();
    }

    /// Memoized rule body for `layout`
    pub fn style_for(&mut self, layout: &LayoutProps) -> Arc<str> {
        self.memo.get_or_build(layout, &self.theme)
    }

    /// Number of times this instance built its style
    pub fn recompute_count(&self) -> usize {
        self.memo.recompute_count()
    }

    /// Render `props`, mounting the style through `engine`
    pub fn render<E: StyleEngine + ?Sized>(&mut self, props: GridProps, engine: &mut E) -> RenderedElement {
        let GridProps {
            layout,
            component,
            class_name,
            attrs,
            children,
            node_ref,
        } = props;

        let rule_body = self.style_for(&layout);
        let style = engine.styled(&component, &rule_body);
        let class_name = grid_class_names(&layout, class_name.as_deref());

        tracing::trace!(
            tag = %component,
            class = %class_name,
            style_class = %style.class_name,
            "rendered grid"
        );

        let element = RenderedElement {
            tag: component,
            class_name,
            style,
            rule_body,
            attrs,
            children,
            node_ref,
        };

        if let Some(node_ref) = &element.node_ref {
            node_ref.bind(element.handle());
        }

        element
    }
}
