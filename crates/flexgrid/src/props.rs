//! Layout props
//!
//! [`LayoutProps`] is every prop that affects the generated style. All fields
//! are optional; an absent field emits no declaration. Field order here is
//! the order declarations are emitted in.

use flexgrid_core::{CssValue, StyleObject};
use flexgrid_theme::{Breakpoint, BreakpointTable};
use serde::{Deserialize, Serialize};

/// Style-affecting props of a Grid
///
/// Deserializes from a camelCase prop bag (`{"flexGrow": 1, "xs": 12}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutProps {
    /// Flex container: `display: flex`, full width, wrapping
    pub container: Option<bool>,
    /// Grid item marker; treated as `true` when absent
    pub item: Option<bool>,

    // Column spans out of 12, per breakpoint
    pub xs: Option<f64>,
    pub sm: Option<f64>,
    pub md: Option<f64>,
    pub lg: Option<f64>,

    /// Open-ended declarations appended after all field declarations
    pub sx: Option<StyleObject>,

    /// Gutter between items of a container, on the spacing scale
    pub spacing: Option<CssValue>,
    pub gap: Option<CssValue>,

    pub display: Option<CssValue>,
    pub box_sizing: Option<CssValue>,
    pub place_items: Option<CssValue>,
    pub place_content: Option<CssValue>,
    pub flex_direction: Option<CssValue>,
    pub flex_basis: Option<CssValue>,
    pub flex_grow: Option<CssValue>,
    pub flex_wrap: Option<CssValue>,
    pub justify_content: Option<CssValue>,
    pub align_items: Option<CssValue>,
    pub align_content: Option<CssValue>,
    pub width: Option<CssValue>,
    pub height: Option<CssValue>,
    pub background: Option<CssValue>,
    pub background_color: Option<CssValue>,
    pub background_image: Option<CssValue>,
    pub max_width: Option<CssValue>,
    pub max_height: Option<CssValue>,
    pub min_width: Option<CssValue>,
    pub min_height: Option<CssValue>,
    pub color: Option<CssValue>,
    pub font_size: Option<CssValue>,
    pub font_weight: Option<CssValue>,
    pub line_height: Option<CssValue>,
    pub position: Option<CssValue>,
    pub z_index: Option<CssValue>,
    pub font_family: Option<CssValue>,
    pub margin: Option<CssValue>,
    pub padding: Option<CssValue>,
    pub padding_block: Option<CssValue>,
    pub padding_inline: Option<CssValue>,
    pub margin_block: Option<CssValue>,
    pub margin_inline: Option<CssValue>,

    /// Partial breakpoint table merged over the theme's table
    pub breakpoints: Option<BreakpointTable>,
}

/// Column spans per breakpoint
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColumnSpans {
    pub xs: Option<f64>,
    pub sm: Option<f64>,
    pub md: Option<f64>,
    pub lg: Option<f64>,
}

impl ColumnSpans {
    /// Span for a breakpoint; `xl` never carries a span
    pub fn get(&self, breakpoint: Breakpoint) -> Option<f64> {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => None,
        }
    }
}

macro_rules! value_setters {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<CssValue>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

impl LayoutProps {
    /// Prop-bag keys that belong to the layout, in declaration order
    pub const FIELD_NAMES: &'static [&'static str] = &[
        "container",
        "item",
        "xs",
        "sm",
        "md",
        "lg",
        "sx",
        "spacing",
        "gap",
        "display",
        "boxSizing",
        "placeItems",
        "placeContent",
        "flexDirection",
        "flexBasis",
        "flexGrow",
        "flexWrap",
        "justifyContent",
        "alignItems",
        "alignContent",
        "width",
        "height",
        "background",
        "backgroundColor",
        "backgroundImage",
        "maxWidth",
        "maxHeight",
        "minWidth",
        "minHeight",
        "color",
        "fontSize",
        "fontWeight",
        "lineHeight",
        "position",
        "zIndex",
        "fontFamily",
        "margin",
        "padding",
        "paddingBlock",
        "paddingInline",
        "marginBlock",
        "marginInline",
        "breakpoints",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` names a layout prop
    pub fn is_layout_key(key: &str) -> bool {
        Self::FIELD_NAMES.contains(&key)
    }

    /// Effective item flag
    pub fn is_item(&self) -> bool {
        self.item.unwrap_or(true)
    }

    pub fn is_container(&self) -> bool {
        self.container.unwrap_or(false)
    }

    pub fn column_spans(&self) -> ColumnSpans {
        ColumnSpans {
            xs: self.xs,
            sm: self.sm,
            md: self.md,
            lg: self.lg,
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    pub fn container(mut self, container: bool) -> Self {
        self.container = Some(container);
        self
    }

    pub fn item(mut self, item: bool) -> Self {
        self.item = Some(item);
        self
    }

    pub fn xs(mut self, span: impl Into<f64>) -> Self {
        self.xs = Some(span.into());
        self
    }

    pub fn sm(mut self, span: impl Into<f64>) -> Self {
        self.sm = Some(span.into());
        self
    }

    pub fn md(mut self, span: impl Into<f64>) -> Self {
        self.md = Some(span.into());
        self
    }

    pub fn lg(mut self, span: impl Into<f64>) -> Self {
        self.lg = Some(span.into());
        self
    }

    /// Replace the open-ended style object
    pub fn sx(mut self, style: StyleObject) -> Self {
        self.sx = Some(style);
        self
    }

    /// Add one declaration to the open-ended style object
    pub fn sx_property(mut self, name: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.sx
            .get_or_insert_with(StyleObject::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replace the breakpoint overrides
    pub fn breakpoints(mut self, table: BreakpointTable) -> Self {
        self.breakpoints = Some(table);
        self
    }

    /// Override a single breakpoint width
    pub fn breakpoint(mut self, name: impl Into<String>, width: impl Into<String>) -> Self {
        self.breakpoints
            .get_or_insert_with(BreakpointTable::new)
            .insert(name, width);
        self
    }

    value_setters!(
        spacing,
        gap,
        display,
        box_sizing,
        place_items,
        place_content,
        flex_direction,
        flex_basis,
        flex_grow,
        flex_wrap,
        justify_content,
        align_items,
        align_content,
        width,
        height,
        background,
        background_color,
        background_image,
        max_width,
        max_height,
        min_width,
        min_height,
        color,
        font_size,
        font_weight,
        line_height,
        position,
        z_index,
        font_family,
        margin,
        padding,
        padding_block,
        padding_inline,
        margin_block,
        margin_inline,
    );
}
