//! Style memoization
//!
//! A Grid instance keeps the style it generated for the last set of layout
//! props. The style is rebuilt if and only if the props differ by value from
//! the ones it was built from.

use std::sync::Arc;

use flexgrid_core::{CssValue, StyleObject};
use flexgrid_theme::{BreakpointTable, GridTheme};

use crate::props::LayoutProps;
use crate::style::build_style_with;

#[derive(Debug)]
pub struct StyleMemo {
    inputs: Option<LayoutProps>,
    style: Arc<str>,
    recomputes: usize,
}

impl StyleMemo {
    pub fn new() -> Self {
        Self {
            inputs: None,
            style: Arc::from(""),
            recomputes: 0,
        }
    }

    /// Style for `props`, rebuilt only when `props` changed
    pub fn get_or_build(&mut self, props: &LayoutProps, theme: &GridTheme) -> Arc<str> {
        if self
            .inputs
            .as_ref()
            .is_some_and(|inputs| same_layout(inputs, props))
        {
            tracing::trace!("layout props unchanged, reusing style");
            return Arc::clone(&self.style);
        }

        self.style = Arc::from(build_style_with(props, theme));
        self.inputs = Some(props.clone());
        self.recomputes += 1;
        tracing::debug!(
            recomputes = self.recomputes,
            len = self.style.len(),
            "rebuilt grid style"
        );
        Arc::clone(&self.style)
    }

    /// Forget the cached style; the next lookup rebuilds
    pub fn invalidate(&mut self) {
        self.inputs = None;
    }

    /// Number of times the style has been built
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }
}

/// Value equality for memo keys
///
/// Numbers compare by bit pattern so that a NaN input still hits the cache,
/// and `sx` insertion order is significant.
trait SameValue {
    fn same_value(&self, other: &Self) -> bool;
}

impl SameValue for bool {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

impl SameValue for f64 {
    fn same_value(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl SameValue for CssValue {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (CssValue::Number(a), CssValue::Number(b)) => a.same_value(b),
            (CssValue::Text(a), CssValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl SameValue for StyleObject {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((ka, va), (kb, vb))| ka == kb && va.same_value(vb))
    }
}

impl SameValue for BreakpointTable {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_value(b),
            (None, None) => true,
            _ => false,
        }
    }
}

fn same_layout(a: &LayoutProps, b: &LayoutProps) -> bool {
    let LayoutProps {
        container,
        item,
        xs,
        sm,
        md,
        lg,
        sx,
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
        breakpoints,
    } = a;

    container.same_value(&b.container)
        && item.same_value(&b.item)
        && xs.same_value(&b.xs)
        && sm.same_value(&b.sm)
        && md.same_value(&b.md)
        && lg.same_value(&b.lg)
        && sx.same_value(&b.sx)
        && spacing.same_value(&b.spacing)
        && gap.same_value(&b.gap)
        && display.same_value(&b.display)
        && box_sizing.same_value(&b.box_sizing)
        && place_items.same_value(&b.place_items)
        && place_content.same_value(&b.place_content)
        && flex_direction.same_value(&b.flex_direction)
        && flex_basis.same_value(&b.flex_basis)
        && flex_grow.same_value(&b.flex_grow)
        && flex_wrap.same_value(&b.flex_wrap)
        && justify_content.same_value(&b.justify_content)
        && align_items.same_value(&b.align_items)
        && align_content.same_value(&b.align_content)
        && width.same_value(&b.width)
        && height.same_value(&b.height)
        && background.same_value(&b.background)
        && background_color.same_value(&b.background_color)
        && background_image.same_value(&b.background_image)
        && max_width.same_value(&b.max_width)
        && max_height.same_value(&b.max_height)
        && min_width.same_value(&b.min_width)
        && min_height.same_value(&b.min_height)
        && color.same_value(&b.color)
        && font_size.same_value(&b.font_size)
        && font_weight.same_value(&b.font_weight)
        && line_height.same_value(&b.line_height)
        && position.same_value(&b.position)
        && z_index.same_value(&b.z_index)
        && font_family.same_value(&b.font_family)
        && margin.same_value(&b.margin)
        && padding.same_value(&b.padding)
        && padding_block.same_value(&b.padding_block)
        && padding_inline.same_value(&b.padding_inline)
        && margin_block.same_value(&b.margin_block)
        && margin_inline.same_value(&b.margin_inline)
        && breakpoints.same_value(&b.breakpoints)
}

impl Default for StyleMemo {
    fn default() -> Self {
        Self::new()
    }
}
