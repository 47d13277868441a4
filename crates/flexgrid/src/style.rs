//! Style builder
//!
//! Compiles [`LayoutProps`] into the body of a nested CSS rule. The body is
//! handed to a styling engine as-is; it is never parsed here.
//!
//! Emission order:
//!
//! 1. container block (`container`)
//! 2. gutter block (`container` and `spacing`)
//! 3. baseline declarations, then one declaration per defined field
//! 4. the `sx` style object
//! 5. breakpoint media queries

use std::fmt::Write;

use flexgrid_core::{css_properties_to_string, CssValue};
use flexgrid_theme::{GridTheme, SpacingScale};

use crate::breakpoints::resolve_breakpoints_in;
use crate::grid::GRID_ITEM_CLASS;
use crate::props::LayoutProps;

/// How a numeric value is converted for a property
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit {
    /// Multiple of the spacing unit, in px
    Spacing,
    /// Plain px length
    Length,
    /// Bare number
    Unitless,
    /// Keyword property; numbers are printed bare
    Keyword,
}

/// Build the rule body with the built-in theme
pub fn build_style(props: &LayoutProps) -> String {
    build_style_with(props, &GridTheme::default())
}

/// Build the rule body with `theme`'s spacing unit and breakpoint table
pub fn build_style_with(props: &LayoutProps, theme: &GridTheme) -> String {
    let spacing = theme.spacing;
    let mut css = String::new();

    if props.is_container() {
        css.push_str("display: flex;\nwidth: 100%;\nflex-wrap: wrap;\n");

        if let Some(value) = &props.spacing {
            let gutter = spacing.px(value);
            let _ = write!(
                css,
                "width: calc(100% + {gutter});\n\
                 margin-top: -{gutter};\n\
                 margin-left: -{gutter};\n\
                 & > .{GRID_ITEM_CLASS} {{ padding-top: {gutter}; padding-left: {gutter}; }}\n"
            );
        }
    }

    css.push_str("box-sizing: border-box;\nmargin: 0;\nflex-grow: 0;\n");

    for (property, value, unit) in declarations(props) {
        let Some(value) = value else {
            continue;
        };
        let _ = writeln!(css, "{property}: {};", convert(value, unit, spacing));
    }

    if let Some(sx) = &props.sx {
        let text = css_properties_to_string(sx);
        if !text.is_empty() {
            css.push_str(&text);
            css.push('\n');
        }
    }

    let table = theme.breakpoints.merged(props.breakpoints.as_ref());
    css.push_str(&resolve_breakpoints_in(&props.column_spans(), &table));

    css
}

fn convert(value: &CssValue, unit: Unit, spacing: SpacingScale) -> String {
    match unit {
        Unit::Spacing => spacing.px(value),
        Unit::Length => value.to_px(),
        Unit::Unitless | Unit::Keyword => value.to_css(),
    }
}

fn declarations(props: &LayoutProps) -> [(&'static str, Option<&CssValue>, Unit); 34] {
    use Unit::*;

    [
        ("gap", props.gap.as_ref(), Spacing),
        ("display", props.display.as_ref(), Keyword),
        ("box-sizing", props.box_sizing.as_ref(), Keyword),
        ("place-items", props.place_items.as_ref(), Keyword),
        ("place-content", props.place_content.as_ref(), Keyword),
        ("flex-direction", props.flex_direction.as_ref(), Keyword),
        ("flex-basis", props.flex_basis.as_ref(), Length),
        ("flex-grow", props.flex_grow.as_ref(), Unitless),
        ("flex-wrap", props.flex_wrap.as_ref(), Keyword),
        ("justify-content", props.justify_content.as_ref(), Keyword),
        ("align-items", props.align_items.as_ref(), Keyword),
        ("align-content", props.align_content.as_ref(), Keyword),
        ("width", props.width.as_ref(), Length),
        ("height", props.height.as_ref(), Length),
        ("background", props.background.as_ref(), Keyword),
        ("background-color", props.background_color.as_ref(), Keyword),
        ("background-image", props.background_image.as_ref(), Keyword),
        ("max-width", props.max_width.as_ref(), Length),
        ("max-height", props.max_height.as_ref(), Length),
        ("min-width", props.min_width.as_ref(), Length),
        ("min-height", props.min_height.as_ref(), Length),
        ("color", props.color.as_ref(), Keyword),
        ("font-size", props.font_size.as_ref(), Length),
        ("font-weight", props.font_weight.as_ref(), Unitless),
        ("line-height", props.line_height.as_ref(), Unitless),
        ("position", props.position.as_ref(), Keyword),
        ("z-index", props.z_index.as_ref(), Unitless),
        ("font-family", props.font_family.as_ref(), Keyword),
        ("margin", props.margin.as_ref(), Spacing),
        ("padding", props.padding.as_ref(), Spacing),
        ("padding-block", props.padding_block.as_ref(), Spacing),
        ("padding-inline", props.padding_inline.as_ref(), Spacing),
        ("margin-block", props.margin_block.as_ref(), Spacing),
        ("margin-inline", props.margin_inline.as_ref(), Spacing),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASELINE: &str = "box-sizing: border-box;\nmargin: 0;\nflex-grow: 0;\n";

    #[test]
    fn empty_props_emit_only_baseline() {
        assert_eq!(build_style(&LayoutProps::new()), BASELINE);
    }

    #[test]
    fn container_block_comes_first() {
        let css = build_style(&LayoutProps::new().container(true));
        assert_eq!(
            css,
            format!("display: flex;\nwidth: 100%;\nflex-wrap: wrap;\n{BASELINE}")
        );
    }

    #[test]
    fn container_spacing_emits_gutter() {
        let css = build_style(&LayoutProps::new().container(true).spacing(3));
        assert!(css.contains("width: calc(100% + 24px);\n"));
        assert!(css.contains("margin-top: -24px;\n"));
        assert!(css.contains("margin-left: -24px;\n"));
        assert!(css.contains("& > ._grid-item { padding-top: 24px; padding-left: 24px; }\n"));
        assert!(css.find("flex-wrap: wrap;").unwrap() < css.find("calc(100% + 24px)").unwrap());
        assert!(css.find("calc(100% + 24px)").unwrap() < css.find("box-sizing").unwrap());
    }

    #[test]
    fn spacing_without_container_has_no_gutter() {
        let css = build_style(&LayoutProps::new().spacing(3));
        assert_eq!(css, BASELINE);
    }

    #[test]
    fn spacing_scale_fields_multiply_by_eight() {
        let props = LayoutProps::new()
            .gap(1)
            .margin(2)
            .padding(0.5)
            .padding_block(3)
            .padding_inline(4)
            .margin_block(5)
            .margin_inline(6);
        let css = build_style(&props);

        for decl in [
            "gap: 8px;",
            "margin: 16px;",
            "padding: 4px;",
            "padding-block: 24px;",
            "padding-inline: 32px;",
            "margin-block: 40px;",
            "margin-inline: 48px;",
        ] {
            assert!(css.contains(decl), "missing {decl} in {css}");
        }
    }

    #[test]
    fn length_fields_append_px_without_multiplier() {
        let props = LayoutProps::new()
            .width(100)
            .height(50)
            .max_width(640)
            .min_height(10)
            .flex_basis(120)
            .font_size(14);
        let css = build_style(&props);

        for decl in [
            "width: 100px;",
            "height: 50px;",
            "max-width: 640px;",
            "min-height: 10px;",
            "flex-basis: 120px;",
            "font-size: 14px;",
        ] {
            assert!(css.contains(decl), "missing {decl} in {css}");
        }
    }

    #[test]
    fn unitless_and_text_values_pass_through() {
        let props = LayoutProps::new()
            .flex_grow(1)
            .z_index(10)
            .font_weight(600)
            .line_height(1.5)
            .width("50%")
            .margin("0 auto")
            .justify_content("space-between");
        let css = build_style(&props);

        for decl in [
            "flex-grow: 1;",
            "z-index: 10;",
            "font-weight: 600;",
            "line-height: 1.5;",
            "width: 50%;",
            "margin: 0 auto;",
            "justify-content: space-between;",
        ] {
            assert!(css.contains(decl), "missing {decl} in {css}");
        }
    }

    #[test]
    fn zero_values_are_emitted() {
        let props = LayoutProps::new()
            .container(true)
            .spacing(0)
            .margin(0)
            .z_index(0)
            .xs(0);
        let css = build_style(&props);

        for decl in [
            "width: calc(100% + 0px);\n",
            "margin-top: -0px;\n",
            "margin: 0px;\n",
            "z-index: 0;\n",
            "@media (min-width: 0px) { & { flex-basis: calc(0%); max-width: calc(0%); } }\n",
        ] {
            assert!(css.contains(decl), "missing {decl:?} in {css}");
        }
    }

    #[test]
    fn place_content_uses_its_own_value() {
        let props = LayoutProps::new()
            .box_sizing("content-box")
            .place_content("center");
        let css = build_style(&props);
        assert!(css.contains("place-content: center;"));
        assert!(css.contains("box-sizing: content-box;"));
    }

    #[test]
    fn omitted_fields_emit_no_declaration() {
        let css = build_style(&LayoutProps::new().color("red"));
        assert_eq!(css, format!("{BASELINE}color: red;\n"));
        assert!(!css.contains("undefined"));
        assert!(!css.contains(": ;"));
    }

    #[test]
    fn fields_follow_fixed_order() {
        let props = LayoutProps::new()
            .margin_inline(1)
            .color("red")
            .gap(1)
            .width(10);
        let css = build_style(&props);
        let gap = css.find("gap:").unwrap();
        let width = css.find("width: 10px").unwrap();
        let color = css.find("color: red").unwrap();
        let margin_inline = css.find("margin-inline:").unwrap();
        assert!(gap < width && width < color && color < margin_inline);
    }

    #[test]
    fn sx_follows_fields_and_precedes_media_queries() {
        let props = LayoutProps::new()
            .xs(12)
            .color("red")
            .sx_property("color", "blue")
            .sx_property("borderRadius", 4);
        let css = build_style(&props);

        let field = css.find("color: red;").unwrap();
        let sx = css.find("color: blue; border-radius: 4px;").unwrap();
        let media = css.find("@media").unwrap();
        assert!(field < sx && sx < media);
    }

    #[test]
    fn breakpoints_use_prop_overrides() {
        let props = LayoutProps::new().sm(6).breakpoint("sm", "640px");
        let css = build_style(&props);
        assert!(css.ends_with(
            "@media (min-width: 640px) { & { flex-basis: calc(50%); max-width: calc(50%); } }\n"
        ));
    }

    #[test]
    fn theme_spacing_unit_scales_spacing_fields() {
        let theme = GridTheme::default().with_spacing_unit(4.0).unwrap();
        let css = build_style_with(&LayoutProps::new().container(true).spacing(2).padding(3), &theme);
        assert!(css.contains("width: calc(100% + 8px);"));
        assert!(css.contains("padding: 12px;"));
    }

    #[test]
    fn identical_props_build_identical_styles() {
        let make = || {
            LayoutProps::new()
                .container(true)
                .spacing(2)
                .xs(12)
                .md(4)
                .sx_property("opacity", 0.5)
        };
        assert_eq!(build_style(&make()), build_style(&make()));
    }
}
