//! Breakpoint resolver
//!
//! Turns per-breakpoint column spans into mobile-first media queries. Each
//! span `s` becomes a width of `(s / 12) * 100` percent applied from the
//! breakpoint's minimum width upwards; queries are emitted smallest first so
//! larger breakpoints win by source order.

use std::fmt::Write;

use flexgrid_core::format_number;
use flexgrid_theme::{Breakpoint, BreakpointTable};

use crate::props::ColumnSpans;

/// Number of columns a span is a fraction of
pub const GRID_COLUMNS: f64 = 12.0;

/// Percentage width for a column span
pub fn span_percent(span: f64) -> f64 {
    (span / GRID_COLUMNS) * 100.0
}

/// Resolve spans against the built-in table merged with `overrides`
pub fn resolve_breakpoints(spans: &ColumnSpans, overrides: Option<&BreakpointTable>) -> String {
    resolve_breakpoints_in(spans, &BreakpointTable::default().merged(overrides))
}

/// Resolve spans against an already merged table
///
/// Breakpoints without a span, or without a (non-empty) width in `table`,
/// emit nothing.
pub fn resolve_breakpoints_in(spans: &ColumnSpans, table: &BreakpointTable) -> String {
    let mut out = String::new();

    for breakpoint in Breakpoint::COLUMNS {
        let Some(span) = spans.get(breakpoint) else {
            continue;
        };
        let Some(min_width) = table.width_of(breakpoint).filter(|w| !w.is_empty()) else {
            continue;
        };

        if !(0.0..=GRID_COLUMNS).contains(&span) {
            tracing::debug!(
                breakpoint = breakpoint.name(),
                span,
                "column span outside 0..=12"
            );
        }

        let percent = format_number(span_percent(span));
        let _ = writeln!(
            out,
            "@media (min-width: {min_width}) {{ & {{ flex-basis: calc({percent}%); max-width: calc({percent}%); }} }}"
        );
    }

    out
}
