//! Breakpoint tokens
//!
//! A breakpoint table maps a breakpoint name to the minimum viewport width
//! (a CSS length string) at which it applies. The four column breakpoints
//! (`xs`, `sm`, `md`, `lg`) drive grid column spans; `xl` and any caller
//! supplied names are carried in the table but have no column span.

use flexgrid_core::join_objects;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Built-in breakpoint names
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Breakpoints that accept a column span, smallest first
    pub const COLUMNS: [Breakpoint; 4] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
    ];

    /// Every built-in breakpoint, smallest first
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Key used for this breakpoint in a [`BreakpointTable`]
    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Built-in minimum width
    pub const fn default_width(self) -> &'static str {
        match self {
            Breakpoint::Xs => "0px",
            Breakpoint::Sm => "600px",
            Breakpoint::Md => "900px",
            Breakpoint::Lg => "1200px",
            Breakpoint::Xl => "1536px",
        }
    }
}

/// Ordered mapping from breakpoint name to minimum width
///
/// `BreakpointTable::default()` is the built-in table. A partial table built
/// with [`BreakpointTable::new`] is meant to be merged over another table
/// with [`BreakpointTable::merged`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointTable {
    widths: IndexMap<String, String>,
}

impl BreakpointTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            widths: IndexMap::new(),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, width: impl Into<String>) -> Self {
        self.insert(name, width);
        self
    }

    /// Set the minimum width for `name`, returning the previous width
    pub fn insert(&mut self, name: impl Into<String>, width: impl Into<String>) -> Option<String> {
        self.widths.insert(name.into(), width.into())
    }

    /// Minimum width for `name`
    pub fn width(&self, name: &str) -> Option<&str> {
        self.widths.get(name).map(String::as_str)
    }

    /// Minimum width for a built-in breakpoint
    pub fn width_of(&self, breakpoint: Breakpoint) -> Option<&str> {
        self.width(breakpoint.name())
    }

    /// Merge `overrides` over this table, key by key
    ///
    /// Overridden keys keep their position; new keys are appended.
    pub fn merged(&self, overrides: Option<&BreakpointTable>) -> BreakpointTable {
        BreakpointTable {
            widths: join_objects(&self.widths, overrides.map(|o| &o.widths)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.widths.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Breakpoint::ALL
            .iter()
            .fold(BreakpointTable::new(), |table, bp| {
                table.with(bp.name(), bp.default_width())
            })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BreakpointTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = BreakpointTable::new();
        for (name, width) in iter {
            table.insert(name, width);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_table_matches_builtin_widths() {
        let table = BreakpointTable::default();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("xs", "0px"),
                ("sm", "600px"),
                ("md", "900px"),
                ("lg", "1200px"),
                ("xl", "1536px"),
            ]
        );
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let overrides = BreakpointTable::new().with("md", "1000px");
        let merged = BreakpointTable::default().merged(Some(&overrides));

        assert_eq!(merged.width_of(Breakpoint::Md), Some("1000px"));
        for bp in [Breakpoint::Xs, Breakpoint::Sm, Breakpoint::Lg, Breakpoint::Xl] {
            assert_eq!(merged.width_of(bp), Some(bp.default_width()));
        }
    }

    #[test]
    fn overrides_can_add_names() {
        let overrides: BreakpointTable = [("xxl", "1920px")].into_iter().collect();
        let merged = BreakpointTable::default().merged(Some(&overrides));

        assert_eq!(merged.len(), 6);
        assert_eq!(merged.width("xxl"), Some("1920px"));
    }

    #[test]
    fn merging_nothing_is_identity() {
        let table = BreakpointTable::default();
        assert_eq!(table.merged(None), table);
    }
}
