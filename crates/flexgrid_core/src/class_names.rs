//! Conditional class-name joining

/// Join the present class names with single spaces
///
/// `None` entries and blank strings are skipped, so callers can pass
/// `flag.then_some("name")` for conditional classes. Order is preserved.
pub fn class_names<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for name in items.into_iter().flatten() {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::class_names;

    #[test]
    fn skips_missing_and_blank_entries() {
        assert_eq!(
            class_names([None, Some("a"), Some(""), Some("  "), Some("b")]),
            "a b"
        );
    }

    #[test]
    fn conditional_classes() {
        let item = true;
        let container = false;
        let joined = class_names([
            Some("user"),
            item.then_some("_grid-item"),
            container.then_some("_grid-container"),
            Some("_grid-root"),
        ]);
        assert_eq!(joined, "user _grid-item _grid-root");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(class_names(std::iter::empty::<Option<&str>>()), "");
    }
}
