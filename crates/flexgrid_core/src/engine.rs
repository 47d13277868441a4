//! Styling engine seam
//!
//! A styling engine takes an element tag and a generated rule body and
//! returns the class under which that body is mounted. Real hosts hand this
//! to their own CSS-in-JS style runtime; [`StyleRegistry`] keeps the rules in
//! memory so rendered output can be inspected as plain CSS text.

use std::hash::Hasher;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::element::ElementTag;

/// A rule body attached to an element tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRule {
    /// Tag the rule was attached to
    pub tag: ElementTag,
    /// Generated class the rule is mounted under
    pub class_name: String,
}

/// Attaches generated rule bodies to element tags
pub trait StyleEngine {
    /// Mount `rule_body` for an element rendered as `tag`
    fn styled(&mut self, tag: &ElementTag, rule_body: &str) -> StyledRule;
}

/// In-memory styling engine
///
/// Each distinct rule body is mounted once under `css-<hash>`, where the hash
/// is taken over the body text. Mounting the same body again returns the
/// existing class.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    rules: IndexMap<String, String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mounted rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule body mounted under `class_name`
    pub fn rule(&self, class_name: &str) -> Option<&str> {
        self.rules.get(class_name).map(String::as_str)
    }

    /// Mounted `(class, body)` pairs in mount order
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All mounted rules as a style sheet, one `.class { body }` per line
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for (class_name, body) in &self.rules {
            out.push('.');
            out.push_str(class_name);
            out.push_str(" { ");
            out.push_str(body.trim());
            out.push_str(" }\n");
        }
        out
    }

    fn class_for(body: &str) -> String {
        let mut hasher = FxHasher::default();
        hasher.write(body.as_bytes());
        format!("css-{:016x}", hasher.finish())
    }
}

impl StyleEngine for StyleRegistry {
    fn styled(&mut self, tag: &ElementTag, rule_body: &str) -> StyledRule {
        let class_name = Self::class_for(rule_body);
        if !self.rules.contains_key(&class_name) {
            tracing::trace!(class = %class_name, tag = %tag, "mounting style rule");
            self.rules.insert(class_name.clone(), rule_body.to_string());
        }
        StyledRule {
            tag: tag.clone(),
            class_name,
        }
    }
}
