//! Rendered elements
//!
//! What a Grid produces: the element tag, its class list, the styled rule the
//! generated body was mounted under, the forwarded attributes and children,
//! and the forwarded [`NodeRef`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use flexgrid_core::{format_number, ElementTag, StyledRule};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A non-layout attribute forwarded to the rendered element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Number(n) => f.write_str(&format_number(*n)),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// Forwarded attributes, in insertion order
pub type Attributes = IndexMap<String, AttrValue>;

/// Child content of a rendered element
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    Text(String),
    Element(RenderedElement),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<RenderedElement> for Child {
    fn from(element: RenderedElement) -> Self {
        Child::Element(element)
    }
}

/// Identity of an instantiated element, as seen through a [`NodeRef`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementHandle {
    pub tag: ElementTag,
    pub class_name: String,
    pub style_class: String,
}

/// Shared slot resolving to the element a Grid instantiated
///
/// Clones share the slot, so a caller keeps one clone and passes another in
/// the props.
#[derive(Clone, Debug, Default)]
pub struct NodeRef(Rc<RefCell<Option<ElementHandle>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element currently bound to this ref
    pub fn get(&self) -> Option<ElementHandle> {
        self.0.borrow().clone()
    }

    pub fn is_bound(&self) -> bool {
        self.0.borrow().is_some()
    }

    pub(crate) fn bind(&self, handle: ElementHandle) {
        *self.0.borrow_mut() = Some(handle);
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Element instantiated by a Grid render
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedElement {
    pub tag: ElementTag,
    /// Caller class and grid marker classes
    pub class_name: String,
    /// Styling engine mount for the generated rule body
    pub style: StyledRule,
    /// The generated rule body
    pub rule_body: Arc<str>,
    pub attrs: Attributes,
    pub children: Vec<Child>,
    pub node_ref: Option<NodeRef>,
}

impl RenderedElement {
    /// Class attribute as emitted: marker classes then the style class
    pub fn full_class_name(&self) -> String {
        if self.class_name.is_empty() {
            return self.style.class_name.clone();
        }
        format!("{} {}", self.class_name, self.style.class_name)
    }

    pub fn handle(&self) -> ElementHandle {
        ElementHandle {
            tag: self.tag.clone(),
            class_name: self.class_name.clone(),
            style_class: self.style.class_name.clone(),
        }
    }

    /// Render as an HTML fragment
    ///
    /// `true` boolean attributes are written bare, `false` ones are dropped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let tag = if self.tag.is_valid_name() {
            self.tag.as_str()
        } else {
            tracing::debug!(tag = %self.tag, "invalid tag name, rendering as div");
            ElementTag::Div.as_str()
        };
        out.push('<');
        out.push_str(tag);
        out.push_str(" class=\"");
        escape_into(out, &self.full_class_name(), true);
        out.push('"');

        for (name, value) in &self.attrs {
            if !is_valid_attr_name(name) {
                tracing::debug!(attr = %name, "skipping invalid attribute name");
                continue;
            }
            match value {
                AttrValue::Bool(false) => continue,
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                other => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(out, &other.to_string(), true);
                    out.push('"');
                }
            }
        }
        out.push('>');

        for child in &self.children {
            match child {
                Child::Text(text) => escape_into(out, text, false),
                Child::Element(element) => element.write_html(out),
            }
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// Returns true if `name` can be written as an attribute name
///
/// Rejects empty names, whitespace, control characters, and any of
/// `"`, `'`, `<`, `>`, `/`, `=`.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
