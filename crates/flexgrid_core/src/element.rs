//! Element tags
//!
//! The tag a styled element is rendered as. Common block and inline HTML
//! tags are listed; anything else (a custom element or a host component
//! name) goes through [`ElementTag::Custom`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag of a rendered element
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementTag {
    #[default]
    Div,
    Section,
    Article,
    Aside,
    Header,
    Footer,
    Main,
    Nav,
    Form,
    Span,
    Ul,
    Ol,
    Li,
    Custom(String),
}

impl ElementTag {
    /// Tag name as written in markup
    pub fn as_str(&self) -> &str {
        match self {
            ElementTag::Div => "div",
            ElementTag::Section => "section",
            ElementTag::Article => "article",
            ElementTag::Aside => "aside",
            ElementTag::Header => "header",
            ElementTag::Footer => "footer",
            ElementTag::Main => "main",
            ElementTag::Nav => "nav",
            ElementTag::Form => "form",
            ElementTag::Span => "span",
            ElementTag::Ul => "ul",
            ElementTag::Ol => "ol",
            ElementTag::Li => "li",
            ElementTag::Custom(name) => name,
        }
    }

    /// Returns true if the tag name is safe to write into markup
    ///
    /// Built-in tags always are. Custom names must start with an ASCII letter
    /// and contain only ASCII alphanumerics and `-`.
    pub fn is_valid_name(&self) -> bool {
        let ElementTag::Custom(name) = self else {
            return true;
        };
        let mut chars = name.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ElementTag {
    fn from(name: &str) -> Self {
        match name {
            "div" => ElementTag::Div,
            "section" => ElementTag::Section,
            "article" => ElementTag::Article,
            "aside" => ElementTag::Aside,
            "header" => ElementTag::Header,
            "footer" => ElementTag::Footer,
            "main" => ElementTag::Main,
            "nav" => ElementTag::Nav,
            "form" => ElementTag::Form,
            "span" => ElementTag::Span,
            "ul" => ElementTag::Ul,
            "ol" => ElementTag::Ol,
            "li" => ElementTag::Li,
            other => ElementTag::Custom(other.to_string()),
        }
    }
}

impl From<String> for ElementTag {
    fn from(name: String) -> Self {
        ElementTag::from(name.as_str())
    }
}

impl From<ElementTag> for String {
    fn from(tag: ElementTag) -> Self {
        tag.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::ElementTag;

    #[test]
    fn known_names_map_to_variants() {
        assert_eq!(ElementTag::from("section"), ElementTag::Section);
        assert_eq!(ElementTag::from("li").as_str(), "li");
        assert_eq!(ElementTag::default(), ElementTag::Div);
    }

    #[test]
    fn unknown_names_are_custom() {
        let tag = ElementTag::from("my-card");
        assert_eq!(tag, ElementTag::Custom("my-card".into()));
        assert_eq!(tag.to_string(), "my-card");
    }

    #[test]
    fn custom_names_are_validated() {
        assert!(ElementTag::Div.is_valid_name());
        assert!(ElementTag::from("my-card2").is_valid_name());
        assert!(!ElementTag::from("").is_valid_name());
        assert!(!ElementTag::from("-card").is_valid_name());
        assert!(!ElementTag::from("div><script").is_valid_name());
        assert!(!ElementTag::from("x y").is_valid_name());
    }
}
