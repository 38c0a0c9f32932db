//! Frontmatter types and data structures.

use serde_yaml::Value;
use std::collections::HashMap;

/// Represents parsed YAML frontmatter from a markdown document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    pub fields: HashMap<String, Value>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Result of splitting frontmatter from markdown.
///
/// `header` is the exact text preceding the body (delimiters included), so
/// `header + body` always reproduces the input.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Parsed frontmatter (if present).
    pub frontmatter: Option<Frontmatter>,
    /// Raw frontmatter block, empty when the document has none.
    pub header: String,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}

impl ParsedDocument {
    pub(crate) fn without_frontmatter(content: &str) -> Self {
        Self { frontmatter: None, header: String::new(), body: content.to_string() }
    }
}
