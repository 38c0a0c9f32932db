//! Frontmatter parsing from markdown documents.

use serde_yaml::Value;
use std::collections::HashMap;
use thiserror::Error;

use super::types::{Frontmatter, ParsedDocument};

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("frontmatter must be a mapping of keys to values")]
    NotAMapping,
}

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` lines at the very start of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
///
/// A document whose opening delimiter is never closed has no frontmatter.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let Some((yaml, body_start)) = split_header(content) else {
        return Ok(ParsedDocument::without_frontmatter(content));
    };

    let frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        parse_fields(yaml)?
    };

    Ok(ParsedDocument {
        frontmatter: Some(frontmatter),
        header: content[..body_start].to_string(),
        body: content[body_start..].to_string(),
    })
}

/// Locate the YAML block. Returns the YAML text and the byte offset where the
/// body starts (just past the closing delimiter line).
fn split_header(content: &str) -> Option<(&str, usize)> {
    let start = if content.starts_with(BOM) { BOM.len_utf8() } else { 0 };
    let mut lines = content[start..].split_inclusive('\n');

    let first = lines.next()?;
    if !first.ends_with('\n') || strip_line_ending(first) != DELIMITER {
        return None;
    }

    let yaml_start = start + first.len();
    let mut offset = yaml_start;
    for line in lines {
        if strip_line_ending(line).trim_end() == DELIMITER {
            return Some((&content[yaml_start..offset], offset + line.len()));
        }
        offset += line.len();
    }

    None
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn parse_fields(yaml: &str) -> Result<Frontmatter, FrontmatterParseError> {
    let mapping = match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(mapping) => mapping,
        // A block holding only comments parses as null.
        Value::Null => return Ok(Frontmatter::default()),
        _ => return Err(FrontmatterParseError::NotAMapping),
    };

    let mut fields = HashMap::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = match key {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        fields.insert(key, value);
    }

    Ok(Frontmatter { fields })
}
