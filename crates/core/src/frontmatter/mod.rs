//! Frontmatter parsing and coercion.
//!
//! This module provides functionality to:
//! - Split a YAML frontmatter block from a markdown document
//! - Coerce the loosely-typed fields into a strict [`NoteMeta`] record

pub mod meta;
pub mod parser;
pub mod types;

pub use meta::{NoteMeta, parse_date};
pub use parser::{FrontmatterParseError, parse};
pub use types::{Frontmatter, ParsedDocument};
