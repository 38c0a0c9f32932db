//! Note repository: slug lookup, listing and page composition over a
//! directory of markdown files.

pub mod error;
pub mod memo;
pub mod repository;
pub mod types;

pub use error::NoteError;
pub use memo::NoteMemo;
pub use repository::NoteRepository;
pub use types::{Document, Page};

use chrono::{DateTime, Local, NaiveDate};
use std::fs::Metadata;
use std::path::Path;

use crate::slug::sanitize_slug_parts;

/// Recognized note extensions, in lookup priority order.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "mdx"];

pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| MARKDOWN_EXTENSIONS.iter().any(|ext| e.eq_ignore_ascii_case(ext)))
}

/// File name without its markdown extension.
pub fn strip_markdown_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && MARKDOWN_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)) =>
        {
            stem
        }
        _ => name,
    }
}

/// Whether a file path's segments survive slug sanitization unchanged, so
/// the note can be looked up by the slug they form.
pub(crate) fn is_addressable(parts: &[String]) -> bool {
    sanitize_slug_parts(parts) == parts
}

/// Local calendar date of the file's last modification.
pub(crate) fn modified_date(metadata: &Metadata) -> Option<NaiveDate> {
    let modified = metadata.modified().ok()?;
    Some(DateTime::<Local>::from(modified).date_naive())
}
