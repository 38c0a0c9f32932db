use thiserror::Error;

use crate::frontmatter::FrontmatterParseError;
use crate::render::RenderError;

/// Errors surfaced by note lookups.
///
/// Messages name the slug, never the filesystem path behind it.
#[derive(Debug, Error)]
pub enum NoteError {
    /// Nothing was left of the slug after sanitization.
    #[error("invalid slug")]
    InvalidSlug,

    /// The resolved path escapes the notes root.
    #[error("invalid note path")]
    InvalidPath,

    #[error("note not found: {0}")]
    NotFound(String),

    #[error("failed to parse note {slug}: {source}")]
    Parse {
        slug: String,
        #[source]
        source: FrontmatterParseError,
    },

    #[error("failed to read note {slug}: {source}")]
    Io {
        slug: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl NoteError {
    /// Errors that should be answered with a "not found" page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NoteError::InvalidSlug | NoteError::NotFound(_))
    }
}
