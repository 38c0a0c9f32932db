use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::error::NoteError;
use crate::render::render_html;
use crate::toc::{Toc, TocItem, build_toc};

/// A note loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Canonical `/`-joined key.
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub tags: BTreeSet<String>,
    pub draft: bool,
    /// Resolved cover URL, never empty.
    pub cover: String,
    /// Body without frontmatter.
    pub content: String,
    /// Raw frontmatter block exactly as read.
    #[serde(skip)]
    pub(crate) header: String,
}

impl Document {
    /// The file content this document was read from.
    pub fn to_source(&self) -> String {
        format!("{}{}", self.header, self.content)
    }

    /// `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Everything a note page shows: the document, its HTML and its TOC.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub document: Arc<Document>,
    pub html: String,
    pub toc: Vec<TocItem>,
    pub show_toc: bool,
}

impl Page {
    /// Render the body and build the TOC. Both parse the body on their own,
    /// each with a fresh slugger.
    pub fn compose(document: Arc<Document>) -> Result<Self, NoteError> {
        let Toc { items, show_toc } = build_toc(&document.content);
        let html = render_html(&document.content)?;
        Ok(Self { document, html, toc: items, show_toc })
    }
}
