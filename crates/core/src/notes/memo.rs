//! Render-pass memo for note lookups.

use std::collections::HashMap;
use std::sync::Arc;

use super::error::NoteError;
use super::repository::NoteRepository;
use super::types::{Document, Page};
use crate::slug::slug_key;

/// Memoizes documents for the duration of one render pass.
///
/// Entries are keyed by the canonical slug string, so `["Go", "generics"]`
/// and `["Go/generics"]` share one entry. Errors are not memoized. Create one
/// memo per request and drop it afterwards.
#[derive(Debug, Default)]
pub struct NoteMemo {
    documents: HashMap<String, Arc<Document>>,
}

impl NoteMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<S: AsRef<str>>(
        &mut self,
        repo: &NoteRepository,
        parts: &[S],
    ) -> Result<Arc<Document>, NoteError> {
        let key = slug_key(parts);
        if key.is_empty() {
            return Err(NoteError::InvalidSlug);
        }

        if let Some(document) = self.documents.get(&key) {
            tracing::debug!(slug = %key, "note memo hit");
            return Ok(Arc::clone(document));
        }

        let document = Arc::new(repo.load(&key)?);
        self.documents.insert(key, Arc::clone(&document));
        Ok(document)
    }

    /// Compose a page from the memoized document.
    pub fn page<S: AsRef<str>>(
        &mut self,
        repo: &NoteRepository,
        parts: &[S],
    ) -> Result<Page, NoteError> {
        let document = self.get(repo, parts)?;
        Page::compose(document)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::CoverResolver;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, NoteRepository) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Go")).unwrap();
        fs::write(dir.path().join("Go/generics.md"), "---\ntitle: Generics\n---\nBody").unwrap();
        let repo = NoteRepository::new(dir.path(), CoverResolver::new(dir.path().join("covers")));
        (dir, repo)
    }

    #[test]
    fn equal_keys_share_one_entry() {
        let (_dir, repo) = setup();
        let mut memo = NoteMemo::new();

        let a = memo.get(&repo, &["Go", "generics"]).unwrap();
        let b = memo.get(&repo, &["Go/generics"]).unwrap();
        let c = memo.get(&repo, &vec!["Go".to_string(), "".to_string(), "generics".to_string()]).unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &c));
        assert_eq!(memo.len(), 1);
        assert_eq!(a.title, "Generics");
    }

    #[test]
    fn errors_are_not_cached() {
        let (dir, repo) = setup();
        let mut memo = NoteMemo::new();

        assert!(matches!(memo.get(&repo, &["later"]), Err(NoteError::NotFound(_))));
        assert!(memo.is_empty());

        fs::write(dir.path().join("later.md"), "now here").unwrap();
        assert_eq!(memo.get(&repo, &["later"]).unwrap().content, "now here");
    }

    #[test]
    fn empty_slug_is_invalid() {
        let (_dir, repo) = setup();
        let mut memo = NoteMemo::new();
        assert!(matches!(memo.get(&repo, &["..", "."]), Err(NoteError::InvalidSlug)));
    }

    #[test]
    fn page_uses_memoized_document() {
        let (_dir, repo) = setup();
        let mut memo = NoteMemo::new();
        let page = memo.page(&repo, &["Go", "generics"]).unwrap();
        assert_eq!(page.document.slug, "Go/generics");
        assert!(page.html.contains("Body"));
        assert!(!page.show_toc);
        assert_eq!(memo.len(), 1);
    }
}
