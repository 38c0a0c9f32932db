//! Slug-addressed access to the notes directory.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

use super::error::NoteError;
use super::types::{Document, Page};
use super::{MARKDOWN_EXTENSIONS, is_addressable, is_markdown_file, modified_date, strip_markdown_extension};
use crate::cover::CoverResolver;
use crate::frontmatter::{self, NoteMeta};
use crate::slug::slug_key;

/// Read-only view of a notes root. Every call reads the filesystem afresh.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    root: PathBuf,
    covers: CoverResolver,
}

impl NoteRepository {
    /// Relative roots are resolved against the current directory.
    pub fn new(root: impl AsRef<Path>, covers: CoverResolver) -> Self {
        let root = root.as_ref();
        let absolute = if root.is_absolute() {
            root.to_path_buf()
        } else {
            std::env::current_dir().map(|cwd| cwd.join(root)).unwrap_or_else(|_| root.to_path_buf())
        };
        Self { root: normalize_lexically(&absolute), covers }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Slugs of every note under the root, in filesystem order.
    ///
    /// Hidden entries are skipped; unreadable entries are logged and skipped.
    /// Files whose names would not survive slug sanitization are not listed,
    /// since they could never be looked up.
    pub fn list_all_slugs(&self) -> Vec<String> {
        if !self.root.is_dir() {
            tracing::debug!(root = %self.root.display(), "notes root missing");
            return Vec::new();
        }

        let mut slugs = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable notes entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_markdown_file(entry.path()) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };

            match slug_from_relative(relative) {
                Some(slug) => slugs.push(slug),
                None => tracing::warn!(
                    path = %relative.display(),
                    "note file name is not addressable by slug, skipping"
                ),
            }
        }

        slugs
    }

    /// Load the note addressed by raw URL segments.
    pub fn get_by_slug<S: AsRef<str>>(&self, parts: &[S]) -> Result<Document, NoteError> {
        let slug = slug_key(parts);
        if slug.is_empty() {
            return Err(NoteError::InvalidSlug);
        }
        self.load(&slug)
    }

    /// Load a note and compose its page (HTML and TOC).
    pub fn render_page<S: AsRef<str>>(&self, parts: &[S]) -> Result<Page, NoteError> {
        let document = self.get_by_slug(parts)?;
        Page::compose(Arc::new(document))
    }

    /// Map a slug key to its file, refusing anything outside the root.
    ///
    /// This check does not rely on the key being sanitized. Returns the
    /// first existing candidate (`.md` before `.mdx`), or the `.md` path when
    /// none exists.
    pub fn resolve_path(&self, slug: &str) -> Result<PathBuf, NoteError> {
        let mut fallback = None;

        for ext in MARKDOWN_EXTENSIONS {
            let target = normalize_lexically(&self.root.join(format!("{slug}.{ext}")));
            if !self.contains(&target) {
                return Err(NoteError::InvalidPath);
            }
            if target.is_file() {
                return Ok(target);
            }
            fallback.get_or_insert(target);
        }

        fallback.ok_or(NoteError::InvalidPath)
    }

    /// Load a note by canonical slug key.
    pub(crate) fn load(&self, slug: &str) -> Result<Document, NoteError> {
        let path = self.resolve_path(slug)?;

        let metadata = match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => return Err(NoteError::NotFound(slug.to_string())),
        };

        let raw = fs::read_to_string(&path)
            .map_err(|source| NoteError::Io { slug: slug.to_string(), source })?;

        let parsed = frontmatter::parse(&raw)
            .map_err(|source| NoteError::Parse { slug: slug.to_string(), source })?;
        let meta = NoteMeta::from_frontmatter(parsed.frontmatter.as_ref());

        let title = meta
            .title
            .unwrap_or_else(|| slug.rsplit('/').next().unwrap_or(slug).to_string());
        let date = meta
            .date
            .or_else(|| modified_date(&metadata))
            .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.date_naive());
        let cover = self.covers.resolve(meta.cover.as_deref(), slug);

        Ok(Document {
            slug: slug.to_string(),
            title,
            date,
            tags: meta.tags,
            draft: meta.draft,
            cover,
            content: parsed.body,
            header: parsed.header,
        })
    }

    /// Strict descendant check, component-wise.
    fn contains(&self, target: &Path) -> bool {
        target != self.root && target.starts_with(&self.root)
    }
}

/// Slug for a path relative to the root, or `None` when sanitization would
/// change it.
fn slug_from_relative(relative: &Path) -> Option<String> {
    let mut parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let last = parts.pop()?;
    parts.push(strip_markdown_extension(&last).to_string());

    is_addressable(&parts).then(|| parts.join("/"))
}

/// Resolve `.` and `..` without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
