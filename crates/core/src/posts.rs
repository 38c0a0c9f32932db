//! Post listings: summaries, excerpts and tag aggregation.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::notes::{Document, NoteRepository};

/// Maximum excerpt length, in characters.
pub const EXCERPT_MAX_CHARS: usize = 200;

/// What a listing card, the tag pages and the feed need from a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub cover: String,
}

impl PostSummary {
    pub fn from_document(document: &Document) -> Self {
        Self {
            slug: document.slug.clone(),
            title: document.title.clone(),
            date: document.date,
            tags: document.tags.iter().cloned().collect(),
            excerpt: build_excerpt(&document.content, EXCERPT_MAX_CHARS),
            cover: document.cover.clone(),
        }
    }
}

/// Every published note, newest first.
///
/// Notes that fail to load are logged and left out. Ties on date are broken
/// by slug so the order is stable.
pub fn list_posts(repo: &NoteRepository) -> Vec<PostSummary> {
    let mut posts: Vec<PostSummary> = repo
        .list_all_slugs()
        .into_iter()
        .filter_map(|slug| match repo.get_by_slug(&[slug.as_str()]) {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::warn!(slug = %slug, error = %err, "skipping note in post listing");
                None
            }
        })
        .filter(|document| !document.draft)
        .map(|document| PostSummary::from_document(&document))
        .collect();

    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    posts
}

/// First non-empty paragraph of `body` on a single line, cut to `max_chars`.
pub fn build_excerpt(body: &str, max_chars: usize) -> String {
    let normalized = body.replace("\r\n", "\n");
    let Some(paragraph) = normalized.split("\n\n").map(str::trim).find(|p| !p.is_empty()) else {
        return String::new();
    };

    paragraph.replace('\n', " ").chars().take(max_chars).collect()
}

/// Tag usage across `posts`, most used first, then by name.
pub fn tag_counts(posts: &[PostSummary]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in posts.iter().flat_map(|p| &p.tags) {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        *counts.entry(tag).or_default() += 1;
    }

    let mut counts: Vec<(String, usize)> =
        counts.into_iter().map(|(tag, n)| (tag.to_string(), n)).collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Posts carrying `tag`, compared case-insensitively. A blank tag matches
/// nothing.
pub fn posts_by_tag(posts: &[PostSummary], tag: &str) -> Vec<PostSummary> {
    let wanted = tag.trim().to_lowercase();
    if wanted.is_empty() {
        return Vec::new();
    }

    posts
        .iter()
        .filter(|p| p.tags.iter().any(|t| t.trim().to_lowercase() == wanted))
        .cloned()
        .collect()
}
