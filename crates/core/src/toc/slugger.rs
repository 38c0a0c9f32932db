//! GitHub-style heading slugs.

use std::collections::HashMap;

/// Generates unique anchor ids for the headings of one document.
///
/// A slugger is scoped to a single document: create a new one (or call
/// [`Slugger::reset`]) per document, otherwise ids from earlier documents
/// leak in as `-1`, `-2` suffixes.
#[derive(Debug, Clone, Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug `value`, suffixing `-N` when the slug was already handed out.
    pub fn slug(&mut self, value: &str) -> String {
        let base = slugify(value);
        let mut result = base.clone();

        while self.occurrences.contains_key(&result) {
            let count = self.occurrences.entry(base.clone()).or_insert(0);
            *count += 1;
            result = format!("{base}-{count}");
        }

        self.occurrences.insert(result.clone(), 0);
        result
    }

    pub fn reset(&mut self) {
        self.occurrences.clear();
    }
}

/// Lowercase, drop everything but alphanumerics, spaces, `-` and `_`, then
/// turn each space into `-`.
pub fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}
