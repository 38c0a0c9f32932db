//! Strict note metadata coerced from loosely-typed frontmatter.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_yaml::Value;
use std::collections::BTreeSet;

use super::types::Frontmatter;

const DATETIME_FORMATS: [&str; 4] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Validated frontmatter fields.
///
/// Malformed or unknown values never reach this record: each field is either
/// coerced into its strict type or left at its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMeta {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub tags: BTreeSet<String>,
    pub draft: bool,
    pub cover: Option<String>,
}

impl NoteMeta {
    pub fn from_frontmatter(fm: Option<&Frontmatter>) -> Self {
        let Some(fm) = fm else {
            return Self::default();
        };

        Self {
            title: fm.get("title").and_then(scalar_string),
            date: fm.get("date").and_then(coerce_date),
            tags: fm.get("tags").map(coerce_tags).unwrap_or_default(),
            draft: matches!(fm.get("draft"), Some(Value::Bool(true))),
            cover: fm.get("cover").and_then(|v| v.as_str()).and_then(non_empty),
        }
    }
}

/// Parse a frontmatter date into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (converted to UTC),
/// `YYYY-MM-DD HH:MM[:SS]` and `YYYY/MM/DD`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(s, "%Y/%m/%d").ok()
}

fn coerce_date(value: &Value) -> Option<NaiveDate> {
    let parsed = value.as_str().and_then(parse_date);
    if parsed.is_none() {
        tracing::debug!(?value, "ignoring unparseable frontmatter date");
    }
    parsed
}

fn coerce_tags(value: &Value) -> BTreeSet<String> {
    match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_string).collect(),
        Value::String(s) => non_empty(s).into_iter().collect(),
        other => {
            tracing::debug!(value = ?other, "ignoring malformed frontmatter tags");
            BTreeSet::new()
        }
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
