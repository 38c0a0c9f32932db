//! Shared output formatting for listing commands.

use chrono::NaiveDate;
use mdsite_core::notes::Page;
use mdsite_core::posts::PostSummary;
use mdsite_core::toc::TocItem;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

/// Row for the posts table.
#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

/// Row for the tags table.
#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Posts")]
    posts: usize,
}

/// Tag with its post count, for JSON output.
#[derive(Debug, Serialize)]
pub struct TagOutput<'a> {
    pub tag: &'a str,
    pub count: usize,
}

/// Print `value` as pretty JSON, or exit with status 1.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

pub fn print_posts_table(posts: &[PostSummary]) {
    if posts.is_empty() {
        println!("(no posts found)");
        return;
    }

    let rows: Vec<PostRow> = posts
        .iter()
        .map(|p| PostRow {
            date: date_cell(p.date),
            slug: p.slug.clone(),
            title: p.title.clone(),
            tags: p.tags.join(", "),
        })
        .collect();

    println!("{}", Table::new(&rows).with(Style::rounded()));
    println!("\nTotal: {} posts", rows.len());
}

pub fn print_tags_table(counts: &[(String, usize)]) {
    if counts.is_empty() {
        println!("(no tags found)");
        return;
    }

    let rows: Vec<TagRow> =
        counts.iter().map(|(tag, posts)| TagRow { tag: tag.clone(), posts: *posts }).collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
}

/// Indented TOC outline; entries nest by heading level.
pub fn toc_outline(items: &[TocItem]) -> String {
    items
        .iter()
        .map(|item| {
            let indent = "  ".repeat(usize::from(item.level.saturating_sub(2)));
            format!("{indent}- {} (#{})\n", item.text, item.id)
        })
        .collect()
}

/// Metadata header printed above a rendered page.
pub fn page_header(page: &Page) -> String {
    let doc = &page.document;
    let tags: Vec<&str> = doc.tags.iter().map(String::as_str).collect();
    let mut header = format!(
        "slug: {}\ntitle: {}\ndate: {}\ncover: {}\n",
        doc.slug,
        doc.title,
        date_cell(doc.date),
        doc.cover
    );
    if !tags.is_empty() {
        header.push_str(&format!("tags: {}\n", tags.join(", ")));
    }
    if doc.draft {
        header.push_str("draft: true\n");
    }
    header
}

fn date_cell(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toc_outline_indents_by_level() {
        let items = vec![
            TocItem { id: "setup".into(), text: "Setup".into(), level: 2 },
            TocItem { id: "install".into(), text: "Install".into(), level: 3 },
            TocItem { id: "verify".into(), text: "Verify".into(), level: 4 },
        ];

        insta::assert_snapshot!(toc_outline(&items), @r"
        - Setup (#setup)
          - Install (#install)
            - Verify (#verify)
        ");
    }

    #[test]
    fn empty_toc_outline() {
        assert_eq!(toc_outline(&[]), "");
    }
}
