use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, parse_document};
use serde::Serialize;
use std::ops::RangeInclusive;

use super::slugger::Slugger;
use crate::render::markdown_options;

/// Heading levels that get an anchor and a TOC entry.
const TOC_LEVELS: RangeInclusive<u8> = 2..=4;

/// The TOC panel is only shown for documents with at least this many entries.
pub const MIN_TOC_HEADINGS: usize = 3;

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    pub id: String,
    pub text: String,
    /// 2, 3 or 4.
    pub level: u8,
}

/// Ordered TOC of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Toc {
    pub items: Vec<TocItem>,
    pub show_toc: bool,
}

impl Toc {
    pub fn from_items(items: Vec<TocItem>) -> Self {
        let show_toc = items.len() >= MIN_TOC_HEADINGS;
        Self { items, show_toc }
    }
}

/// Every heading of a document in document order, with the anchor id it
/// receives (`None` for headings outside levels 2–4 or without text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingAnchor {
    pub level: u8,
    pub text: String,
    pub id: Option<String>,
}

/// Parse `body` and build its table of contents.
pub fn build_toc(body: &str) -> Toc {
    let arena = Arena::new();
    let options = markdown_options();
    let root = parse_document(&arena, body, &options);
    build_toc_from_ast(root)
}

/// Build the table of contents of an already parsed document.
pub fn build_toc_from_ast<'a>(root: &'a AstNode<'a>) -> Toc {
    let items = heading_anchors(root)
        .into_iter()
        .filter_map(|heading| {
            heading.id.map(|id| TocItem { id, text: heading.text, level: heading.level })
        })
        .collect();
    Toc::from_items(items)
}

/// Collect the headings of one document. Each call uses a fresh slugger, so
/// ids never depend on previously processed documents.
pub fn heading_anchors<'a>(root: &'a AstNode<'a>) -> Vec<HeadingAnchor> {
    let mut slugger = Slugger::new();
    let mut headings = Vec::new();
    visit(root, &mut slugger, &mut headings);
    headings
}

fn visit<'a>(node: &'a AstNode<'a>, slugger: &mut Slugger, out: &mut Vec<HeadingAnchor>) {
    let level = match node.data.borrow().value {
        NodeValue::Heading(ref heading) => Some(heading.level),
        _ => None,
    };

    if let Some(level) = level {
        let text = extract_text(node).trim().to_string();
        let id = (TOC_LEVELS.contains(&level) && !text.is_empty()).then(|| slugger.slug(&text));
        out.push(HeadingAnchor { level, text, id });
        return;
    }

    for child in node.children() {
        visit(child, slugger, out);
    }
}

/// Plain text of a heading: text and inline code, through any nesting of
/// emphasis, links, strikethrough and so on. Images contribute nothing and
/// line breaks become spaces.
fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    push_text(node, &mut text);
    text
}

fn push_text<'a>(node: &'a AstNode<'a>, buf: &mut String) {
    match node.data.borrow().value {
        NodeValue::Text(ref t) => buf.push_str(t),
        NodeValue::Code(ref code) => buf.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => buf.push(' '),
        NodeValue::Image(_) => {}
        _ => {
            for child in node.children() {
                push_text(child, buf);
            }
        }
    }
}
