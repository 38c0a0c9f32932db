//! Markdown to HTML rendering with heading anchors.
//!
//! Qualifying headings are emitted as `<hN id="…">` carrying exactly the ids
//! the TOC builder hands out, so TOC links land on the right element.

use comrak::adapters::{HeadingAdapter, HeadingMeta};
use comrak::nodes::Sourcepos;
use comrak::{Arena, Options, Plugins, format_html_with_plugins, parse_document};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::string::FromUtf8Error;
use std::sync::Mutex;
use thiserror::Error;

use crate::toc::heading_anchors;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write html: {0}")]
    Write(#[from] io::Error),

    #[error("rendered html is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Render a markdown body to HTML.
pub fn render_html(body: &str) -> Result<String, RenderError> {
    let arena = Arena::new();
    let options = markdown_options();
    let root = parse_document(&arena, body, &options);

    let ids = heading_anchors(root).into_iter().map(|heading| heading.id).collect();
    let adapter = AnchoredHeadings { ids: Mutex::new(ids) };

    let mut plugins = Plugins::default();
    plugins.render.heading_adapter = Some(&adapter);

    let mut html = Vec::with_capacity(body.len() * 2);
    format_html_with_plugins(root, &options, &mut html, &plugins)?;
    Ok(String::from_utf8(html)?)
}

/// GFM options shared by the renderer and the TOC builder, so both see the
/// same headings.
pub(crate) fn markdown_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    options.parse.smart = false;

    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    // Notes are authored locally; raw HTML passes through.
    options.render.unsafe_ = true;

    options
}

/// Hands out the precomputed heading ids in document order.
struct AnchoredHeadings {
    ids: Mutex<VecDeque<Option<String>>>,
}

impl HeadingAdapter for AnchoredHeadings {
    fn enter(
        &self,
        output: &mut dyn Write,
        heading: &HeadingMeta,
        _sourcepos: Option<Sourcepos>,
    ) -> io::Result<()> {
        let id = self
            .ids
            .lock()
            .map_err(|_| io::Error::other("heading id queue poisoned"))?
            .pop_front()
            .flatten();

        match id {
            Some(id) => write!(output, "<h{} id=\"{}\">", heading.level, id),
            None => write!(output, "<h{}>", heading.level),
        }
    }

    fn exit(&self, output: &mut dyn Write, heading: &HeadingMeta) -> io::Result<()> {
        writeln!(output, "</h{}>", heading.level)
    }
}
