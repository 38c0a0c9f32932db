//! RSS 2.0 feed rendering.

use chrono::{NaiveDate, NaiveTime};
use std::fmt::Write;

use crate::config::FeedConfig;
use crate::posts::PostSummary;

/// Render `posts` as an RSS 2.0 document, in the order given.
pub fn render_rss(posts: &[PostSummary], feed: &FeedConfig) -> String {
    let site_url = feed.site_url.trim_end_matches('/');

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\">\n  <channel>\n");
    let _ = writeln!(xml, "    <title>{}</title>", escape_xml(&feed.title));
    let _ = writeln!(xml, "    <link>{}</link>", escape_xml(site_url));
    let _ = writeln!(xml, "    <description>{}</description>", escape_xml(&feed.description));
    let _ = writeln!(xml, "    <language>{}</language>", escape_xml(&feed.language));

    for post in posts {
        let link = escape_xml(&format!("{site_url}/notes/{}", post.slug));
        let pub_date = rfc822_date(post.date);

        xml.push_str("    <item>\n");
        let _ = writeln!(xml, "      <title>{}</title>", cdata(&post.title));
        let _ = writeln!(xml, "      <link>{link}</link>");
        let _ = writeln!(xml, "      <guid>{link}</guid>");
        let _ = writeln!(xml, "      <pubDate>{pub_date}</pubDate>");
        let _ = writeln!(xml, "      <description>{}</description>", cdata(&post.excerpt));
        xml.push_str("    </item>\n");
    }

    xml.push_str("  </channel>\n</rss>\n");
    xml
}

/// Midnight UTC with a zero-padded day, e.g. `Sat, 03 Feb 2024 00:00:00 +0000`.
fn rfc822_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().format("%a, %d %b %Y %H:%M:%S +0000").to_string()
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Wrap in a CDATA section. A literal `]]>` is split across two sections.
fn cdata(s: &str) -> String {
    format!("<![CDATA[{}]]>", s.replace("]]>", "]]]]><![CDATA[>"))
}
