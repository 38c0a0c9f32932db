//! Slug sanitization.
//!
//! Turns user- or file-supplied path segments into a canonical `/`-joined key
//! that can never address anything outside the notes root. The repository
//! checks containment again when it resolves the key to a file.

use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::LazyLock;

static DRIVE_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]:").unwrap());

/// Sanitize raw path segments, returning the surviving segments.
///
/// Each segment is percent-decoded (falling back to the raw text when the
/// escape is malformed), backslashes become `/` and whitespace is trimmed.
/// Segments that are empty, `.`/`..`, contain `..`, start with `/` or start
/// with a drive letter are dropped. Decoded segments that contain `/` are
/// split and each piece is trimmed and checked again by the same rules.
pub fn sanitize_slug_parts<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts
        .iter()
        .map(|part| decode_segment(part.as_ref()))
        .map(|part| part.replace('\\', "/").trim().to_string())
        .filter(|part| is_allowed(part))
        .flat_map(|part| {
            part.split('/')
                .map(str::trim)
                .filter(|piece| is_allowed(piece))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Canonical slug key for the given segments. May be empty.
pub fn slug_key<S: AsRef<str>>(parts: &[S]) -> String {
    sanitize_slug_parts(parts).join("/")
}

/// Split a `/`-separated URL path into raw segments.
pub fn split_slug(path: &str) -> Vec<String> {
    path.split('/').map(str::to_string).collect()
}

fn is_allowed(part: &str) -> bool {
    !part.is_empty()
        && part != "."
        && !part.contains("..")
        && !part.starts_with('/')
        && !DRIVE_LETTER_RE.is_match(part)
}

fn decode_segment(raw: &str) -> String {
    if !has_valid_escapes(raw) {
        return raw.to_string();
    }
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Every `%` must introduce two hex digits.
fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
