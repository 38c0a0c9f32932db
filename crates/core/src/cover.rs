//! Cover image resolution.

use std::path::PathBuf;

pub const DEFAULT_COVER: &str = "/covers/default.png";
pub const DEFAULT_COVERS_URL_PREFIX: &str = "/covers";

/// Checked in this order for a same-slug cover file.
const COVER_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Picks the cover URL for a note: explicit frontmatter cover, then a
/// same-slug image under the covers directory, then the default image.
#[derive(Debug, Clone)]
pub struct CoverResolver {
    covers_dir: PathBuf,
    url_prefix: String,
    default_cover: String,
}

impl CoverResolver {
    pub fn new(covers_dir: impl Into<PathBuf>) -> Self {
        Self {
            covers_dir: covers_dir.into(),
            url_prefix: DEFAULT_COVERS_URL_PREFIX.to_string(),
            default_cover: DEFAULT_COVER.to_string(),
        }
    }

    /// URL prefix the covers directory is served under.
    pub fn with_url_prefix(mut self, prefix: &str) -> Self {
        self.url_prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    /// Fallback image. Blank values keep the built-in default.
    pub fn with_default_cover(mut self, cover: &str) -> Self {
        let cover = cover.trim();
        if !cover.is_empty() {
            self.default_cover = cover.to_string();
        }
        self
    }

    /// Resolve the cover for `slug`. Always returns a non-empty URL.
    ///
    /// `slug` must already be sanitized.
    pub fn resolve(&self, frontmatter_cover: Option<&str>, slug: &str) -> String {
        if let Some(cover) = frontmatter_cover.map(str::trim).filter(|c| !c.is_empty()) {
            return cover.to_string();
        }

        if !slug.is_empty() {
            for ext in COVER_EXTENSIONS {
                if self.covers_dir.join(format!("{slug}.{ext}")).is_file() {
                    return format!("{}/{slug}.{ext}", self.url_prefix);
                }
            }
        }

        self.default_cover.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn covers() -> (TempDir, CoverResolver) {
        let dir = TempDir::new().unwrap();
        let resolver = CoverResolver::new(dir.path());
        (dir, resolver)
    }

    #[test]
    fn frontmatter_cover_wins() {
        let (dir, resolver) = covers();
        fs::write(dir.path().join("post.png"), b"png").unwrap();

        assert_eq!(resolver.resolve(Some("/x.png"), "post"), "/x.png");
        assert_eq!(resolver.resolve(Some("  https://cdn/x.jpg "), "post"), "https://cdn/x.jpg");
    }

    #[test]
    fn same_slug_file_is_used() {
        let (dir, resolver) = covers();
        fs::create_dir_all(dir.path().join("Go")).unwrap();
        fs::write(dir.path().join("Go/generics.png"), b"png").unwrap();

        assert_eq!(resolver.resolve(None, "Go/generics"), "/covers/Go/generics.png");
        assert_eq!(resolver.resolve(Some("   "), "Go/generics"), "/covers/Go/generics.png");
    }

    #[test]
    fn extensions_are_checked_in_order() {
        let (dir, resolver) = covers();
        fs::write(dir.path().join("post.webp"), b"webp").unwrap();
        fs::write(dir.path().join("post.jpeg"), b"jpeg").unwrap();
        assert_eq!(resolver.resolve(None, "post"), "/covers/post.jpeg");

        fs::write(dir.path().join("post.jpg"), b"jpg").unwrap();
        assert_eq!(resolver.resolve(None, "post"), "/covers/post.jpg");
    }

    #[test]
    fn default_when_nothing_matches() {
        let (_dir, resolver) = covers();
        assert_eq!(resolver.resolve(None, "missing"), DEFAULT_COVER);
        assert_eq!(resolver.resolve(None, ""), DEFAULT_COVER);
    }

    #[test]
    fn custom_prefix_and_default() {
        let (dir, resolver) = covers();
        let resolver = resolver.with_url_prefix("/static/covers/").with_default_cover(" ");
        fs::write(dir.path().join("a.png"), b"png").unwrap();

        assert_eq!(resolver.resolve(None, "a"), "/static/covers/a.png");
        assert_eq!(resolver.resolve(None, "b"), DEFAULT_COVER);

        let resolver = resolver.with_default_cover("/img/fallback.png");
        assert_eq!(resolver.resolve(None, "b"), "/img/fallback.png");
    }
}
