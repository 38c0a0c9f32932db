use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::cover::CoverResolver;
use crate::notes::NoteRepository;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub site_root: String,
    pub notes_dir: String,
    /// Defaults to `{{site_root}}/public/covers`.
    pub covers_dir: Option<String>,
    pub covers_url_prefix: Option<String>,
    pub default_cover: Option<String>,
}

/// Channel metadata for the RSS feed.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_feed_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            title: default_feed_title(),
            description: String::new(),
            language: default_language(),
        }
    }
}

fn default_site_url() -> String {
    "https://example.com".to_string()
}

fn default_feed_title() -> String {
    "Notes".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub site_root: PathBuf,
    pub notes_dir: PathBuf,
    pub covers_dir: PathBuf,
    pub covers_url_prefix: Option<String>,
    pub default_cover: Option<String>,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    pub fn cover_resolver(&self) -> CoverResolver {
        let mut covers = CoverResolver::new(&self.covers_dir);
        if let Some(prefix) = &self.covers_url_prefix {
            covers = covers.with_url_prefix(prefix);
        }
        if let Some(default_cover) = &self.default_cover {
            covers = covers.with_default_cover(default_cover);
        }
        covers
    }

    pub fn repository(&self) -> NoteRepository {
        NoteRepository::new(&self.notes_dir, self.cover_resolver())
    }
}
