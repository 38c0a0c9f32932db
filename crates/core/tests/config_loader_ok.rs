use mdsite_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root = "/tmp/blog"
notes_dir = "{{site_root}}/content/notes"

[feed]
site_url = "https://notes.example.org"
title = "Half-stack life"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.site_root.display().to_string(), "/tmp/blog");
    assert_eq!(rc.notes_dir, PathBuf::from("/tmp/blog/content/notes"));
    assert_eq!(rc.covers_dir, PathBuf::from("/tmp/blog/public/covers"));
    assert_eq!(rc.feed.site_url, "https://notes.example.org");
    assert_eq!(rc.feed.title, "Half-stack life");
    assert_eq!(rc.feed.language, "en");
    assert_eq!(rc.logging.level, "info");
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("mdsite/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root = "/tmp/def"
notes_dir = "{{site_root}}/notes"

[profiles.staging]
site_root = "/tmp/staging"
notes_dir = "{{site_root}}/notes"
covers_dir = "{{site_root}}/static/img"
covers_url_prefix = "/img"
default_cover = "/img/fallback.png"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("staging")).expect("should load");
    assert_eq!(rc.active_profile, "staging");
    assert_eq!(rc.notes_dir, PathBuf::from("/tmp/staging/notes"));
    assert_eq!(rc.covers_dir, PathBuf::from("/tmp/staging/static/img"));

    let covers = rc.cover_resolver();
    assert_eq!(covers.resolve(None, "missing"), "/img/fallback.png");
}

#[test]
fn repository_reads_configured_notes_dir() {
    let tmp = tempdir().unwrap();
    let site = tmp.path().join("site");
    fs::create_dir_all(site.join("content/notes")).unwrap();
    fs::create_dir_all(site.join("public/covers")).unwrap();
    fs::write(site.join("content/notes/hello.md"), "# Hello").unwrap();
    fs::write(site.join("public/covers/hello.webp"), "img").unwrap();

    let cfg_path = tmp.path().join("config.toml");
    let toml = format!(
        "version = 1\n[profiles.default]\nsite_root = \"{}\"\nnotes_dir = \"{{{{site_root}}}}/content/notes\"\n",
        site.display()
    );
    write_file(&cfg_path, &toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    let repo = rc.repository();

    assert_eq!(repo.list_all_slugs(), ["hello"]);
    assert_eq!(repo.get_by_slug(&["hello"]).unwrap().cover, "/covers/hello.webp");
}

#[test]
fn logging_file_is_expanded() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[profiles.default]
site_root = "/tmp/blog"
notes_dir = "{{site_root}}/notes"

[logging]
level = "debug"
file_level = "trace"
file = "{{site_root}}/logs/mdsite.log"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/blog/logs/mdsite.log")));
}
