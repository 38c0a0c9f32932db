use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root = "/tmp/blog"
notes_dir = "{{site_root}}/content/notes"

[feed]
site_url = "https://notes.example.org"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsite"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   mdsite doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("site_root: /tmp/blog"))
        .stdout(predicate::str::contains("notes_dir: /tmp/blog/content/notes"))
        .stdout(predicate::str::contains("covers_dir: /tmp/blog/public/covers"))
        .stdout(predicate::str::contains("feed.site_url: https://notes.example.org"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let site = tmp.path().join("site");
    write_file(&site.join("notes/a.md"), "# A");
    write_file(&site.join("notes/b/c.md"), "# C");

    write_file(
        &tmp.path().join("mdsite/config.toml"),
        &format!(
            "version = 1\nprofile = \"default\"\n[profiles.default]\nsite_root = \"{}\"\nnotes_dir = \"{{{{site_root}}}}/notes\"\n",
            site.display()
        ),
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsite"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   mdsite doctor"))
        .stdout(predicate::str::contains("notes: 2"));
}
