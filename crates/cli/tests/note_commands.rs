use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A small site with three notes and its config file.
fn site() -> (TempDir, PathBuf) {
    let tmp = tempdir().unwrap();
    let notes = tmp.path().join("content/notes");

    write_file(
        &notes.join("Go/generics.md"),
        "---\ntitle: Go Generics\ndate: 2024-02-03\ntags: [go]\n---\n\nIntro.\n\n## Why\n\n## How\n\n### Details\n",
    );
    write_file(&notes.join("Go/empty-dir/.keep"), "");
    write_file(&notes.join("about.md"), "---\ntitle: About\ndate: 2023-01-01\n---\nHi.\n");

    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        &format!(
            "version = 1\n[profiles.default]\nsite_root = \"{}\"\nnotes_dir = \"{{{{site_root}}}}/content/notes\"\n",
            tmp.path().display()
        ),
    );
    (tmp, cfg)
}

fn mdsite(cfg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsite"));
    cmd.arg("--config").arg(cfg);
    cmd
}

#[test]
fn slugs_lists_sorted_slugs() {
    let (_tmp, cfg) = site();
    mdsite(&cfg).arg("slugs").assert().success().stdout("Go/generics\nabout\n");
}

#[test]
fn tree_prints_outline() {
    let (_tmp, cfg) = site();
    mdsite(&cfg)
        .arg("tree")
        .assert()
        .success()
        .stdout("Go/\n  Go Generics  (2024-02-03)\nAbout  (2023-01-01)\n");
}

#[test]
fn tree_json_has_camel_case_fields() {
    let (_tmp, cfg) = site();
    let output = mdsite(&cfg).args(["tree", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["type"], "folder");
    assert_eq!(json[0]["pathParts"], serde_json::json!(["Go"]));
    assert_eq!(json[0]["children"][0]["pathParts"], serde_json::json!(["Go", "generics"]));
    assert_eq!(json[1]["title"], "About");
}

#[test]
fn show_prints_metadata_toc_and_html() {
    let (_tmp, cfg) = site();
    mdsite(&cfg)
        .args(["show", "Go/generics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Go Generics"))
        .stdout(predicate::str::contains("cover: /covers/default.png"))
        .stdout(predicate::str::contains("- Why (#why)"))
        .stdout(predicate::str::contains("<h2 id=\"why\">Why</h2>"))
        .stdout(predicate::str::contains("<h3 id=\"details\">Details</h3>"));
}

#[test]
fn show_json_includes_page_fields() {
    let (_tmp, cfg) = site();
    let output = mdsite(&cfg).args(["show", "Go/generics", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["document"]["slug"], "Go/generics");
    assert_eq!(json["document"]["date"], "2024-02-03");
    assert_eq!(json["show_toc"], true);
    assert_eq!(json["toc"][2]["id"], "details");
}

#[test]
fn show_missing_note_exits_with_not_found() {
    let (_tmp, cfg) = site();
    mdsite(&cfg)
        .args(["show", "Go/missing"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Note not found: Go/missing"));
}

#[test]
fn traversal_is_not_found() {
    let (_tmp, cfg) = site();
    mdsite(&cfg).args(["show", "../../etc/passwd"]).assert().failure().code(2);
    mdsite(&cfg).args(["toc", ".."]).assert().failure().code(2);
}

#[test]
fn toc_hides_short_documents() {
    let (_tmp, cfg) = site();
    mdsite(&cfg).args(["toc", "about"]).assert().success().stdout("(no headings)\n");

    mdsite(&cfg)
        .args(["toc", "Go/generics"])
        .assert()
        .success()
        .stdout("- Why (#why)\n- How (#how)\n  - Details (#details)\n");
}
