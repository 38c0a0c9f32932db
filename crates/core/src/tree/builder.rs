//! Recursive notes tree builder.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use super::collate::compare_nodes;
use super::types::TreeNode;
use crate::frontmatter::{self, NoteMeta};
use crate::notes::{is_addressable, is_markdown_file, modified_date, strip_markdown_extension};

/// Build the navigation tree under `root`.
///
/// Never fails: a missing root gives an empty tree, unreadable directories
/// and files are logged and left out, as are files whose names could not be
/// looked up by slug. Folders without notes are pruned.
pub fn build_tree(root: &Path) -> Vec<TreeNode> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "notes root missing, empty tree");
        return Vec::new();
    }
    walk_dir(root, &[])
}

fn walk_dir(dir: &Path, parent_parts: &[String]) -> Vec<TreeNode> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable notes directory");
            return Vec::new();
        }
    };

    let mut nodes = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        // .DS_Store, .git and friends
        if name.starts_with('.') {
            continue;
        }

        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();

        if file_type.is_dir() {
            let mut path_parts = parent_parts.to_vec();
            path_parts.push(name.clone());

            let children = walk_dir(&path, &path_parts);
            if !children.is_empty() {
                nodes.push(TreeNode::Folder { name, path_parts, children });
            }
        } else if file_type.is_file() && is_markdown_file(&path) {
            let mut path_parts = parent_parts.to_vec();
            path_parts.push(strip_markdown_extension(&name).to_string());

            if !is_addressable(&path_parts) {
                tracing::warn!(file = %path.display(), "note file name is not addressable by slug, skipping");
                continue;
            }
            if let Some(node) = file_node(&path, path_parts) {
                nodes.push(node);
            }
        }
    }

    nodes.sort_by(compare_nodes);
    nodes
}

fn file_node(path: &Path, path_parts: Vec<String>) -> Option<TreeNode> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(file = %path.display(), error = %err, "skipping unreadable note");
            return None;
        }
    };

    let meta = match frontmatter::parse(&raw) {
        Ok(parsed) => NoteMeta::from_frontmatter(parsed.frontmatter.as_ref()),
        Err(err) => {
            tracing::debug!(file = %path.display(), error = %err, "ignoring malformed frontmatter");
            NoteMeta::default()
        }
    };

    let title = meta
        .title
        .or_else(|| path_parts.last().cloned())
        .unwrap_or_default();
    let date = meta
        .date
        .or_else(|| fs::metadata(path).ok().as_ref().and_then(modified_date))
        .map(|d| d.format("%Y-%m-%d").to_string());

    Some(TreeNode::File { title, date, path_parts })
}

/// Indented outline of the tree, one node per line.
pub fn render_text(nodes: &[TreeNode]) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes, 0);
    out
}

fn write_nodes(out: &mut String, nodes: &[TreeNode], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            TreeNode::Folder { name, children, .. } => {
                let _ = writeln!(out, "{indent}{name}/");
                write_nodes(out, children, depth + 1);
            }
            TreeNode::File { title, date: Some(date), .. } => {
                let _ = writeln!(out, "{indent}{title}  ({date})");
            }
            TreeNode::File { title, date: None, .. } => {
                let _ = writeln!(out, "{indent}{title}");
            }
        }
    }
}
