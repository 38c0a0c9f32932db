use mdsite_core::tree::{build_tree, render_text};
use std::path::Path;

use super::load_config;
use super::output::print_json;

pub fn run(config: Option<&Path>, profile: Option<&str>, json: bool) {
    let rc = load_config(config, profile);
    let tree = build_tree(rc.repository().root());

    if json {
        print_json(&tree);
    } else if tree.is_empty() {
        println!("(no notes found)");
    } else {
        print!("{}", render_text(&tree));
    }
}
