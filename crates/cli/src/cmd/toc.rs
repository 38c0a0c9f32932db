use mdsite_core::slug::split_slug;
use mdsite_core::toc::{Toc, build_toc};
use std::path::Path;

use super::output::{print_json, toc_outline};
use super::{exit_lookup_error, load_config};

pub fn run(config: Option<&Path>, profile: Option<&str>, slug: &str, json: bool) {
    let repo = load_config(config, profile).repository();

    let document = match repo.get_by_slug(&split_slug(slug)) {
        Ok(document) => document,
        Err(e) => exit_lookup_error(slug, &e),
    };
    let toc: Toc = build_toc(&document.content);

    if json {
        print_json(&toc);
    } else if toc.items.is_empty() {
        println!("(no headings)");
    } else {
        print!("{}", toc_outline(&toc.items));
        if !toc.show_toc {
            println!("(too few headings, hidden on the page)");
        }
    }
}
