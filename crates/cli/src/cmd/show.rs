use mdsite_core::slug::split_slug;
use std::path::Path;

use super::output::{page_header, print_json, toc_outline};
use super::{exit_lookup_error, load_config};

pub fn run(config: Option<&Path>, profile: Option<&str>, slug: &str, json: bool) {
    let repo = load_config(config, profile).repository();

    let page = match repo.render_page(&split_slug(slug)) {
        Ok(page) => page,
        Err(e) => exit_lookup_error(slug, &e),
    };

    if json {
        print_json(&page);
        return;
    }

    print!("{}", page_header(&page));
    if page.show_toc {
        println!("\nContents:");
        print!("{}", toc_outline(&page.toc));
    }
    println!();
    print!("{}", page.html);
}
