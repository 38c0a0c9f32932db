use mdsite_core::posts::{list_posts, tag_counts};
use std::path::Path;

use super::load_config;
use super::output::{TagOutput, print_json, print_tags_table};

pub fn run(config: Option<&Path>, profile: Option<&str>, json: bool) {
    let repo = load_config(config, profile).repository();
    let counts = tag_counts(&list_posts(&repo));

    if json {
        let out: Vec<TagOutput> =
            counts.iter().map(|(tag, count)| TagOutput { tag, count: *count }).collect();
        print_json(&out);
    } else {
        print_tags_table(&counts);
    }
}
