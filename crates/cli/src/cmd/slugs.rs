use std::path::Path;

use super::load_config;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let repo = load_config(config, profile).repository();

    let mut slugs = repo.list_all_slugs();
    slugs.sort();
    for slug in slugs {
        println!("{slug}");
    }
}
