use mdsite_core::posts::{list_posts, posts_by_tag};
use std::path::Path;

use super::load_config;
use super::output::{print_json, print_posts_table};
use crate::PostsArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: PostsArgs) {
    let repo = load_config(config, profile).repository();

    let mut posts = list_posts(&repo);
    if let Some(tag) = args.tag.as_deref() {
        posts = posts_by_tag(&posts, tag);
    }

    if args.json {
        print_json(&posts);
    } else {
        print_posts_table(&posts);
    }
}
