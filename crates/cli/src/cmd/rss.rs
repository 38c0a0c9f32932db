use mdsite_core::feed::render_rss;
use mdsite_core::posts::list_posts;
use std::path::Path;

use super::load_config;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = load_config(config, profile);
    let posts = list_posts(&rc.repository());

    tracing::debug!(posts = posts.len(), "rendering feed");
    print!("{}", render_rss(&posts, &rc.feed));
}
