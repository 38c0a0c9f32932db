use mdsite_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            logging::init(&rc);
            let repo = rc.repository();

            println!("OK   mdsite doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("site_root: {}", rc.site_root.display());
            println!("notes_dir: {}", repo.root().display());
            println!("covers_dir: {}", rc.covers_dir.display());
            println!("feed.site_url: {}", rc.feed.site_url);

            if repo.root().is_dir() {
                println!("notes: {}", repo.list_all_slugs().len());
            } else {
                println!("WARN notes_dir does not exist");
            }
        }
        Err(e) => {
            println!("FAIL mdsite doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
