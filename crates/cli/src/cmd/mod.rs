pub mod doctor;
pub mod output;
pub mod posts;
pub mod rss;
pub mod show;
pub mod slugs;
pub mod tags;
pub mod toc;
pub mod tree;

use mdsite_core::config::loader::ConfigLoader;
use mdsite_core::config::ResolvedConfig;
use mdsite_core::notes::NoteError;
use std::path::Path;

use crate::logging;

/// Exit status for a slug that names no note.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Load the config and start logging, or exit with status 1.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            logging::init(&rc);
            rc
        }
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}

/// Report a failed note lookup and exit: 2 for unknown slugs, 1 otherwise.
pub fn exit_lookup_error(slug: &str, err: &NoteError) -> ! {
    if err.is_not_found() {
        eprintln!("Note not found: {slug}");
        std::process::exit(EXIT_NOT_FOUND);
    }
    eprintln!("Failed to load note {slug}: {err}");
    std::process::exit(1);
}
