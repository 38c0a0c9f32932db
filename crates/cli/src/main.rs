mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdsite", version, about = "Browse and publish a directory of markdown notes")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List the slug of every note
    Slugs,

    /// Print the navigation tree
    Tree(FormatArgs),

    /// Show a note: metadata, table of contents and rendered HTML
    Show(NoteArgs),

    /// Print the table of contents of a note
    Toc(NoteArgs),

    /// List published posts, newest first
    Posts(PostsArgs),

    /// List tags with post counts
    Tags(FormatArgs),

    /// Print the RSS feed
    Rss,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Note slug, e.g. "Go/generics"
    pub slug: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct PostsArgs {
    /// Only posts carrying this tag (case-insensitive)
    #[arg(long)]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Slugs => cmd::slugs::run(config, profile),
        Commands::Tree(args) => cmd::tree::run(config, profile, args.json),
        Commands::Show(args) => cmd::show::run(config, profile, &args.slug, args.json),
        Commands::Toc(args) => cmd::toc::run(config, profile, &args.slug, args.json),
        Commands::Posts(args) => cmd::posts::run(config, profile, args),
        Commands::Tags(args) => cmd::tags::run(config, profile, args.json),
        Commands::Rss => cmd::rss::run(config, profile),
    }
}
