//! CLI entry point for mdxblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdxblog")]
#[command(version)]
#[command(about = "Blog content repository for MDX posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts, newest first
    #[command(alias = "ls")]
    List,

    /// Show a single post by slug
    Show {
        /// Post slug
        slug: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,
    },

    /// Print the assistant tool payload for the most recent posts
    Recent {
        /// Number of posts to return; omitted returns the single most
        /// recent post
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Create a new post file
    New {
        /// Title of the new post
        title: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdxblog=debug,info"
    } else {
        "mdxblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let blog = mdxblog::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List => {
            mdxblog::commands::list::run(&blog)?;
        }

        Commands::Show { slug, html } => {
            mdxblog::commands::show::run(&blog, &slug, html)?;
        }

        Commands::Recent { limit } => {
            mdxblog::commands::recent::run(&blog, limit)?;
        }

        Commands::New { title } => {
            tracing::info!("Creating new post: {}", title);
            mdxblog::commands::new::run(&blog, &title)?;
        }
    }

    Ok(())
}
