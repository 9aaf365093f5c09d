//! CLI entry point for devfolio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devfolio::commands::{self, list::ListOptions};
use devfolio::content::ContentType;
use devfolio::{ContentError, Site};

#[derive(Parser)]
#[command(name = "devfolio")]
#[command(author = "Nate Stephens")]
#[command(version)]
#[command(about = "Index, validate and inspect the content of a markdown blog", long_about = None)]
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
    /// List site content
    #[command(alias = "ls")]
    List {
        /// What to list (posts, projects, topics, recent, slugs)
        #[arg(default_value = "posts")]
        what: String,

        /// Only posts in this category (articles, notes, snippets)
        #[arg(long)]
        category: Option<String>,

        /// Only posts with this topic
        #[arg(short, long)]
        topic: Option<String>,

        /// Content type for `slugs` (post, project)
        #[arg(short, long)]
        kind: Option<ContentType>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post or project
    Show {
        /// Content type (post, project)
        r#type: ContentType,

        slug: String,

        /// Include the rendered HTML
        #[arg(long)]
        html: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the table of contents of a post
    Toc {
        slug: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate all content
    Check,

    /// List every page path of the site
    Routes,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "devfolio=debug,info"
    } else {
        "devfolio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ContentError>() {
            Some(ContentError::NotFound { content_type, slug }) => {
                tracing::debug!("No {} with slug '{}'", content_type, slug);
                eprintln!("Sorry, can't find that page");
                ExitCode::from(2)
            }
            _ => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            what,
            category,
            topic,
            kind,
            json,
        } => {
            let site = Site::new(&base_dir)?;
            let options = ListOptions {
                category: category.as_deref().map(commands::parse_category).transpose()?,
                topic: topic.as_deref().map(commands::parse_topic).transpose()?,
                content_type: kind,
                json,
            };
            commands::list::run(&site, &what, &options).await?;
        }

        Commands::Show {
            r#type,
            slug,
            html,
            json,
        } => {
            let site = Site::new(&base_dir)?;
            commands::show::run(&site, r#type, &slug, html, json).await?;
        }

        Commands::Toc { slug, json } => {
            let site = Site::new(&base_dir)?;
            commands::toc::run(&site, &slug, json).await?;
        }

        Commands::Check => {
            let site = Site::new(&base_dir)?;
            commands::check::run(&site).await?;
        }

        Commands::Routes => {
            let site = Site::new(&base_dir)?;
            commands::routes::run(&site).await?;
        }

        Commands::Version => {
            println!("devfolio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
