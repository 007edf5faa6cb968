//! CLI entry point for dev-chars

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dev_chars::commands::{check, fix};
use dev_chars::DevChars;

#[derive(Parser)]
#[command(name = "dev-chars")]
#[command(version)]
#[command(about = "Fix curly quotes, absolute blog URLs and product name casing in the latest post", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Read posts from this directory instead of <cwd>/_source/_posts
    #[arg(long, global = true)]
    posts_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report issues in the latest post and fix them after confirmation
    Fix {
        /// Answer yes to the prompt
        #[arg(short, long)]
        yes: bool,

        /// Only report, never prompt or write
        #[arg(long)]
        dry_run: bool,
    },

    /// Report issues in the latest post without changing it
    Check,

    /// Display version information
    Version,
}

/// Resolve the site and its posts directory
fn load_site(cwd: Option<PathBuf>, posts_dir: Option<PathBuf>) -> Result<DevChars> {
    // Determine base directory
    let base_dir = match cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };

    let app = DevChars::new(&base_dir)?;
    Ok(match posts_dir {
        Some(dir) => app.with_posts_dir(dir),
        None => app,
    })
}

fn main() -> Result<()> {
    let Cli {
        cwd,
        posts_dir,
        debug,
        command,
    } = Cli::parse();

    // Initialize logging
    let filter = if debug {
        "dev_chars=debug,info"
    } else {
        "dev_chars=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let command = command.unwrap_or(Commands::Fix {
        yes: false,
        dry_run: false,
    });

    match command {
        Commands::Fix { yes, dry_run } => {
            let app = load_site(cwd, posts_dir)?;
            let options = fix::FixOptions {
                dry_run,
                assume_yes: yes,
            };
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            let outcome = fix::run(&app, options, &mut input, &mut output)?;
            tracing::debug!("Finished with {:?}", outcome);
        }

        Commands::Check => {
            let app = load_site(cwd, posts_dir)?;
            check::run(&app, &mut io::stdout().lock())?;
        }

        Commands::Version => {
            println!("dev-chars version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
