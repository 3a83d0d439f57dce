//! Inkpost CLI
//!
//! Browse a directory of markdown articles from the command line.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use inkpost_cli::{logging, resolve_config, run, Cli, OutputOptions};
use inkpost_index::{ContentIndex, DirectorySource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli).context("Failed to load configuration")?;

    logging::init(&config.logging.level, cli.verbose);
    tracing::debug!(?config, "Resolved configuration");

    let index = ContentIndex::new(DirectorySource::from_config(&config.content));
    match index.load().await {
        Ok(stats) => tracing::debug!(?stats, "Index ready"),
        // Queries still run against the empty index.
        Err(e) => log::error!("Failed to load content: {e}"),
    }

    let options = OutputOptions {
        json: cli.json,
        related_limit: config.query.related_limit,
    };
    let stdout = std::io::stdout();
    run(&cli.command, &index, options, &mut stdout.lock())?;
    Ok(())
}
