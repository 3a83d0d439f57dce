//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse a directory of markdown articles.
#[derive(Parser, Debug)]
#[command(name = "inkpost", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Content directory (overrides the config file)
    #[arg(short = 'd', long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all articles, newest first
    List,
    /// List articles in a category
    Category {
        /// Category name (case-insensitive)
        name: String,
    },
    /// List articles with a tag
    Tag {
        /// Tag name (case-insensitive)
        name: String,
    },
    /// Show one article as sanitized HTML, with related articles
    Show {
        /// Article slug
        slug: String,
    },
    /// List articles related to one article
    Related {
        /// Article slug
        slug: String,
        /// Maximum number of related articles
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List categories with article counts
    Categories,
    /// List tags with article counts
    Tags,
}
