//! # inkpost-cli
//!
//! Command-line front end for an Inkpost content directory:
//! - listing articles, by category or tag
//! - showing one article as sanitized HTML with related articles
//! - category and tag counts
//!
//! The `inkpost` binary wires these together; the pieces live here so they
//! can be tested without spawning a process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command};
pub use commands::{run, OutputOptions};
pub use error::{Error, Result};

use inkpost_core::InkpostConfig;

/// Load configuration for `cli`, applying command-line overrides.
pub fn resolve_config(cli: &Cli) -> inkpost_core::Result<InkpostConfig> {
    let mut config = InkpostConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.content_dir {
        config.content.dir = dir.clone();
    }
    Ok(config)
}
