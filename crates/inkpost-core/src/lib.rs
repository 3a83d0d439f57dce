//! Inkpost Core: shared types, errors, configuration, and utilities.
//!
//! This crate provides the foundational types used across all Inkpost crates.
//! It has no internal Inkpost dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: TOML configuration for content discovery and queries
//! - [`util`]: Slug derivation from source names

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{ContentConfig, InkpostConfig, LoggingConfig, QueryConfig};
pub use error::{Error, Result};
pub use util::ids::slug_from_name;
