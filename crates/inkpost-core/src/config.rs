//! Configuration for content discovery, queries, and logging.
//!
//! Configuration lives in a TOML file. Every field has a default, so an empty
//! or missing file yields a usable configuration:
//!
//! ```toml
//! [content]
//! dir = "content/posts"
//! extensions = ["md"]
//! recursive = false
//!
//! [query]
//! related_limit = 3
//!
//! [logging]
//! level = "info"
//! ```
//!
//! # Resolution order
//!
//! 1. An explicit path (e.g. `--config`)
//! 2. The `INKPOST_CONFIG` environment variable
//! 3. `inkpost.toml` in the working directory, if it exists
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "INKPOST_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "inkpost.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InkpostConfig {
    /// Where content items come from.
    pub content: ContentConfig,
    /// Query defaults.
    pub query: QueryConfig,
    /// Logging defaults.
    pub logging: LoggingConfig,
}

/// Content discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding the content files.
    pub dir: PathBuf,
    /// File extensions treated as content (without dots, case-insensitive).
    pub extensions: Vec<String>,
    /// Descend into subdirectories.
    pub recursive: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content/posts"),
            extensions: vec!["md".to_string()],
            recursive: false,
        }
    }
}

/// Query defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// How many related items a detail view carries.
    pub related_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { related_limit: 3 }
    }
}

/// Logging defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl InkpostConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config TOML: {e}")))
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Resolve the config file to use, if any.
    ///
    /// An explicit path is returned even when it does not exist, so that
    /// loading reports the missing file instead of silently using defaults.
    pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Load configuration following the resolution order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
