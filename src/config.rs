//! Optional TOML configuration.
//!
//! ```toml
//! # ~/.config/descartes-square/config.toml
//! language = "ru"
//! ```
//!
//! A missing default file is not an error. A broken default file is
//! logged and ignored. An explicitly requested file must load.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::Language;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Display language at startup.
    pub language: Option<Language>,
}

impl Config {
    /// Parse config text. `path` is only used for error context.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a specific file. Any failure is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load the default file if present, falling back to defaults.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_or_default(&path),
            None => Config::default(),
        }
    }

    /// Load `path` if present. Missing or broken files yield defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Config::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Err(err) => {
                tracing::warn!("{err}; using defaults");
                Config::default()
            }
        }
    }

    /// Default config location.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("descartes-square").join("config.toml"))
    }

    /// Startup language: CLI flag, then config, then English.
    pub fn resolve_language(&self, cli: Option<Language>) -> Language {
        cli.or(self.language).unwrap_or_default()
    }
}
