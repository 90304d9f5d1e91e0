//! Configuration system for slashpick.
//!
//! Settings are read from a TOML file and can be overridden from the
//! command line. Every field has a default, so a missing or partial file is
//! fine.
//!
//! # Example
//!
//! ```
//! use slashpick::config::Config;
//! use slashpick::query::Truthiness;
//!
//! let config = Config::default();
//! assert_eq!(config.truthiness, Truthiness::Loose);
//! assert!(config.pretty);
//!
//! let custom = Config {
//!     truthiness: Truthiness::Strict,
//!     ..Config::default()
//! };
//! ```

use crate::query::Truthiness;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for slashpick.
///
/// # Fields
///
/// * `truthiness` - Which values are dropped while distributing over arrays (default: loose)
/// * `pretty` - Pretty-print JSON output (default: true)
/// * `indent_size` - Spaces per indentation level when pretty-printing (default: 2)
/// * `store_dir` - Directory searched for documents fetched by name (default: none)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Filtering policy for empty values
    #[serde(default)]
    pub truthiness: Truthiness,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Default document store directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,
}

fn default_pretty() -> bool {
    true
}

fn default_indent_size() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            truthiness: Truthiness::default(),
            pretty: default_pretty(),
            indent_size: default_indent_size(),
            store_dir: None,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/slashpick/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("slashpick");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
