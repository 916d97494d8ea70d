//! Configuration for settingsquill.
//!
//! This module provides the options that control how settings files are
//! written, with sensible defaults and support for serialization via serde.
//! Configuration can be loaded from TOML files.
//!
//! # Example
//!
//! ```
//! use settingsquill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert!(config.pretty);
//! assert_eq!(config.indent_size, 4);
//!
//! // Create custom configuration
//! let custom = Config {
//!     pretty: false,
//!     ..Config::default()
//! };
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for saving settings documents.
///
/// # Fields
///
/// * `pretty` - Pretty-print JSON on save (default: true)
/// * `indent_size` - Spaces per indentation level when pretty-printing (default: 4)
/// * `create_backup` - Copy an existing file to `.bak` before overwriting it (default: false)
/// * `file_name` - File name of the aggregate settings file (default: "settings.json")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pretty-print JSON on save
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// File name of the aggregate settings file
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_pretty() -> bool {
    true
}

fn default_indent_size() -> usize {
    4
}

fn default_file_name() -> String {
    "settings.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent_size: default_indent_size(),
            create_backup: false,
            file_name: default_file_name(),
        }
    }
}

impl Config {
    /// Returns the path to the config file for `app_name`.
    ///
    /// Uses `<config dir>/<app_name>/settingsquill.toml`.
    pub fn config_path(app_name: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push(app_name);
            path.push("settingsquill.toml");
            path
        })
    }

    /// Loads configuration from a TOML file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be parsed.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "ignoring invalid config file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to a TOML file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}
