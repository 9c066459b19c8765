//! Configuration for the loxc driver.
//!
//! Settings come from an optional `loxc.toml`. Every field has a default,
//! so an empty file (or no file) is a valid configuration. Command-line
//! flags are applied on top in `main`.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DriverError, Result};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "loxc.toml";

/// How the token stream is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND lexeme literal` line per token.
    #[default]
    Text,
    /// A JSON array of token objects.
    Json,
}

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Token output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Render the offending source line under each diagnostic.
    #[serde(default = "default_true")]
    pub show_snippets: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            format: OutputFormat::default(),
            show_snippets: true,
        }
    }
}

impl Config {
    /// Loads `loxc.toml` from the current directory, or the defaults if
    /// there is none.
    pub fn load() -> Result<Self> {
        let dir = std::env::current_dir()?;
        Self::load_from_dir(&dir)
    }

    /// Loads `loxc.toml` from `dir`, or the defaults if there is none.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        match Self::find_config_file(dir) {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!(dir = %dir.display(), "no config file, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Loads configuration from a specific file, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            DriverError::Config(format!(
                "Failed to read configuration {}: {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    fn find_config_file(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.show_snippets);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = Config::from_toml_str(
            "verbose = true\nformat = \"json\"\nshow_snippets = false\n",
        )
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.show_snippets);
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::from_toml_str("format = \"json\"").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.show_snippets);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let err = Config::from_toml_str("format = \"yaml\"").unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: Failed to parse configuration"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config {
            verbose: true,
            format: OutputFormat::Json,
            show_snippets: false,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load_from_dir(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_dir_with_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "show_snippets = false").unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap();
        assert!(!config.show_snippets);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_load_from_unreadable_path_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from_path(dir.path()).unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
        assert!(err.to_string().contains("Failed to read configuration"));
    }
}
