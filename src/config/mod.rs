//! Configuration module for dirkind
//!
//! Manages user preferences: which MIME resolver to use, size units,
//! output format and per-extension MIME overrides.
//! Configuration is stored in the user's config directory.

use clap::ValueEnum;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::{Classifier, MimeSource, normalize_extension};
use crate::cli::Cli;
use crate::size::SizeUnits;

/// How grouped results are printed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented, coloured tree
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DirkindConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Standard MIME resolver backing classification
    #[serde(default)]
    pub mime_source: MimeSource,

    /// Units used for displayed file sizes
    #[serde(default)]
    pub size_units: SizeUnits,

    /// Default output format for `show`
    #[serde(default)]
    pub output: OutputFormat,

    /// Extension → MIME mappings consulted before the standard resolver
    #[serde(default)]
    pub mime_overrides: HashMap<String, String>,
}

impl DirkindConfig {
    /// Keys accepted by `config get` / `config set`
    pub const KEYS: &'static [&'static str] = &["quiet", "mime_source", "size_units", "output"];

    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("dirkind").join("config.toml"))
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let mut config: Self = settings.try_deserialize()?;
        config.mime_overrides = config
            .mime_overrides
            .into_iter()
            .map(|(ext, mime)| (normalize_extension(&ext), mime))
            .collect();
        Ok(config)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Read a setting as a display string
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "quiet" => Some(self.quiet.to_string()),
            "mime_source" => Some(self.mime_source.to_string()),
            "size_units" => Some(self.size_units.to_string()),
            "output" => Some(self.output.to_string()),
            _ => None,
        }
    }

    /// Update a setting from its string form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or unparsable values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |e: String| ConfigError::Message(format!("Invalid value for {key}: {e}"));
        match key {
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| invalid(format!("'{value}'. Use 'true' or 'false'")))?;
            }
            "mime_source" => self.mime_source = value.parse().map_err(invalid)?,
            "size_units" => self.size_units = value.parse().map_err(invalid)?,
            "output" => self.output = value.parse().map_err(invalid)?,
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    Self::KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Build the classifier described by this configuration
    #[must_use]
    pub fn classifier(&self) -> Classifier {
        Classifier::with_overrides(self.mime_source, &self.mime_overrides)
    }

    /// Apply command-line flags on top of the stored settings
    ///
    /// The result is meant for the current run only and is never saved.
    #[must_use]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(source) = cli.mime_source {
            self.mime_source = source;
        }
        if cli.binary {
            self.size_units = SizeUnits::Binary;
        }
        self.quiet |= cli.quiet;
        self
    }
}
