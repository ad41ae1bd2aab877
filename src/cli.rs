//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for dirkind using the `clap` crate.
//!
//! # Commands
//!
//! - **show**: Group a directory's entries by category and type (default)
//! - **count**: Count visible entries without classifying them
//! - **classify**: Classify file names without touching the filesystem
//! - **config**: Read or change persistent settings
//!
//! # Examples
//!
//! ```
//! use dirkind::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["dirkind", "count", "/tmp"]);
//! assert!(matches!(cli.get_command(), Commands::Count { .. }));
//! ```

use crate::classify::MimeSource;
use crate::config::{DirkindConfig, OutputFormat};
use clap::{ArgAction, Parser, Subcommand};
use config::ConfigError;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "dirkind")]
#[command(about = "Group the files of a directory by type", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// MIME resolver to use (overrides config)
    #[arg(long = "mime-source", value_enum, global = true)]
    pub mime_source: Option<MimeSource>,

    /// Show sizes in binary units (KiB, MiB, ...)
    #[arg(long = "binary", global = true)]
    pub binary: bool,

    /// Use this config file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Group a directory's entries by category and type (default)
    #[command(visible_alias = "s")]
    Show {
        /// Directory to scan
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,

        /// Output format (overrides config)
        #[arg(short = 'o', long = "output", value_enum)]
        output: Option<OutputFormat>,

        /// Shorthand for --output json
        #[arg(long = "json", conflicts_with = "output")]
        json: bool,
    },

    /// Count visible entries in a directory
    #[command(visible_alias = "c")]
    Count {
        /// Directory to count
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
    },

    /// Classify file names without reading the filesystem
    Classify {
        /// File names to classify
        #[arg(value_name = "FILE", required = true, num_args = 1..)]
        files: Vec<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., mime_source=builtin)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the config file location
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse an explicit argument list (first item is the binary name)
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to `show .` if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Show {
            path: PathBuf::from("."),
            output: None,
            json: false,
        })
    }

    /// Config file for this run: `--config` if given, else the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_file {
            Some(path) => Ok(path.clone()),
            None => DirkindConfig::config_path(),
        }
    }

    /// Log filter directive implied by `--quiet` / `--verbose`
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        }
    }
}

impl Commands {
    /// Resolve the output format for `show`, preferring CLI flags over config
    #[must_use]
    pub fn output_format(&self, configured: OutputFormat) -> OutputFormat {
        match self {
            Self::Show { json: true, .. } => OutputFormat::Json,
            Self::Show {
                output: Some(format),
                ..
            } => *format,
            _ => configured,
        }
    }
}
