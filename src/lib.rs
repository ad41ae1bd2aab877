//! Dirkind - classify the contents of a directory by file type
//!
//! Scans a single directory, skips hidden entries and sorts every file
//! into a category and type label ("MP3 Audio" under "Audio"), producing
//! a grouped structure ready for display.
//!
//! ```no_run
//! use dirkind::group::process_directory;
//!
//! let grouped = process_directory(".")?;
//! for (category, bucket) in &grouped {
//!     println!("{category}: {} entries", bucket.len());
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

use thiserror::Error;

pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod group;
pub mod output;
pub mod registry;
pub mod scan;
pub mod size;

#[cfg(test)]
pub mod testing;

pub use classify::{Classifier, MimeResolver, MimeSource};
pub use group::{process_directory, DirectoryProcessor, FileEntry, GroupedBucket, GroupedResult};
pub use registry::{Category, FileKind};
pub use scan::count_files_in_dir;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DirkindError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
