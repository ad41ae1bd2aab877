//! Directory aggregation
//!
//! Scans one directory, classifies every visible file and files the result
//! into a [`GroupedResult`]. A failed listing aborts before anything is
//! classified; there are no partial results.

mod types;

pub use types::{FileEntry, GroupedBucket, GroupedResult};

use crate::classify::{extension_of, Classifier};
use crate::scan::{DirLister, FsLister, Scanner};
use crate::size::{humanize, SizeUnits};
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Scanner, classifier and size formatting bundled for one-shot processing
#[derive(Debug, Default)]
pub struct DirectoryProcessor<L = FsLister> {
    scanner: Scanner<L>,
    classifier: Classifier,
    size_units: SizeUnits,
}

impl DirectoryProcessor<FsLister> {
    /// Processor over the local filesystem
    #[must_use]
    pub fn new(classifier: Classifier) -> Self {
        Self::with_scanner(Scanner::new(), classifier)
    }
}

impl<L: DirLister> DirectoryProcessor<L> {
    #[must_use]
    pub fn with_scanner(scanner: Scanner<L>, classifier: Classifier) -> Self {
        Self {
            scanner,
            classifier,
            size_units: SizeUnits::default(),
        }
    }

    /// Choose decimal or binary units for entry sizes
    #[must_use]
    pub const fn size_units(mut self, units: SizeUnits) -> Self {
        self.size_units = units;
        self
    }

    /// Scan `path` and group its visible entries
    ///
    /// # Errors
    ///
    /// Returns the listing's `io::Error` unchanged.
    pub fn process(&self, path: &Path) -> io::Result<GroupedResult> {
        let entries = self.scanner.scan(path)?;
        let visible = entries.len();
        let mut result = GroupedResult::new();

        for entry in entries {
            if entry.is_dir {
                result.insert_directory(FileEntry::directory(entry.name));
                continue;
            }

            let kind = self.classifier.classify(&entry.clean_name);
            let file = FileEntry::file(
                entry.name.as_str(),
                kind.clone(),
                extension_of(&entry.name),
                humanize(entry.size, self.size_units),
            );
            if !result.insert_file(&kind, file) {
                debug!(name = %entry.name, "no type label, leaving out of grouped result");
            }
        }

        info!(
            path = %path.display(),
            visible,
            categories = result.len(),
            "processed directory"
        );
        Ok(result)
    }

    /// Count visible entries without classifying them
    ///
    /// # Errors
    ///
    /// Returns the listing's `io::Error` unchanged.
    pub fn count(&self, path: &Path) -> io::Result<u64> {
        self.scanner.count(path)
    }
}

/// Group a local directory using the default classifier
///
/// # Errors
///
/// Returns the `io::Error` from reading the directory.
pub fn process_directory(path: impl AsRef<Path>) -> io::Result<GroupedResult> {
    DirectoryProcessor::new(Classifier::default()).process(path.as_ref())
}
