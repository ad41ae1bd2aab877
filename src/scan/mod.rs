//! Single-directory scanning
//!
//! Lists one directory (never recursing), drops hidden entries and hands
//! back what is left in listing order. The listing itself sits behind the
//! [`DirLister`] trait; [`FsLister`] is the real filesystem.
//!
//! Listing failures (missing path, permission denied, not a directory) are
//! returned as the original `std::io::Error`, untouched.

use std::fs;
use std::io;
use std::path::{Component, Path, MAIN_SEPARATOR_STR};
use tracing::debug;

/// One entry as reported by a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
}

impl RawEntry {
    #[must_use]
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            size,
        }
    }

    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            size: 0,
        }
    }
}

/// A visible entry that survived hidden-name filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    /// Name exactly as listed
    pub name: String,
    /// Base component of `name`, used for classification
    pub clean_name: String,
    pub is_dir: bool,
    pub size: u64,
}

/// Capability that lists the immediate children of a directory
pub trait DirLister {
    /// # Errors
    ///
    /// Returns the underlying `io::Error` when the directory cannot be read.
    fn list(&self, path: &Path) -> io::Result<Vec<RawEntry>>;
}

/// Lists directories on the local filesystem
///
/// Metadata is read without following symlinks, so a link to a directory
/// counts as a file. Entries come back sorted by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            entries.push(RawEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: metadata.is_dir(),
                size: metadata.len(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Reduce a listed name to its cleaned base component
///
/// Listings should already return base names; this also copes with stray
/// separators and `.`/`..` segments.
#[must_use]
pub fn clean_name(name: &str) -> String {
    match Path::new(name).components().next_back() {
        Some(Component::Normal(base)) => base.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::RootDir | Component::Prefix(_)) => MAIN_SEPARATOR_STR.to_string(),
        Some(Component::CurDir) | None => ".".to_string(),
    }
}

/// Hidden entries are those whose cleaned name starts with a dot
#[must_use]
pub fn is_hidden(clean_name: &str) -> bool {
    clean_name.starts_with('.')
}

/// Lists a directory and filters out hidden entries
#[derive(Debug, Clone, Default)]
pub struct Scanner<L = FsLister> {
    lister: L,
}

impl Scanner<FsLister> {
    #[must_use]
    pub const fn new() -> Self {
        Self { lister: FsLister }
    }
}

impl<L: DirLister> Scanner<L> {
    /// Scanner over a custom listing capability
    #[must_use]
    pub const fn with_lister(lister: L) -> Self {
        Self { lister }
    }

    /// Visible entries of `path`, in listing order
    ///
    /// # Errors
    ///
    /// Returns the lister's `io::Error` unchanged.
    pub fn scan(&self, path: &Path) -> io::Result<Vec<ScannedEntry>> {
        let raw = self.lister.list(path)?;
        Ok(raw
            .into_iter()
            .filter_map(|entry| {
                let clean_name = clean_name(&entry.name);
                if is_hidden(&clean_name) {
                    debug!("Skipping {clean_name}");
                    return None;
                }
                Some(ScannedEntry {
                    name: entry.name,
                    clean_name,
                    is_dir: entry.is_dir,
                    size: entry.size,
                })
            })
            .collect())
    }

    /// Number of visible entries, directories and files alike
    ///
    /// Does not classify anything.
    ///
    /// # Errors
    ///
    /// Returns the lister's `io::Error` unchanged.
    pub fn count(&self, path: &Path) -> io::Result<u64> {
        let raw = self.lister.list(path)?;
        let count = raw
            .iter()
            .filter(|entry| !is_hidden(&clean_name(&entry.name)))
            .count();
        Ok(count as u64)
    }
}

/// Count visible entries of a directory on the local filesystem
///
/// # Errors
///
/// Returns the `io::Error` from reading the directory.
pub fn count_files_in_dir(path: impl AsRef<Path>) -> io::Result<u64> {
    Scanner::new().count(path.as_ref())
}
