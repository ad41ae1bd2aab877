//! Grouped scan results
//!
//! A [`GroupedResult`] maps each [`Category`] to a [`GroupedBucket`]. The
//! bucket shape follows the category: `Directory` always holds a flat
//! list, every other category a label → entries map. Entry lists keep
//! insertion order; category and label iteration order is unspecified.

use crate::registry::{Category, FileKind};
use serde::Serialize;
use std::collections::HashMap;

/// One scanned filesystem entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub is_dir: bool,
    /// `None` for directories
    pub kind: Option<FileKind>,
    /// Empty for directories and extensionless files
    pub extension: String,
    /// Human-readable size, empty for directories
    pub size: String,
}

impl FileEntry {
    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            kind: None,
            extension: String::new(),
            size: String::new(),
        }
    }

    #[must_use]
    pub fn file(
        name: impl Into<String>,
        kind: FileKind,
        extension: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            kind: Some(kind),
            extension: extension.into(),
            size: size.into(),
        }
    }
}

/// Entries of a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GroupedBucket {
    /// Flat list, used only by [`Category::Directory`]
    Directories(Vec<FileEntry>),
    /// Entries grouped by type label
    Typed(HashMap<String, Vec<FileEntry>>),
}

impl GroupedBucket {
    /// Number of entries in the bucket
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Directories(entries) => entries.len(),
            Self::Typed(labels) => labels.values().map(Vec::len).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Category → bucket mapping produced by one directory scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedResult {
    buckets: HashMap<Category, GroupedBucket>,
}

impl GroupedResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory to the Directory list
    pub fn insert_directory(&mut self, entry: FileEntry) {
        if let GroupedBucket::Directories(list) = self
            .buckets
            .entry(Category::Directory)
            .or_insert_with(|| GroupedBucket::Directories(Vec::new()))
        {
            list.push(entry);
        }
    }

    /// File an entry under its kind's category and label
    ///
    /// Returns `false`, leaving the result untouched, when the kind has an
    /// empty label or names the Directory category.
    pub fn insert_file(&mut self, kind: &FileKind, entry: FileEntry) -> bool {
        if !kind.has_label() || kind.category.is_directory() {
            return false;
        }
        match self
            .buckets
            .entry(kind.category.clone())
            .or_insert_with(|| GroupedBucket::Typed(HashMap::new()))
        {
            GroupedBucket::Typed(labels) => {
                labels.entry(kind.label.clone()).or_default().push(entry);
                true
            }
            GroupedBucket::Directories(_) => false,
        }
    }

    #[must_use]
    pub fn get(&self, category: &Category) -> Option<&GroupedBucket> {
        self.buckets.get(category)
    }

    /// Directories in scan order (empty if there were none)
    #[must_use]
    pub fn directories(&self) -> &[FileEntry] {
        match self.buckets.get(&Category::Directory) {
            Some(GroupedBucket::Directories(list)) => list,
            _ => &[],
        }
    }

    /// Label map of a non-directory category
    #[must_use]
    pub fn labels(&self, category: &Category) -> Option<&HashMap<String, Vec<FileEntry>>> {
        match self.buckets.get(category) {
            Some(GroupedBucket::Typed(labels)) => Some(labels),
            _ => None,
        }
    }

    /// Entries filed under a category and label
    #[must_use]
    pub fn entries(&self, category: &Category, label: &str) -> Option<&[FileEntry]> {
        self.labels(category)
            .and_then(|labels| labels.get(label))
            .map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.buckets.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &GroupedBucket)> {
        self.buckets.iter()
    }

    /// Number of categories present
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total entries across all buckets
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(GroupedBucket::len).sum()
    }
}

impl<'a> IntoIterator for &'a GroupedResult {
    type Item = (&'a Category, &'a GroupedBucket);
    type IntoIter = std::collections::hash_map::Iter<'a, Category, GroupedBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
