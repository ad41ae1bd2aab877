//! Classification value types
//!
//! A [`FileKind`] pairs a coarse [`Category`] with a fine-grained label such
//! as "MP3 Audio". Categories are an open set: the well-known ones are enum
//! variants, anything synthesized from a MIME top-level type at runtime
//! lands in [`Category::Derived`].

use serde::{Serialize, Serializer};
use std::fmt;

/// Coarse grouping of a filesystem entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Directory,
    Document,
    Archive,
    Audio,
    Video,
    Program,
    Other,
    /// Title-cased MIME top-level type with no explicit table (e.g. "Image")
    Derived(String),
}

impl Category {
    /// Human-readable name, also used as the serialized key
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Directory => "Directory",
            Self::Document => "Document",
            Self::Archive => "Archive",
            Self::Audio => "Audio",
            Self::Video => "Video",
            Self::Program => "Program",
            Self::Other => "Other",
            Self::Derived(name) => name,
        }
    }

    /// Map a synthesized category name onto the category set
    ///
    /// Known names resolve to their variant so that e.g. "Other" never
    /// exists twice. Two names are refused and become [`Category::Other`]:
    /// the empty string (a category is never empty) and "Directory", which
    /// is reserved for real directories and never holds typed files.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "" | "Directory" => Self::Other,
            "Document" => Self::Document,
            "Archive" => Self::Archive,
            "Audio" => Self::Audio,
            "Video" => Self::Video,
            "Program" => Self::Program,
            "Other" => Self::Other,
            derived => Self::Derived(derived.to_string()),
        }
    }

    /// True for the one category whose entries are kept as a flat list
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Resolved classification of a file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileKind {
    pub category: Category,
    pub label: String,
}

impl FileKind {
    /// Create a new `FileKind`
    #[must_use]
    pub fn new(category: Category, label: impl Into<String>) -> Self {
        Self {
            category,
            label: label.into(),
        }
    }

    /// Catch-all classification carrying the raw extension or subtype
    #[must_use]
    pub fn other(raw: impl Into<String>) -> Self {
        Self::new(Category::Other, raw)
    }

    /// Whether this kind can be filed under a label in a grouped result
    #[must_use]
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.category, self.label)
    }
}
