//! File classification
//!
//! Resolves a file name to a [`FileKind`] through a fixed fallback chain:
//!
//! 1. Extract the extension (last `.` of the base name, dot included).
//! 2. Ask the [`MimeResolver`] for a MIME type.
//! 3. No MIME type: classify through the bespoke extension table.
//! 4. MIME type found: classify through the MIME table.
//!
//! MIME resolution always goes first, so an extension known to both the
//! resolver and the extension table is classified by MIME. Every path ends
//! in a [`FileKind`]; classification never fails.

mod resolver;

pub use resolver::{
    normalize_extension, BuiltinResolver, GuessResolver, MimeResolver, MimeSource,
    ResolverChain, StaticResolver,
};

use crate::registry::{self, FileKind};
use std::collections::HashMap;
use tracing::trace;

/// Maps file names to file kinds using a pluggable MIME resolver
pub struct Classifier {
    resolver: Box<dyn MimeResolver>,
}

impl Classifier {
    /// Create a classifier around an arbitrary resolver
    #[must_use]
    pub fn new(resolver: impl MimeResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    /// Create a classifier backed by one of the standard resolvers
    #[must_use]
    pub fn from_source(source: MimeSource) -> Self {
        Self {
            resolver: source.resolver(),
        }
    }

    /// Standard resolver with user overrides consulted first
    #[must_use]
    pub fn with_overrides(source: MimeSource, overrides: &HashMap<String, String>) -> Self {
        if overrides.is_empty() {
            return Self::from_source(source);
        }
        let chain = ResolverChain::new()
            .then(overrides.iter().collect::<StaticResolver>())
            .then_boxed(source.resolver());
        Self::new(chain)
    }

    /// Classify a file by name
    #[must_use]
    pub fn classify(&self, file_name: &str) -> FileKind {
        let extension = extension_of(file_name);
        match self.resolver.resolve(extension) {
            Some(mime) => {
                trace!(file_name, %mime, "classifying by MIME type");
                registry::lookup_mime(&mime)
            }
            None => {
                trace!(file_name, extension, "classifying by extension");
                registry::lookup_extension(extension)
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_source(MimeSource::default())
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier").finish_non_exhaustive()
    }
}

/// Extension of the final path element, leading dot included
///
/// Empty when the base name has no dot. Only the last dot counts, so
/// `archive.tar.gz` yields `.gz`.
#[must_use]
pub fn extension_of(file_name: &str) -> &str {
    let base_start = file_name
        .rfind(std::path::is_separator)
        .map_or(0, |i| i + 1);
    let base = &file_name[base_start..];
    base.rfind('.').map_or("", |dot| &base[dot..])
}
