//! Testing utilities for dirkind
//!
//! Fake collaborators (a canned directory listing and a stub MIME
//! resolver) plus a helper that lays out a small fixture directory.
//!
//! Only available when compiled with `cfg(test)`.

use crate::classify::MimeResolver;
use crate::scan::{DirLister, RawEntry};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Resolver answering only for the extensions it was given
#[derive(Debug, Default)]
pub struct StubResolver {
    types: HashMap<String, String>,
}

impl StubResolver {
    /// Resolver that knows nothing, forcing the extension table path
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolver with exactly one mapping
    #[must_use]
    pub fn single(extension: &str, mime: &str) -> Self {
        Self::new(&[(extension, mime)])
    }

    #[must_use]
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            types: pairs
                .iter()
                .map(|(ext, mime)| ((*ext).to_string(), (*mime).to_string()))
                .collect(),
        }
    }
}

impl MimeResolver for StubResolver {
    fn resolve(&self, extension: &str) -> Option<String> {
        self.types.get(extension).cloned()
    }
}

/// Lister returning a fixed set of entries, or always failing
#[derive(Debug, Default)]
pub struct FakeLister {
    entries: Vec<RawEntry>,
    failure: Option<io::ErrorKind>,
}

impl FakeLister {
    #[must_use]
    pub fn new(entries: Vec<RawEntry>) -> Self {
        Self {
            entries,
            failure: None,
        }
    }

    /// Lister whose every call fails with `kind`
    #[must_use]
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            entries: Vec::new(),
            failure: Some(kind),
        }
    }
}

impl DirLister for FakeLister {
    fn list(&self, _path: &Path) -> io::Result<Vec<RawEntry>> {
        match self.failure {
            Some(kind) => Err(io::Error::from(kind)),
            None => Ok(self.entries.clone()),
        }
    }
}

/// Create a file filled with `content`
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn create_test_file_with_content(path: impl AsRef<Path>, content: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    Ok(())
}

/// Populate `root` with the standard fixture:
///
/// ```text
/// root/
///   .hidden   (hidden, never reported)
///   a.txt     (12 bytes)
///   b.pdf     (3 bytes)
///   sub/
/// ```
///
/// # Panics
/// Panics if any fixture entry cannot be created.
pub fn build_fixture_dir(root: &Path) {
    create_test_file_with_content(root.join("a.txt"), b"test content").unwrap();
    create_test_file_with_content(root.join("b.pdf"), b"pdf").unwrap();
    create_test_file_with_content(root.join(".hidden"), b"secret").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
}
