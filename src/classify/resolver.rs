//! MIME resolution from file extensions
//!
//! Resolvers answer one question: "what MIME type does this extension
//! usually mean?". Unknown extensions are a normal outcome (`None`), never
//! an error.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Resolve an extension (leading dot included, possibly empty) to a MIME type
pub trait MimeResolver: Send + Sync {
    fn resolve(&self, extension: &str) -> Option<String>;
}

/// Which standard resolver backs a classifier
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MimeSource {
    /// Small, platform-independent table of web formats
    #[default]
    Builtin,
    /// The full `mime_guess` database
    Guess,
}

impl MimeSource {
    /// Build the resolver for this source
    #[must_use]
    pub fn resolver(self) -> Box<dyn MimeResolver> {
        match self {
            Self::Builtin => Box::new(BuiltinResolver),
            Self::Guess => Box::new(GuessResolver),
        }
    }
}

impl fmt::Display for MimeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::Guess => f.write_str("guess"),
        }
    }
}

impl std::str::FromStr for MimeSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "builtin" => Ok(Self::Builtin),
            "guess" => Ok(Self::Guess),
            other => Err(format!("unknown MIME source '{other}' (expected builtin or guess)")),
        }
    }
}

fn strip_dot(extension: &str) -> Option<&str> {
    let bare = extension.strip_prefix('.').unwrap_or(extension);
    (!bare.is_empty()).then_some(bare)
}

/// Resolver backed by the `mime_guess` extension database
///
/// `application/octet-stream` carries no type information, so it counts as
/// no match and the extension table gets a say (`.asd`, `.dmg`).
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessResolver;

impl GuessResolver {
    const OPAQUE: &'static str = "application/octet-stream";
}

impl MimeResolver for GuessResolver {
    fn resolve(&self, extension: &str) -> Option<String> {
        let bare = strip_dot(extension)?;
        mime_guess::from_ext(bare)
            .first_raw()
            .filter(|mime| *mime != Self::OPAQUE)
            .map(String::from)
    }
}

/// Resolver over a fixed set of web-standard types
///
/// Deliberately narrow: anything outside this list falls through to the
/// bespoke extension table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinResolver;

impl BuiltinResolver {
    const TYPES: &'static [(&'static str, &'static str)] = &[
        ("avif", "image/avif"),
        ("css", "text/css; charset=utf-8"),
        ("gif", "image/gif"),
        ("htm", "text/html; charset=utf-8"),
        ("html", "text/html; charset=utf-8"),
        ("jpeg", "image/jpeg"),
        ("jpg", "image/jpeg"),
        ("js", "text/javascript; charset=utf-8"),
        ("json", "application/json"),
        ("mjs", "text/javascript; charset=utf-8"),
        ("pdf", "application/pdf"),
        ("png", "image/png"),
        ("svg", "image/svg+xml"),
        ("wasm", "application/wasm"),
        ("webp", "image/webp"),
        ("xml", "text/xml; charset=utf-8"),
    ];
}

impl MimeResolver for BuiltinResolver {
    fn resolve(&self, extension: &str) -> Option<String> {
        let bare = strip_dot(extension)?.to_lowercase();
        Self::TYPES
            .iter()
            .find(|(ext, _)| *ext == bare)
            .map(|(_, mime)| (*mime).to_string())
    }
}

/// Resolver over an explicit extension → MIME map
///
/// Keys are normalized to lowercase with a leading dot, so `"MP3"`,
/// `".mp3"` and `"mp3"` all name the same entry.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    types: HashMap<String, String>,
}

impl StaticResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, replacing any previous one for the extension
    #[must_use]
    pub fn with(mut self, extension: &str, mime: impl Into<String>) -> Self {
        self.insert(extension, mime);
        self
    }

    pub fn insert(&mut self, extension: &str, mime: impl Into<String>) {
        self.types.insert(normalize_extension(extension), mime.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for StaticResolver {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut resolver = Self::new();
        for (ext, mime) in iter {
            resolver.insert(ext.as_ref(), mime);
        }
        resolver
    }
}

impl MimeResolver for StaticResolver {
    fn resolve(&self, extension: &str) -> Option<String> {
        if extension.is_empty() {
            return None;
        }
        self.types.get(&normalize_extension(extension)).cloned()
    }
}

/// Lowercase an extension and make sure it carries a leading dot
#[must_use]
pub fn normalize_extension(extension: &str) -> String {
    let lower = extension.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// Consult several resolvers in order; the first answer wins
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn MimeResolver>>,
}

impl ResolverChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver with lower priority than those already present
    #[must_use]
    pub fn then(mut self, resolver: impl MimeResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Append an already boxed resolver
    #[must_use]
    pub fn then_boxed(mut self, resolver: Box<dyn MimeResolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }
}

impl MimeResolver for ResolverChain {
    fn resolve(&self, extension: &str) -> Option<String> {
        self.resolvers.iter().find_map(|r| r.resolve(extension))
    }
}

impl MimeResolver for Box<dyn MimeResolver> {
    fn resolve(&self, extension: &str) -> Option<String> {
        (**self).resolve(extension)
    }
}
