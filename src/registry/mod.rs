//! Static lookup tables mapping extensions and MIME types to file kinds
//!
//! Two tables live here:
//!
//! - **Extension table**: bespoke entries for formats the standard MIME
//!   resolvers do not know (app-specific or legacy formats). Keys are
//!   lowercase and include the leading dot.
//! - **MIME table**: keyed by top-level type (`application`, `audio`,
//!   `video`), each holding a subtype table.
//!
//! Both tables are built once on first use and never mutated.
//!
//! Lookups are total: a miss always yields a [`FileKind`] in
//! [`Category::Other`] carrying the raw extension or subtype, and a MIME
//! top-level type without a table synthesizes a new category on the fly
//! (`image/png` becomes `Image / PNG`).

mod types;

pub use types::{Category, FileKind};

use std::collections::HashMap;
use std::sync::LazyLock;

type KindTable = HashMap<&'static str, FileKind>;

static EXTENSION_TABLE: LazyLock<KindTable> = LazyLock::new(|| {
    table(&[
        (".pages", Category::Document, "Pages document"),
        (".asd", Category::Audio, "Ableton Analysis File"),
        (".srt", Category::Document, "Subtitle File"),
        (".txt", Category::Document, "Plain Text"),
    ])
});

static MIME_TABLE: LazyLock<HashMap<&'static str, KindTable>> = LazyLock::new(|| {
    let application = table(&[
        ("pdf", Category::Document, "PDF Document"),
        ("x-tar", Category::Archive, "Tarball"),
        ("x-apple-diskimage", Category::Program, "Apple Disk Image"),
        ("zip", Category::Archive, "Zipball"),
        ("x-subrip", Category::Document, "Subtitle File"),
    ]);
    let audio = table(&[
        ("mpeg", Category::Audio, "MP3 Audio"),
        ("mid", Category::Audio, "MIDI Synth Audio"),
        ("x-wav", Category::Audio, "WAV Audio"),
        ("x-flac", Category::Audio, "FLAC High-Definition"),
        ("ogg", Category::Audio, "OGG Audio"),
    ]);
    let video = table(&[
        ("x-msvideo", Category::Video, "AVI Video"),
        ("x-matroska", Category::Video, "Matroska High-Definition Video"),
        ("mp4", Category::Video, "MP4 Video"),
    ]);

    HashMap::from([("application", application), ("audio", audio), ("video", video)])
});

fn table(entries: &[(&'static str, Category, &'static str)]) -> KindTable {
    entries
        .iter()
        .map(|(key, category, label)| (*key, FileKind::new(category.clone(), *label)))
        .collect()
}

/// The bespoke extension table (lowercase extension, leading dot included)
#[must_use]
pub fn extension_table() -> &'static HashMap<&'static str, FileKind> {
    &EXTENSION_TABLE
}

/// The MIME table, keyed by top-level type then subtype
#[must_use]
pub fn mime_table() -> &'static HashMap<&'static str, HashMap<&'static str, FileKind>> {
    &MIME_TABLE
}

/// Classify by extension alone
///
/// Matching is case-insensitive. On a miss the kind is `Other` labelled
/// with the extension exactly as given, which may be empty.
#[must_use]
pub fn lookup_extension(extension: &str) -> FileKind {
    EXTENSION_TABLE
        .get(extension.to_lowercase().as_str())
        .cloned()
        .unwrap_or_else(|| FileKind::other(extension))
}

/// Classify a full MIME type string such as `audio/mpeg`
///
/// Parameters (`; charset=utf-8`) are ignored. A string without a `/`
/// is treated as a top-level type with an empty subtype.
#[must_use]
pub fn lookup_mime(mime: &str) -> FileKind {
    let essence = mime.split(';').next().unwrap_or_default().trim();
    let (top, subtype) = essence.split_once('/').unwrap_or((essence, ""));
    let top_lower = top.to_lowercase();

    match MIME_TABLE.get(top_lower.as_str()) {
        Some(subtypes) => subtypes
            .get(subtype.to_lowercase().as_str())
            .cloned()
            .unwrap_or_else(|| FileKind::other(subtype)),
        None => FileKind::new(Category::from_name(&title_case(top)), subtype.to_uppercase()),
    }
}

/// Capitalize the first letter of every word, leaving separators intact
///
/// Any character that is not alphanumeric or `_` starts a new word, so
/// `x-world` becomes `X-World`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}
