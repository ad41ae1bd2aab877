//! Output formatting for CLI display
//!
//! Renders a [`GroupedResult`] as an indented tree or as JSON. The grouped
//! result itself is unordered; the text view sorts categories and labels
//! purely for readability (Directory first, then alphabetical).

use crate::group::{FileEntry, GroupedBucket, GroupedResult};
use crate::registry::{Category, FileKind};
use colored::Colorize;

/// Render the grouped result as an indented tree
///
/// In quiet mode only entry names are printed, one per line, with no
/// headers.
#[must_use]
pub fn render_text(result: &GroupedResult, quiet: bool) -> String {
    let mut categories: Vec<(&Category, &GroupedBucket)> = result.iter().collect();
    categories.sort_by(|(a, _), (b, _)| {
        b.is_directory()
            .cmp(&a.is_directory())
            .then_with(|| a.name().cmp(b.name()))
    });

    let mut lines = Vec::new();
    for (category, bucket) in categories {
        if !quiet {
            lines.push(format!("{} ({})", category.name().bold(), bucket.len()));
        }
        match bucket {
            GroupedBucket::Directories(entries) => {
                lines.extend(entries.iter().map(|e| entry_line(e, 1, quiet)));
            }
            GroupedBucket::Typed(labels) => {
                let mut labels: Vec<_> = labels.iter().collect();
                labels.sort_by(|(a, _), (b, _)| a.cmp(b));
                for (label, entries) in labels {
                    if !quiet {
                        lines.push(format!("  {}", label.cyan()));
                    }
                    lines.extend(entries.iter().map(|e| entry_line(e, 2, quiet)));
                }
            }
        }
    }
    lines.join("\n")
}

fn entry_line(entry: &FileEntry, depth: usize, quiet: bool) -> String {
    if quiet {
        return entry.name.clone();
    }
    let indent = "  ".repeat(depth);
    if entry.is_dir {
        format!("{indent}{}/", entry.name.blue())
    } else {
        format!("{indent}{} {}", entry.name, format!("({})", entry.size).dimmed())
    }
}

/// Render the grouped result as pretty-printed JSON
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn render_json(result: &GroupedResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// One line describing how a file name was classified
#[must_use]
pub fn kind_line(name: &str, kind: &FileKind, quiet: bool) -> String {
    if quiet {
        kind.to_string()
    } else {
        format!("{name}: {} / {}", kind.category.name().bold(), kind.label)
    }
}
