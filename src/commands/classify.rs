//! Classify command - show how file names would be classified

use crate::{classify::Classifier, output, DirkindError};
use std::io::Write;

type Result<T> = std::result::Result<T, DirkindError>;

/// Execute the classify command
///
/// # Errors
/// Returns an error if output cannot be written.
pub fn execute<W: Write>(
    classifier: &Classifier,
    files: &[String],
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    for name in files {
        let kind = classifier.classify(name);
        writeln!(out, "{}", output::kind_line(name, &kind, quiet))?;
    }
    Ok(())
}
