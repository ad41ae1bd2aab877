//! Count command - number of visible entries in a directory

use crate::{
    scan::{DirLister, Scanner},
    DirkindError,
};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, DirkindError>;

/// Execute the count command
///
/// # Errors
/// Returns an error if the directory cannot be listed or output cannot be written.
pub fn execute<L: DirLister, W: Write>(
    scanner: &Scanner<L>,
    path: &Path,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let count = scanner.count(path)?;
    if quiet {
        writeln!(out, "{count}")?;
    } else {
        writeln!(out, "{count} visible entries in {}", path.display())?;
    }
    Ok(())
}
