//! Show command - group a directory's entries by category and type

use crate::{
    config::OutputFormat,
    group::DirectoryProcessor,
    output,
    scan::DirLister,
    DirkindError,
};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, DirkindError>;

/// Execute the show command
///
/// # Errors
/// Returns an error if the directory cannot be listed or output cannot be written.
pub fn execute<L: DirLister, W: Write>(
    processor: &DirectoryProcessor<L>,
    path: &Path,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let grouped = processor.process(path)?;

    match format {
        OutputFormat::Json => writeln!(out, "{}", output::render_json(&grouped)?)?,
        OutputFormat::Text if grouped.is_empty() => {
            if !quiet {
                writeln!(out, "No visible entries in {}.", path.display())?;
            }
        }
        OutputFormat::Text => writeln!(out, "{}", output::render_text(&grouped, quiet))?,
    }
    Ok(())
}
