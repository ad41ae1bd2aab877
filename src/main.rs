//! Dirkind CLI application entry point
//!
//! Groups the entries of a single directory by category and file type.
//!
//! # Usage
//!
//! ```bash
//! # Group the current directory (default command)
//! dirkind
//! dirkind show ~/Downloads
//!
//! # Machine-readable output
//! dirkind show ~/Downloads --json
//!
//! # Count visible entries only
//! dirkind count ~/Downloads
//!
//! # Check how names would be classified
//! dirkind classify song.mp3 notes.txt
//!
//! # Change settings
//! dirkind config set mime_source=builtin
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/dirkind/config.toml` on Linux) and are created with defaults
//! on first run. Logging goes to stderr and honours `RUST_LOG`.

use dirkind::{
    cli::{Cli, Commands},
    commands,
    config::DirkindConfig,
    group::DirectoryProcessor,
    scan::Scanner,
    DirkindError,
};
use std::io;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, DirkindError>;

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Main entry point for the dirkind application
///
/// # Errors
///
/// Returns `DirkindError` if configuration loading fails, the directory
/// cannot be listed, or output cannot be written.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_level());

    let config_path = cli.config_path()?;
    let stored = DirkindConfig::load_from(&config_path)?;
    tracing::debug!(path = %config_path.display(), "loaded configuration");

    let quiet = cli.quiet || stored.quiet;
    let mut stdout = io::stdout().lock();

    let command = cli.get_command();
    match &command {
        Commands::Config { command } => {
            commands::config(stored, &config_path, command, quiet, &mut stdout)
        }
        Commands::Show { path, .. } => {
            let config = stored.with_cli(&cli);
            let processor =
                DirectoryProcessor::new(config.classifier()).size_units(config.size_units);
            let format = command.output_format(config.output);
            commands::show(&processor, path, format, quiet, &mut stdout)
        }
        Commands::Count { path } => commands::count(&Scanner::new(), path, quiet, &mut stdout),
        Commands::Classify { files } => {
            let config = stored.with_cli(&cli);
            commands::classify(&config.classifier(), files, quiet, &mut stdout)
        }
    }
}
