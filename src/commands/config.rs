//! Config command - read or change persistent settings

use crate::{cli::ConfigCommands, config::DirkindConfig, DirkindError};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, DirkindError>;

/// Execute a config subcommand against the config file at `config_path`
///
/// # Errors
/// Returns an error for malformed `key=value` input, unknown keys, invalid
/// values, or when the config file cannot be written.
pub fn execute<W: Write>(
    mut config: DirkindConfig,
    config_path: &Path,
    command: &ConfigCommands,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                DirkindError::InvalidInput(
                    "Invalid format. Use: dirkind config set key=value".into(),
                )
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set(key, value)?;
            config.save_to(config_path)?;
            if !quiet {
                writeln!(out, "Set {key} = {value}")?;
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).ok_or_else(|| {
                DirkindError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    DirkindConfig::KEYS.join(", ")
                ))
            })?;
            writeln!(out, "{value}")?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", config_path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::MimeSource;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        let command = ConfigCommands::Set {
            setting: "mime_source = guess".into(),
        };

        let mut out = Vec::new();
        execute(DirkindConfig::default(), &path, &command, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Set mime_source = guess\n");
        assert_eq!(
            DirkindConfig::load_from(&path).unwrap().mime_source,
            MimeSource::Guess
        );
    }

    #[test]
    fn test_set_without_equals_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let command = ConfigCommands::Set {
            setting: "quiet".into(),
        };
        let err = execute(
            DirkindConfig::default(),
            &tmp.path().join("config.toml"),
            &command,
            false,
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, DirkindError::InvalidInput(_)));
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        let mut out = Vec::new();
        let get = ConfigCommands::Get { key: "size_units".into() };
        execute(DirkindConfig::default(), &path, &get, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "decimal\n");

        let get = ConfigCommands::Get { key: "nope".into() };
        assert!(execute(DirkindConfig::default(), &path, &get, false, &mut Vec::new()).is_err());
    }
}
