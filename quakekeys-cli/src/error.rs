//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use quakekeys::config::ConfigFileError;
use quakekeys::keys::KeysWriteError;
use quakekeys::location::LocationReadError;
use quakekeys::lookup::LookupError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to build the lookup engine or a row aborted the batch
    Lookup(LookupError),
    /// Failed to open the locations file
    Locations(LocationReadError),
    /// Failed to write keys output
    KeysWrite(KeysWriteError),
    /// Refused to overwrite an existing file
    FileExists(PathBuf),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Lookup(LookupError::AreaPeril(_) | LookupError::Vulnerability(_)) => {
                eprintln!();
                eprintln!("Check the [keys_data] section of your configuration:");
                eprintln!("  1. directory points at the model's keys data");
                eprintln!("  2. areaperil_file and vulnerability_file exist in it");
                eprintln!("Or pass --keys-data <dir> on the command line.");
            }
            CliError::FileExists(_) => {
                eprintln!("Use --force to overwrite it.");
            }
            _ => {}
        }

        process::exit(self.exit_code())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::FileExists(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Lookup(e) => write!(f, "Keys lookup failed: {}", e),
            CliError::Locations(e) => write!(f, "{}", e),
            CliError::KeysWrite(e) => write!(f, "{}", e),
            CliError::FileExists(path) => write!(f, "File already exists: {}", path.display()),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Lookup(e) => Some(e),
            CliError::Locations(e) => Some(e),
            CliError::KeysWrite(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<LookupError> for CliError {
    fn from(e: LookupError) -> Self {
        CliError::Lookup(e)
    }
}

impl From<LocationReadError> for CliError {
    fn from(e: LocationReadError) -> Self {
        CliError::Locations(e)
    }
}

impl From<KeysWriteError> for CliError {
    fn from(e: KeysWriteError) -> Self {
        match e {
            KeysWriteError::Lookup(e) => CliError::Lookup(e),
            other => CliError::KeysWrite(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakekeys::location::ValidationError;

    #[test]
    fn test_config_error_message() {
        let err = CliError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad value");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_aborted_stream_maps_to_lookup() {
        let lookup = LookupError::Validation(ValidationError::MissingId {
            header: "ROW_ID".to_string(),
        });
        let err: CliError = KeysWriteError::Lookup(lookup).into();

        assert!(matches!(err, CliError::Lookup(LookupError::Validation(_))));
        assert!(err.to_string().starts_with("Keys lookup failed:"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_file_exists_message() {
        let err = CliError::FileExists(PathBuf::from("/tmp/config.ini"));
        assert_eq!(err.to_string(), "File already exists: /tmp/config.ini");
    }
}
