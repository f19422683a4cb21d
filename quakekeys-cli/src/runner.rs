//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading, logging initialization and engine
//! construction so command handlers stay small.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::CliError;
use quakekeys::config::{config_file_path, ConfigFile};
use quakekeys::log::TracingLogger;
use quakekeys::logging::{default_log_file, init_logging, LoggingGuard};
use quakekeys::lookup::{LookupSettings, QuakeKeysLookup};

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a runner, loading `config_path` (or the default file) and
    /// initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Configuration file to use instead of ~/.quakekeys/config.ini
    /// * `debug_mode` - When true, enables debug-level logging unless RUST_LOG is set
    pub fn with_options(config_path: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "configuration file not found: {}",
                        path.display()
                    )));
                }
                ConfigFile::load_from(path)?
            }
            None => ConfigFile::load_from(&config_file_path())?,
        };

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| default_log_file().to_string());

        let logging_guard = init_logging(log_dir, &log_file, true, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("quakekeys v{}", quakekeys::VERSION);
        info!("quakekeys CLI: {} command", command);
    }

    /// Build the lookup engine, logging through `tracing`.
    pub fn create_lookup(&self, settings: &LookupSettings) -> Result<QuakeKeysLookup, CliError> {
        match &settings.keys_data_directory {
            Some(dir) => info!(directory = %dir.display(), "Loading keys data"),
            None => info!("No keys data directory configured; starting with empty indexes"),
        }

        QuakeKeysLookup::from_settings(settings, Arc::new(TracingLogger))
            .map_err(CliError::Lookup)
            .inspect(|lookup| info!(model = %lookup.model(), "Lookup engine created"))
    }
}
