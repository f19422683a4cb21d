//! Configuration file support for quakekeys.
//!
//! The user configuration lives in `~/.quakekeys/config.ini`:
//!
//! - [`settings`]: one struct per `[section]`
//! - [`defaults`]: `DEFAULT_*` constants and `ConfigFile::default()`
//! - `parser`: INI to `ConfigFile`, with value validation
//! - `writer`: `ConfigFile` to a commented INI string
//! - [`file`]: load/save and the default paths
//!
//! # Example
//!
//! ```
//! use quakekeys::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! let settings = config.lookup_settings();
//! assert!(settings.keys_data_directory.is_none());
//! ```

pub mod defaults;
pub mod file;
mod parser;
pub mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, KeysDataSettings, LoggingSettings, ModelSettings, VulnerabilitySettings};
