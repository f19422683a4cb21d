//! Default values and constants for all configuration settings.
//!
//! Contains the `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use std::path::PathBuf;

use super::settings::*;
use crate::area_peril::{DEFAULT_BUCKET_SIZE, DEFAULT_GRID_SPACING};
use crate::location::LocationSchema;
use crate::lookup::{ModelInfo, PerilId, DEFAULT_AREAPERIL_FILE, DEFAULT_VULNERABILITY_FILE};
use crate::vulnerability::default_key_fields;

/// Default peril when `[model] peril` is unset.
pub const DEFAULT_PERIL: PerilId = PerilId::Quake;

/// Default log file path (`~/.quakekeys/logs/quakekeys.log`).
pub fn default_log_path() -> PathBuf {
    crate::logging::default_log_dir().join(crate::logging::default_log_file())
}

impl Default for ConfigFile {
    fn default() -> Self {
        let model = ModelInfo::default();
        Self {
            model: ModelSettings {
                supplier: model.supplier,
                name: model.name,
                version: model.version,
                peril: DEFAULT_PERIL,
            },
            keys_data: KeysDataSettings {
                directory: None,
                areaperil_file: DEFAULT_AREAPERIL_FILE.to_string(),
                vulnerability_file: DEFAULT_VULNERABILITY_FILE.to_string(),
                grid_spacing: DEFAULT_GRID_SPACING,
                bucket_size: DEFAULT_BUCKET_SIZE,
            },
            locations: LocationSchema::default(),
            vulnerability: VulnerabilitySettings {
                key_fields: default_key_fields(),
            },
            logging: LoggingSettings {
                file: default_log_path(),
            },
        }
    }
}
