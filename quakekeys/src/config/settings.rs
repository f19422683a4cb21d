//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::location::LocationSchema;
use crate::lookup::{LookupSettings, ModelInfo, PerilId};
use crate::vulnerability::KeyField;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Model identity and peril
    pub model: ModelSettings,
    /// Reference table location and spatial parameters
    pub keys_data: KeysDataSettings,
    /// Location column names
    pub locations: LocationSchema,
    /// Vulnerability key composition
    pub vulnerability: VulnerabilitySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[model]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub supplier: String,
    pub name: String,
    pub version: Option<String>,
    /// Peril tagged on every output record
    pub peril: PerilId,
}

/// `[keys_data]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct KeysDataSettings {
    /// Directory holding the reference tables; unset means empty indexes
    pub directory: Option<PathBuf>,
    pub areaperil_file: String,
    pub vulnerability_file: String,
    /// Cell side length in degrees
    pub grid_spacing: f64,
    /// Spatial bucket size in degrees
    pub bucket_size: f64,
}

/// `[vulnerability]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct VulnerabilitySettings {
    /// Ordered fields forming the vulnerability key
    pub key_fields: Vec<KeyField>,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

impl ConfigFile {
    /// Engine construction settings described by this configuration.
    pub fn lookup_settings(&self) -> LookupSettings {
        LookupSettings {
            model: ModelInfo {
                supplier: self.model.supplier.clone(),
                name: self.model.name.clone(),
                version: self.model.version.clone(),
            },
            peril: self.model.peril,
            keys_data_directory: self.keys_data.directory.clone(),
            areaperil_file: self.keys_data.areaperil_file.clone(),
            vulnerability_file: self.keys_data.vulnerability_file.clone(),
            grid_spacing: self.keys_data.grid_spacing,
            bucket_size: self.keys_data.bucket_size,
            schema: self.locations.clone(),
            key_fields: self.vulnerability.key_fields.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookup_settings_match_engine_defaults() {
        let from_config = ConfigFile::default().lookup_settings();
        assert_eq!(from_config, LookupSettings::default());
    }

    #[test]
    fn test_lookup_settings_carry_overrides() {
        let mut config = ConfigFile::default();
        config.model.peril = PerilId::Wind;
        config.model.version = Some("2.1".to_string());
        config.keys_data.directory = Some(PathBuf::from("/data/gmo"));
        config.keys_data.grid_spacing = 0.1;
        config.locations.id = "LOC_ID".to_string();
        config.vulnerability.key_fields = vec![KeyField::Occupancy];

        let settings = config.lookup_settings();

        assert_eq!(settings.peril, PerilId::Wind);
        assert_eq!(settings.model.version.as_deref(), Some("2.1"));
        assert_eq!(
            settings.areaperil_path(),
            Some(PathBuf::from("/data/gmo/areaperil_dict.csv"))
        );
        assert_eq!(settings.grid_spacing, 0.1);
        assert_eq!(settings.schema.id, "LOC_ID");
        assert_eq!(settings.key_fields, vec![KeyField::Occupancy]);
    }
}
