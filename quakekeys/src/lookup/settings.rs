//! Construction settings for lookup engines.

use std::path::PathBuf;

use super::model::{ModelInfo, PerilId};
use crate::area_peril::{DEFAULT_BUCKET_SIZE, DEFAULT_GRID_SPACING};
use crate::location::LocationSchema;
use crate::vulnerability::{default_key_fields, KeyField};

/// Default file name of the area-peril dictionary.
pub const DEFAULT_AREAPERIL_FILE: &str = "areaperil_dict.csv";

/// Default file name of the vulnerability dictionary.
pub const DEFAULT_VULNERABILITY_FILE: &str = "vulnerability_dict.csv";

/// Everything needed to build a lookup engine from reference files.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupSettings {
    /// Model identity
    pub model: ModelInfo,
    /// Peril tagged on every output record
    pub peril: PerilId,
    /// Directory holding the reference tables; `None` builds empty indexes
    pub keys_data_directory: Option<PathBuf>,
    /// Area-peril dictionary file name within the directory
    pub areaperil_file: String,
    /// Vulnerability dictionary file name within the directory
    pub vulnerability_file: String,
    /// Cell side length in degrees
    pub grid_spacing: f64,
    /// Spatial bucket size in degrees
    pub bucket_size: f64,
    /// Location column names
    pub schema: LocationSchema,
    /// Fields forming the vulnerability key
    pub key_fields: Vec<KeyField>,
}

impl LookupSettings {
    /// Settings reading reference tables from `directory`.
    pub fn with_keys_data<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            keys_data_directory: Some(directory.into()),
            ..Self::default()
        }
    }

    /// Full path of the area-peril dictionary, if a directory is set.
    pub fn areaperil_path(&self) -> Option<PathBuf> {
        self.keys_data_directory
            .as_ref()
            .map(|dir| dir.join(&self.areaperil_file))
    }

    /// Full path of the vulnerability dictionary, if a directory is set.
    pub fn vulnerability_path(&self) -> Option<PathBuf> {
        self.keys_data_directory
            .as_ref()
            .map(|dir| dir.join(&self.vulnerability_file))
    }
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            model: ModelInfo::default(),
            peril: PerilId::Quake,
            keys_data_directory: None,
            areaperil_file: DEFAULT_AREAPERIL_FILE.to_string(),
            vulnerability_file: DEFAULT_VULNERABILITY_FILE.to_string(),
            grid_spacing: DEFAULT_GRID_SPACING,
            bucket_size: DEFAULT_BUCKET_SIZE,
            schema: LocationSchema::default(),
            key_fields: default_key_fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LookupSettings::default();
        assert_eq!(settings.peril, PerilId::Quake);
        assert_eq!(settings.grid_spacing, 0.05);
        assert!(settings.areaperil_path().is_none());
        assert!(settings.vulnerability_path().is_none());
    }

    #[test]
    fn test_paths_join_directory() {
        let settings = LookupSettings::with_keys_data("/data/keys");
        assert_eq!(
            settings.areaperil_path(),
            Some(PathBuf::from("/data/keys/areaperil_dict.csv"))
        );
        assert_eq!(
            settings.vulnerability_path(),
            Some(PathBuf::from("/data/keys/vulnerability_dict.csv"))
        );
    }
}
