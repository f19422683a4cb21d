//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::{Ini, Properties};
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::vulnerability::KeyField;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [model] section
    if let Some(section) = ini.section(Some("model")) {
        if let Some(v) = non_empty(section, "supplier") {
            config.model.supplier = v.to_string();
        }
        if let Some(v) = non_empty(section, "name") {
            config.model.name = v.to_string();
        }
        if let Some(v) = section.get("version") {
            let v = v.trim();
            config.model.version = (!v.is_empty()).then(|| v.to_string());
        }
        if let Some(v) = non_empty(section, "peril") {
            config.model.peril = v.parse().map_err(|reason| ConfigFileError::InvalidValue {
                section: "model".to_string(),
                key: "peril".to_string(),
                value: v.to_string(),
                reason,
            })?;
        }
    }

    // [keys_data] section
    if let Some(section) = ini.section(Some("keys_data")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            config.keys_data.directory = (!v.is_empty()).then(|| expand_tilde(v));
        }
        if let Some(v) = non_empty(section, "areaperil_file") {
            config.keys_data.areaperil_file = v.to_string();
        }
        if let Some(v) = non_empty(section, "vulnerability_file") {
            config.keys_data.vulnerability_file = v.to_string();
        }
        if let Some(v) = section.get("grid_spacing") {
            config.keys_data.grid_spacing = parse_degrees("keys_data", "grid_spacing", v)?;
        }
        if let Some(v) = section.get("bucket_size") {
            config.keys_data.bucket_size = parse_degrees("keys_data", "bucket_size", v)?;
        }
    }
    check_bucket_size(config.keys_data.bucket_size, config.keys_data.grid_spacing)?;

    // [locations] section
    if let Some(section) = ini.section(Some("locations")) {
        let schema = &mut config.locations;
        for (key, column) in [
            ("id", &mut schema.id),
            ("lon", &mut schema.lon),
            ("lat", &mut schema.lat),
            ("coverage", &mut schema.coverage),
            ("taxonomy", &mut schema.taxonomy),
            ("occupancy", &mut schema.occupancy),
        ] {
            if let Some(v) = non_empty(section, key) {
                *column = v.to_string();
            }
        }
    }

    // [vulnerability] section
    if let Some(section) = ini.section(Some("vulnerability")) {
        if let Some(v) = section.get("key_fields") {
            config.vulnerability.key_fields = parse_key_fields(v)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section, "file") {
            config.logging.file = expand_tilde(v);
        }
    }

    Ok(config)
}

/// Trimmed value of `key`, skipping blank entries.
fn non_empty<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    section.get(key).map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a strictly positive, finite number of degrees.
fn parse_degrees(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    let invalid = || ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: "must be a positive number of degrees".to_string(),
    };
    let parsed: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(invalid());
    }
    Ok(parsed)
}

/// A bucket narrower than a cell would spread each cell over many buckets.
fn check_bucket_size(bucket_size: f64, grid_spacing: f64) -> Result<(), ConfigFileError> {
    if bucket_size < grid_spacing {
        return Err(ConfigFileError::InvalidValue {
            section: "keys_data".to_string(),
            key: "bucket_size".to_string(),
            value: bucket_size.to_string(),
            reason: format!("must be at least grid_spacing ({})", grid_spacing),
        });
    }
    Ok(())
}

/// Parse a comma-separated, non-empty list of key fields.
fn parse_key_fields(value: &str) -> Result<Vec<KeyField>, ConfigFileError> {
    let invalid = |reason: String| ConfigFileError::InvalidValue {
        section: "vulnerability".to_string(),
        key: "key_fields".to_string(),
        value: value.to_string(),
        reason,
    };
    let fields = value
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::parse::<KeyField>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;
    if fields.is_empty() {
        return Err(invalid("at least one key field is required".to_string()));
    }
    Ok(fields)
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
