//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let version = config.model.version.as_deref().unwrap_or("");
    let directory = config
        .keys_data
        .directory
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let key_fields = config
        .vulnerability
        .key_fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"[model]
; Model identity reported in logs
supplier = {}
name = {}
version = {}
; Peril tagged on every keys record: flood, quake, surge, wind (or 1-4)
peril = {}

[keys_data]
; Directory holding the reference tables.
; If empty, the lookup starts with empty indexes and every location is a nomatch.
directory = {}
; Area-peril dictionary: AREA_PERIL_ID,LON,LAT (cell centres)
areaperil_file = {}
; Vulnerability dictionary: VULNERABILITY_ID plus one column per key field
vulnerability_file = {}
; Cell side length in degrees (default: 0.05)
grid_spacing = {}
; Spatial index bucket size in degrees (default: 1)
bucket_size = {}

[locations]
; Column names in the location file (matched case-insensitively)
id = {}
lon = {}
lat = {}
coverage = {}
taxonomy = {}
occupancy = {}

[vulnerability]
; Ordered, comma-separated fields forming the vulnerability key: taxonomy, occupancy
key_fields = {}

[logging]
; Log file location
file = {}
"#,
        config.model.supplier,
        config.model.name,
        version,
        config.model.peril.name(),
        directory,
        config.keys_data.areaperil_file,
        config.keys_data.vulnerability_file,
        config.keys_data.grid_spacing,
        config.keys_data.bucket_size,
        config.locations.id,
        config.locations.lon,
        config.locations.lat,
        config.locations.coverage,
        config.locations.taxonomy,
        config.locations.occupancy,
        key_fields,
        path_to_string(&config.logging.file),
    )
}

/// Convert a path to string, replacing home directory with ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::PerilId;
    use crate::vulnerability::KeyField;
    use ini::Ini;
    use std::path::PathBuf;

    #[test]
    fn test_writes_every_section() {
        let content = to_config_string(&ConfigFile::default());
        for section in ["[model]", "[keys_data]", "[locations]", "[vulnerability]", "[logging]"] {
            assert!(content.contains(section), "missing {}", section);
        }
        assert!(content.contains("peril = quake"));
        assert!(content.contains("key_fields = taxonomy, occupancy"));
        assert!(content.contains("grid_spacing = 0.05"));
    }

    #[test]
    fn test_written_config_parses_back() {
        let mut config = ConfigFile::default();
        config.model.peril = PerilId::Surge;
        config.model.version = Some("1.0".to_string());
        config.keys_data.directory = Some(PathBuf::from("/srv/keys"));
        config.keys_data.bucket_size = 0.5;
        config.vulnerability.key_fields = vec![KeyField::Occupancy, KeyField::Taxonomy];

        let ini = Ini::load_from_str(&to_config_string(&config)).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_path_to_string_uses_tilde_for_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("keys")), "~/keys");
        }
        assert_eq!(path_to_string(Path::new("/srv/keys")), "/srv/keys");
    }
}
