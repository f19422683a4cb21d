//! quakekeys - Earthquake keys lookup for catastrophe models
//!
//! Resolves each exposure location to an area-peril id (the grid cell whose
//! footprint contains it) and a vulnerability id (the curve matching its
//! building class and occupancy), tagging every location `success`,
//! `nomatch` or `fail`.
//!
//! # High-Level API
//!
//! ```no_run
//! use quakekeys::config::ConfigFile;
//! use quakekeys::keys::KeysWriter;
//! use quakekeys::location::LocationReader;
//! use quakekeys::log::TracingLogger;
//! use quakekeys::lookup::{KeysLookup, QuakeKeysLookup};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ConfigFile::load()?.lookup_settings();
//! let lookup = QuakeKeysLookup::from_settings(&settings, Arc::new(TracingLogger))?;
//!
//! let locations = LocationReader::from_path("locations.csv")?;
//! let mut writer = KeysWriter::from_paths(Path::new("keys.csv"), None)?;
//! let summary = writer.write_all(lookup.process(locations))?;
//! println!("{} keys written", summary.successful);
//! # Ok(())
//! # }
//! ```

pub mod area_peril;
pub mod config;
pub mod coord;
pub mod keys;
pub mod location;
pub mod log;
pub mod logging;
pub mod lookup;
pub mod outcome;
mod table;
pub mod vulnerability;

/// Version of the quakekeys library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
