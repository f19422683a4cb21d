//! Location rows and their validation.
//!
//! A [`RawRow`] is one row of an exposure file as name → text pairs. Field
//! names are matched case-insensitively. [`LocationRecord::from_row`] turns a
//! raw row into typed values using a [`LocationSchema`] that maps logical
//! fields to the source column names of the exposure file.
//!
//! Only the row identifier is mandatory. Coordinates are parsed but not range
//! checked here; the area-peril lookup reports bad coordinates per row so a
//! single bad location never aborts a batch.
//!
//! # Example
//!
//! ```
//! use quakekeys::location::{LocationRecord, LocationSchema, RawRow};
//!
//! let row: RawRow = [
//!     ("row_id", "1"),
//!     ("Longitude", "10.0"),
//!     ("LATITUDE", "20.0"),
//!     ("cov1", "1"),
//!     ("bldgclass", "CR/LFINF"),
//!     ("occtype", "RES"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let record = LocationRecord::from_row(&row, &LocationSchema::default()).unwrap();
//! assert_eq!(record.id, 1);
//! assert_eq!(record.lat, Some(20.0));
//! ```

mod reader;
mod values;

use std::collections::HashMap;

pub use reader::{LocationReadError, LocationReader};
pub use values::{to_float, to_int, to_text};

/// Errors that make a location row unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The identifier column is absent from the row.
    #[error("Location row has no '{header}' column")]
    MissingId { header: String },

    /// The identifier could not be parsed as an integer.
    #[error("Invalid location id in column '{header}': '{value}'")]
    InvalidId { header: String, value: String },
}

/// One raw input row with case-insensitive field names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any value already stored under the same name.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.trim().to_lowercase(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get a field value by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = RawRow::new();
        for (name, value) in iter {
            row.insert(name.as_ref(), value);
        }
        row
    }
}

/// Source column names for each logical location field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSchema {
    /// Location identifier column
    pub id: String,
    /// Longitude column
    pub lon: String,
    /// Latitude column
    pub lat: String,
    /// Coverage code column
    pub coverage: String,
    /// Primary classification column (building class)
    pub taxonomy: String,
    /// Secondary classification column (occupancy type)
    pub occupancy: String,
}

impl Default for LocationSchema {
    fn default() -> Self {
        Self {
            id: "ROW_ID".to_string(),
            lon: "LONGITUDE".to_string(),
            lat: "LATITUDE".to_string(),
            coverage: "COV1".to_string(),
            taxonomy: "BLDGCLASS".to_string(),
            occupancy: "OCCTYPE".to_string(),
        }
    }
}

/// A validated location.
///
/// `None` in a numeric field means the value was missing or unparseable.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    /// Location identifier, unique within a batch
    pub id: i64,
    /// Longitude in degrees
    pub lon: Option<f64>,
    /// Latitude in degrees
    pub lat: Option<f64>,
    /// Coverage code
    pub coverage: Option<i64>,
    /// Building class
    pub taxonomy: String,
    /// Occupancy type
    pub occupancy: String,
}

impl LocationRecord {
    /// Validate a raw row against a schema.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the identifier is missing or not an
    /// integer. Every other field degrades to `None` or an empty string.
    pub fn from_row(row: &RawRow, schema: &LocationSchema) -> Result<Self, ValidationError> {
        let raw_id = row
            .get(&schema.id)
            .ok_or_else(|| ValidationError::MissingId {
                header: schema.id.clone(),
            })?;
        let id = to_int(raw_id).ok_or_else(|| ValidationError::InvalidId {
            header: schema.id.clone(),
            value: raw_id.to_string(),
        })?;

        Ok(Self {
            id,
            lon: row.get(&schema.lon).and_then(to_float),
            lat: row.get(&schema.lat).and_then(to_float),
            coverage: row.get(&schema.coverage).and_then(to_int),
            taxonomy: row.get(&schema.taxonomy).map(to_text).unwrap_or_default(),
            occupancy: row.get(&schema.occupancy).map(to_text).unwrap_or_default(),
        })
    }
}
