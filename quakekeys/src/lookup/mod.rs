//! Keys lookup engines.
//!
//! A lookup engine resolves each location row into an [`OutputRecord`]
//! carrying an area-peril id, a vulnerability id and a composite status.
//!
//! # Architecture
//!
//! ```text
//! RawRow ──► LocationRecord::from_row ──┬─► AreaPerilIndex::lookup ──────┐
//!                                       └─► VulnerabilityIndex::query ───┴─► merge ─► OutputRecord
//! ```
//!
//! Model variants implement [`KeysLookup`]. [`KeysLookup::process`] returns
//! a [`KeysStream`] that yields one record per input row, in input order.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use quakekeys::area_peril::{AreaPerilIndex, GridSpacing};
//! use quakekeys::location::RawRow;
//! use quakekeys::lookup::{KeysLookup, QuakeKeysLookup, QuakeReference};
//! use quakekeys::outcome::LookupStatus;
//! use quakekeys::vulnerability::{default_key_fields, VulnerabilityIndex};
//!
//! let area_perils = AreaPerilIndex::build(GridSpacing::default(), vec![(1, 10.0, 20.0)]).unwrap();
//! let vulnerabilities =
//!     VulnerabilityIndex::build(default_key_fields(), vec![(vec!["W", "RES"], 7)]).unwrap();
//! let lookup =
//!     QuakeKeysLookup::build(QuakeReference::new(Arc::new(area_perils), Arc::new(vulnerabilities)))
//!         .unwrap();
//!
//! let row = RawRow::new()
//!     .with("ROW_ID", "1")
//!     .with("LONGITUDE", "10.0")
//!     .with("LATITUDE", "20.0")
//!     .with("COV1", "1")
//!     .with("BLDGCLASS", "W")
//!     .with("OCCTYPE", "RES");
//!
//! let records: Vec<_> = lookup.process(vec![row]).collect::<Result<_, _>>().unwrap();
//! assert_eq!(records[0].status, LookupStatus::Success);
//! assert_eq!(records[0].vulnerability_id, Some(7));
//! ```

mod model;
mod quake;
mod record;
mod settings;
mod stream;

pub use model::{ModelInfo, PerilId};
pub use quake::{QuakeKeysLookup, QuakeReference};
pub use record::OutputRecord;
pub use settings::{LookupSettings, DEFAULT_AREAPERIL_FILE, DEFAULT_VULNERABILITY_FILE};
pub use stream::{BatchState, BatchSummary, IntoRawRow, KeysStream};

use crate::area_peril::AreaPerilError;
use crate::location::{LocationReadError, LocationRecord, LocationSchema, RawRow, ValidationError};
use crate::vulnerability::VulnerabilityError;

/// Error type for building engines and processing batches.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid location: {0}")]
    Validation(#[from] ValidationError),
    #[error("Failed to read locations: {0}")]
    LocationRead(#[from] LocationReadError),
    #[error("Failed to build area peril index: {0}")]
    AreaPeril(#[from] AreaPerilError),
    #[error("Failed to build vulnerability index: {0}")]
    Vulnerability(#[from] VulnerabilityError),
}

/// Capability interface of a keys lookup engine.
///
/// An engine is built once from its reference data and is read-only
/// afterwards. Implementors supply [`build`](Self::build),
/// [`lookup_location`](Self::lookup_location) and the location schema; row
/// validation and batch streaming are provided.
pub trait KeysLookup: Sized {
    /// Reference data the engine is built from.
    type Reference;

    /// Build the engine.
    fn build(reference: Self::Reference) -> Result<Self, LookupError>;

    /// Peril tagged on every output record.
    fn peril_id(&self) -> PerilId;

    /// Column names used to read location rows.
    fn schema(&self) -> &LocationSchema;

    /// Resolve one validated location.
    fn lookup_location(&self, location: &LocationRecord) -> OutputRecord;

    /// Validate and resolve one raw row.
    ///
    /// # Errors
    ///
    /// Fails only when the row has no usable location id.
    fn lookup_row(&self, row: &RawRow) -> Result<OutputRecord, LookupError> {
        let location = LocationRecord::from_row(row, self.schema())?;
        Ok(self.lookup_location(&location))
    }

    /// Stream output records for a batch of rows.
    fn process<I>(&self, rows: I) -> KeysStream<'_, Self, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: IntoRawRow,
    {
        KeysStream::new(self, rows.into_iter())
    }
}
