//! CSV writer for keys and errors files.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::lookup::{LookupError, OutputRecord, PerilId};
use crate::outcome::LookupStatus;

/// Header of the successful-keys file.
pub const KEYS_HEADER: [&str; 5] = [
    "LocID",
    "PerilID",
    "CoverageTypeID",
    "AreaPerilID",
    "VulnerabilityID",
];

/// Header of the non-successful-keys file.
pub const ERRORS_HEADER: [&str; 5] = ["LocID", "PerilID", "CoverageTypeID", "Status", "Message"];

/// Errors raised while writing keys files.
#[derive(Debug, Error)]
pub enum KeysWriteError {
    #[error("Failed to create keys file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write keys record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush keys file: {0}")]
    Io(#[from] std::io::Error),

    /// The lookup stream aborted; rows written so far are kept.
    #[error("Keys lookup aborted: {0}")]
    Lookup(#[from] LookupError),
}

/// Counts of rows written by a [`KeysWriter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeysSummary {
    /// Rows in the keys file
    pub successful: usize,
    /// Non-successful records, written or not
    pub nonsuccessful: usize,
}

#[derive(Serialize)]
struct KeyRow {
    loc_id: i64,
    peril_id: PerilId,
    coverage_type_id: Option<i64>,
    area_peril_id: Option<u64>,
    vulnerability_id: Option<u64>,
}

#[derive(Serialize)]
struct ErrorRow<'a> {
    loc_id: i64,
    peril_id: PerilId,
    coverage_type_id: Option<i64>,
    status: LookupStatus,
    message: &'a str,
}

/// Splits output records between a keys file and an optional errors file.
pub struct KeysWriter<W: Write> {
    keys: csv::Writer<W>,
    errors: Option<csv::Writer<W>>,
    summary: KeysSummary,
}

impl KeysWriter<File> {
    /// Create (truncating) the keys file and, if given, the errors file.
    pub fn from_paths(keys: &Path, errors: Option<&Path>) -> Result<Self, KeysWriteError> {
        let keys = create(keys)?;
        let errors = errors.map(create).transpose()?;
        Self::from_csv(keys, errors)
    }
}

impl<W: Write> KeysWriter<W> {
    /// Write to arbitrary sinks.
    pub fn from_writers(keys: W, errors: Option<W>) -> Result<Self, KeysWriteError> {
        Self::from_csv(builder().from_writer(keys), errors.map(|w| builder().from_writer(w)))
    }

    fn from_csv(
        mut keys: csv::Writer<W>,
        mut errors: Option<csv::Writer<W>>,
    ) -> Result<Self, KeysWriteError> {
        keys.write_record(KEYS_HEADER)?;
        if let Some(errors) = errors.as_mut() {
            errors.write_record(ERRORS_HEADER)?;
        }
        Ok(Self {
            keys,
            errors,
            summary: KeysSummary::default(),
        })
    }

    /// Write one record to the file matching its status.
    pub fn write(&mut self, record: &OutputRecord) -> Result<(), KeysWriteError> {
        if record.status.is_success() {
            self.keys.serialize(KeyRow {
                loc_id: record.id,
                peril_id: record.peril_id,
                coverage_type_id: record.coverage_type,
                area_peril_id: record.area_peril_id,
                vulnerability_id: record.vulnerability_id,
            })?;
            self.summary.successful += 1;
        } else {
            if let Some(errors) = self.errors.as_mut() {
                errors.serialize(ErrorRow {
                    loc_id: record.id,
                    peril_id: record.peril_id,
                    coverage_type_id: record.coverage_type,
                    status: record.status,
                    message: &record.message,
                })?;
            }
            self.summary.nonsuccessful += 1;
        }
        Ok(())
    }

    /// Drain a lookup stream into the files.
    ///
    /// Stops at the first stream error, after flushing what was written.
    pub fn write_all<I>(&mut self, records: I) -> Result<KeysSummary, KeysWriteError>
    where
        I: IntoIterator<Item = Result<OutputRecord, LookupError>>,
    {
        for record in records {
            match record {
                Ok(record) => self.write(&record)?,
                Err(e) => {
                    self.flush()?;
                    return Err(e.into());
                }
            }
        }
        self.flush()?;
        Ok(self.summary)
    }

    /// Counts so far.
    pub fn summary(&self) -> KeysSummary {
        self.summary
    }

    /// Flush both files.
    pub fn flush(&mut self) -> Result<(), KeysWriteError> {
        self.keys.flush()?;
        if let Some(errors) = self.errors.as_mut() {
            errors.flush()?;
        }
        Ok(())
    }

    /// Flush and return the final counts.
    pub fn finish(mut self) -> Result<KeysSummary, KeysWriteError> {
        self.flush()?;
        tracing::info!(
            successful = self.summary.successful,
            nonsuccessful = self.summary.nonsuccessful,
            "Keys written"
        );
        Ok(self.summary)
    }
}

fn builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.has_headers(false);
    builder
}

fn create(path: &Path) -> Result<csv::Writer<File>, KeysWriteError> {
    builder()
        .from_path(path)
        .map_err(|source| KeysWriteError::Create {
            path: path.to_path_buf(),
            source,
        })
}
