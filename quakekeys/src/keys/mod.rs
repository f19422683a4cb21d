//! Keys file output.
//!
//! A keys run produces two CSV files:
//!
//! - the keys file, one row per successful location:
//!   `LocID,PerilID,CoverageTypeID,AreaPerilID,VulnerabilityID`
//! - an optional errors file, one row per `nomatch`/`fail` location:
//!   `LocID,PerilID,CoverageTypeID,Status,Message`
//!
//! Without an errors file, non-successful records are counted and dropped.

mod writer;

pub use writer::{KeysSummary, KeysWriteError, KeysWriter, ERRORS_HEADER, KEYS_HEADER};
