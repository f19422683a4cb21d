//! Vulnerability lookup: which risk class matches a location's attributes.
//!
//! The [`VulnerabilityIndex`] maps a canonical [`ClassificationKey`] built
//! from the configured [`KeyField`]s to a vulnerability id.
//!
//! # Usage
//!
//! ```
//! use quakekeys::vulnerability::{default_key_fields, VulnerabilityIndex};
//!
//! let index = VulnerabilityIndex::build(
//!     default_key_fields(),
//!     vec![(vec!["CR/LFINF", "RES"], 11)],
//! )
//! .unwrap();
//!
//! assert_eq!(index.get(["cr/lfinf", "res"]), Some(11));
//! ```

mod index;
mod key;
mod loader;

use std::path::PathBuf;

pub use index::{VulnerabilityIndex, NO_VULNERABILITY_MESSAGE};
pub use key::{default_key_fields, ClassificationKey, KeyField};

/// Error type for building the vulnerability index.
#[derive(Debug, thiserror::Error)]
pub enum VulnerabilityError {
    #[error("Vulnerability key needs at least one field")]
    NoKeyFields,
    #[error("Vulnerability entry has {found} key values, expected {expected}")]
    FieldCountMismatch { expected: usize, found: usize },
    #[error("Vulnerability dictionary not found at: {0}")]
    NotFound(PathBuf),
    #[error("Vulnerability dictionary has no '{0}' column")]
    MissingColumn(String),
    #[error("Invalid vulnerability row at line {line}: {message}")]
    InvalidRow { line: u64, message: String },
    #[error("Failed to read vulnerability dictionary: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
