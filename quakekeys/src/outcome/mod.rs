//! Lookup outcomes and their reduction.
//!
//! Each index query produces a [`LookupOutcome`]. The two outcomes for a
//! location are reduced by [`merge`] into one composite status and message.

mod merge;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use merge::{merge, NO_MATCH_MESSAGE};

/// Status of a lookup.
///
/// Ordered by dominance when merging: `Success < NoMatch < Fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStatus {
    /// The lookup resolved an identifier
    Success,
    /// The input was valid but nothing matched
    NoMatch,
    /// The input could not be looked up
    Fail,
}

impl LookupStatus {
    /// Keys-file spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStatus::Success => "success",
            LookupStatus::NoMatch => "nomatch",
            LookupStatus::Fail => "fail",
        }
    }

    /// Returns true for [`LookupStatus::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, LookupStatus::Success)
    }
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(LookupStatus::Success),
            "nomatch" => Ok(LookupStatus::NoMatch),
            "fail" => Ok(LookupStatus::Fail),
            other => Err(format!("unknown lookup status '{}'", other)),
        }
    }
}

/// Result of one index query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    /// Query status
    pub status: LookupStatus,
    /// Resolved identifier, present only on success
    pub id: Option<u64>,
    /// Explanation for non-successful lookups, empty on success
    pub message: String,
}

impl LookupOutcome {
    /// A successful lookup of `id`.
    pub fn success(id: u64) -> Self {
        Self {
            status: LookupStatus::Success,
            id: Some(id),
            message: String::new(),
        }
    }

    /// A lookup that found nothing.
    pub fn no_match(message: impl Into<String>) -> Self {
        Self {
            status: LookupStatus::NoMatch,
            id: None,
            message: message.into(),
        }
    }

    /// A lookup that could not be performed.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: LookupStatus::Fail,
            id: None,
            message: message.into(),
        }
    }
}
