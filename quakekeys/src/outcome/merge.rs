//! Reduction of two lookup outcomes into one composite status.

use super::{LookupOutcome, LookupStatus};

/// Message used when neither outcome failed but at least one found nothing.
pub const NO_MATCH_MESSAGE: &str = "No area peril or vulnerability match";

/// Merge the area-peril and vulnerability outcomes of one location.
///
/// - both `Success` → `Success` with an empty message
/// - either `Fail` → `Fail`, both sub-messages joined by `", "`
/// - otherwise `NoMatch` with [`NO_MATCH_MESSAGE`]; sub-messages are dropped
///
/// Only the statuses decide the result. Identifiers are carried separately
/// by the caller.
pub fn merge(area_peril: &LookupOutcome, vulnerability: &LookupOutcome) -> (LookupStatus, String) {
    match (area_peril.status, vulnerability.status) {
        (LookupStatus::Success, LookupStatus::Success) => (LookupStatus::Success, String::new()),
        (LookupStatus::Fail, _) | (_, LookupStatus::Fail) => (
            LookupStatus::Fail,
            format!("{}, {}", area_peril.message, vulnerability.message),
        ),
        _ => (LookupStatus::NoMatch, NO_MATCH_MESSAGE.to_string()),
    }
}
