//! Output records of the lookup engine.

use serde::Serialize;

use super::model::PerilId;
use crate::location::LocationRecord;
use crate::outcome::{merge, LookupOutcome, LookupStatus};

/// Keys lookup result for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    /// Location identifier
    pub id: i64,
    /// Hazard type of the engine that produced the record
    pub peril_id: PerilId,
    /// Coverage code of the location
    pub coverage: Option<i64>,
    /// Coverage type; currently the coverage code itself
    pub coverage_type: Option<i64>,
    /// Area-peril id, present when the spatial lookup succeeded
    pub area_peril_id: Option<u64>,
    /// Vulnerability id, present when the attribute lookup succeeded
    pub vulnerability_id: Option<u64>,
    /// Explanation for non-successful records
    pub message: String,
    /// Composite status
    pub status: LookupStatus,
}

impl OutputRecord {
    /// Combine the two lookup outcomes of a location.
    pub fn from_outcomes(
        location: &LocationRecord,
        peril_id: PerilId,
        area_peril: &LookupOutcome,
        vulnerability: &LookupOutcome,
    ) -> Self {
        let (status, message) = merge(area_peril, vulnerability);
        Self {
            id: location.id,
            peril_id,
            coverage: location.coverage,
            coverage_type: location.coverage,
            area_peril_id: success_id(area_peril),
            vulnerability_id: success_id(vulnerability),
            message,
            status,
        }
    }
}

fn success_id(outcome: &LookupOutcome) -> Option<u64> {
    outcome.id.filter(|_| outcome.status.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> LocationRecord {
        LocationRecord {
            id: 17,
            lon: Some(10.0),
            lat: Some(20.0),
            coverage: Some(3),
            taxonomy: "W".to_string(),
            occupancy: "RES".to_string(),
        }
    }

    #[test]
    fn test_success_record() {
        let record = OutputRecord::from_outcomes(
            &location(),
            PerilId::Quake,
            &LookupOutcome::success(1),
            &LookupOutcome::success(11),
        );
        assert_eq!(record.id, 17);
        assert_eq!(record.coverage, Some(3));
        assert_eq!(record.coverage_type, Some(3));
        assert_eq!(record.area_peril_id, Some(1));
        assert_eq!(record.vulnerability_id, Some(11));
        assert_eq!(record.status, LookupStatus::Success);
        assert!(record.message.is_empty());
    }

    #[test]
    fn test_partial_match_keeps_successful_id() {
        let record = OutputRecord::from_outcomes(
            &location(),
            PerilId::Quake,
            &LookupOutcome::no_match("No intersecting cell found"),
            &LookupOutcome::success(11),
        );
        assert_eq!(record.status, LookupStatus::NoMatch);
        assert_eq!(record.area_peril_id, None);
        assert_eq!(record.vulnerability_id, Some(11));
    }

    #[test]
    fn test_id_dropped_unless_success() {
        let odd = LookupOutcome {
            status: LookupStatus::NoMatch,
            id: Some(5),
            message: String::new(),
        };
        let record =
            OutputRecord::from_outcomes(&location(), PerilId::Quake, &odd, &LookupOutcome::success(1));
        assert_eq!(record.area_peril_id, None);
    }

    #[test]
    fn test_serializes_with_codes() {
        let record = OutputRecord::from_outcomes(
            &location(),
            PerilId::Quake,
            &LookupOutcome::fail("Invalid lat/lon"),
            &LookupOutcome::success(11),
        );

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&record).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,peril_id,coverage,coverage_type,area_peril_id,vulnerability_id,message,status")
        );
        assert_eq!(lines.next(), Some("17,2,3,3,,11,\"Invalid lat/lon, \",fail"));
    }
}
