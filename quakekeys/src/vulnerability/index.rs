//! Exact-match index from classification key to vulnerability id.

use std::collections::HashMap;

use super::key::{ClassificationKey, KeyField};
use super::VulnerabilityError;
use crate::location::LocationRecord;
use crate::outcome::LookupOutcome;

/// Message for a record whose key is not in the dictionary.
pub const NO_VULNERABILITY_MESSAGE: &str = "No vulnerability match";

/// Immutable vulnerability dictionary.
///
/// Later entries with an already-seen key replace earlier ones (last write
/// wins); each replacement is logged as a warning.
#[derive(Debug, Clone)]
pub struct VulnerabilityIndex {
    key_fields: Vec<KeyField>,
    entries: HashMap<ClassificationKey, u64>,
}

impl VulnerabilityIndex {
    /// A dictionary with no entries; every query is a no-match.
    pub fn empty(key_fields: Vec<KeyField>) -> Result<Self, VulnerabilityError> {
        if key_fields.is_empty() {
            return Err(VulnerabilityError::NoKeyFields);
        }
        Ok(Self {
            key_fields,
            entries: HashMap::new(),
        })
    }

    /// Build from `(field values, vulnerability_id)` entries.
    ///
    /// Field values are given in `key_fields` order.
    pub fn build<I, V, S>(key_fields: Vec<KeyField>, entries: I) -> Result<Self, VulnerabilityError>
    where
        I: IntoIterator<Item = (V, u64)>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::empty(key_fields)?;

        for (values, vulnerability_id) in entries {
            let values: Vec<S> = values.into_iter().collect();
            if values.len() != index.key_fields.len() {
                return Err(VulnerabilityError::FieldCountMismatch {
                    expected: index.key_fields.len(),
                    found: values.len(),
                });
            }

            let key = ClassificationKey::from_values(&values);
            if let Some(previous) = index.entries.insert(key.clone(), vulnerability_id) {
                tracing::warn!(
                    key = %key,
                    previous,
                    replacement = vulnerability_id,
                    "Duplicate vulnerability key, keeping the later entry"
                );
            }
        }

        tracing::debug!(
            count = index.entries.len(),
            key_fields = ?index.key_fields,
            "Built vulnerability index"
        );

        Ok(index)
    }

    /// Look up the vulnerability for a location.
    ///
    /// Never fails: an empty key field or an unknown key is a no-match.
    pub fn query(&self, record: &LocationRecord) -> LookupOutcome {
        if let Some(field) = self
            .key_fields
            .iter()
            .find(|field| field.value_of(record).trim().is_empty())
        {
            return LookupOutcome::no_match(format!("Missing vulnerability key field: {}", field));
        }

        let key = self.key_for(record);
        match self.entries.get(&key) {
            Some(&vulnerability_id) => LookupOutcome::success(vulnerability_id),
            None => LookupOutcome::no_match(NO_VULNERABILITY_MESSAGE),
        }
    }

    /// Canonical key of a record under this index's key fields.
    pub fn key_for(&self, record: &LocationRecord) -> ClassificationKey {
        ClassificationKey::from_values(self.key_fields.iter().map(|f| f.value_of(record)))
    }

    /// Get the vulnerability id for raw field values.
    pub fn get<I, S>(&self, values: I) -> Option<u64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries
            .get(&ClassificationKey::from_values(values))
            .copied()
    }

    /// Fields making up the key, in order.
    pub fn key_fields(&self) -> &[KeyField] {
        &self.key_fields
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::LookupStatus;
    use crate::vulnerability::default_key_fields;

    fn record(taxonomy: &str, occupancy: &str) -> LocationRecord {
        LocationRecord {
            id: 1,
            lon: Some(10.0),
            lat: Some(20.0),
            coverage: Some(1),
            taxonomy: taxonomy.to_string(),
            occupancy: occupancy.to_string(),
        }
    }

    fn index() -> VulnerabilityIndex {
        VulnerabilityIndex::build(
            default_key_fields(),
            vec![
                (vec!["CR/LFINF", "RES"], 11),
                (vec!["CR/LFINF", "COM"], 12),
                (vec!["W/LWAL", "RES"], 21),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_match() {
        let outcome = index().query(&record("CR/LFINF", "RES"));
        assert_eq!(outcome, LookupOutcome::success(11));
    }

    #[test]
    fn test_match_is_case_and_whitespace_insensitive() {
        let outcome = index().query(&record(" cr/lfinf", "com "));
        assert_eq!(outcome.id, Some(12));
    }

    #[test]
    fn test_unknown_key_no_match() {
        let outcome = index().query(&record("W/LWAL", "COM"));
        assert_eq!(outcome.status, LookupStatus::NoMatch);
        assert_eq!(outcome.message, NO_VULNERABILITY_MESSAGE);
        assert_eq!(outcome.id, None);
    }

    #[test]
    fn test_missing_field_no_match() {
        let outcome = index().query(&record("CR/LFINF", "  "));
        assert_eq!(outcome.status, LookupStatus::NoMatch);
        assert_eq!(outcome.message, "Missing vulnerability key field: occupancy");
    }

    #[test]
    fn test_separator_inside_value_is_not_a_match() {
        let index =
            VulnerabilityIndex::build(default_key_fields(), vec![(vec!["A|B", "C"], 7)]).unwrap();

        let outcome = index.query(&record("A", "B|C"));
        assert_eq!(outcome.status, LookupStatus::NoMatch);
        assert_eq!(outcome.id, None);

        assert_eq!(index.query(&record("a|b", "c")).id, Some(7));
    }

    #[test]
    fn test_last_write_wins() {
        let index = VulnerabilityIndex::build(
            default_key_fields(),
            vec![(vec!["W", "RES"], 1), (vec!["w", "res"], 2)],
        )
        .unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(["W", "RES"]), Some(2));
    }

    #[test]
    fn test_single_field_key() {
        let index =
            VulnerabilityIndex::build(vec![KeyField::Taxonomy], vec![(vec!["W"], 5)]).unwrap();
        assert_eq!(index.query(&record("w", "")).id, Some(5));
        assert_eq!(index.key_fields(), &[KeyField::Taxonomy]);
    }

    #[test]
    fn test_no_key_fields_rejected() {
        let result = VulnerabilityIndex::build(Vec::new(), Vec::<(Vec<&str>, u64)>::new());
        assert!(matches!(result, Err(VulnerabilityError::NoKeyFields)));
    }

    #[test]
    fn test_field_count_mismatch_rejected() {
        let result = VulnerabilityIndex::build(default_key_fields(), vec![(vec!["W"], 1)]);
        assert!(matches!(
            result,
            Err(VulnerabilityError::FieldCountMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_empty_index() {
        let index = VulnerabilityIndex::empty(default_key_fields()).unwrap();
        assert!(index.is_empty());
        assert_eq!(
            index.query(&record("W", "RES")).status,
            LookupStatus::NoMatch
        );
    }
}
