//! Loading the vulnerability dictionary from CSV.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::index::VulnerabilityIndex;
use super::key::KeyField;
use super::VulnerabilityError;
use crate::location::to_int;
use crate::table::{field, line_of, TableHeaders};

const ID_COLUMNS: &[&str] = &["vulnerability_id"];

impl VulnerabilityIndex {
    /// Build an index from a vulnerability CSV file.
    ///
    /// The file needs a `vulnerability_id` column and one column per key
    /// field, named after the field (`taxonomy`, `occupancy`).
    pub fn from_csv_path<P: AsRef<Path>>(
        path: P,
        key_fields: Vec<KeyField>,
    ) -> Result<Self, VulnerabilityError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VulnerabilityError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let index = Self::from_csv_reader(file, key_fields)?;

        tracing::info!(
            path = %path.display(),
            count = index.len(),
            "Loaded vulnerability dictionary"
        );

        Ok(index)
    }

    /// Build an index from CSV data in any reader.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        key_fields: Vec<KeyField>,
    ) -> Result<Self, VulnerabilityError> {
        if key_fields.is_empty() {
            return Err(VulnerabilityError::NoKeyFields);
        }

        let mut reader = csv::Reader::from_reader(reader);
        let headers = TableHeaders::new(reader.headers()?);

        let id_col = headers
            .position(ID_COLUMNS)
            .ok_or_else(|| VulnerabilityError::MissingColumn(ID_COLUMNS[0].to_string()))?;
        let key_cols = key_fields
            .iter()
            .map(|f| {
                headers
                    .position(&[f.name()])
                    .ok_or_else(|| VulnerabilityError::MissingColumn(f.name().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = line_of(&record);

            let raw_id = field(&record, id_col);
            let vulnerability_id = to_int(raw_id)
                .and_then(|v| u64::try_from(v).ok())
                .ok_or_else(|| VulnerabilityError::InvalidRow {
                    line,
                    message: format!("invalid vulnerability_id '{}'", raw_id),
                })?;

            let mut values = Vec::with_capacity(key_cols.len());
            for (key_field, &col) in key_fields.iter().zip(&key_cols) {
                let value = field(&record, col);
                if value.is_empty() {
                    return Err(VulnerabilityError::InvalidRow {
                        line,
                        message: format!("empty {}", key_field),
                    });
                }
                values.push(value.to_string());
            }

            entries.push((values, vulnerability_id));
        }

        Self::build(key_fields, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vulnerability::default_key_fields;

    #[test]
    fn test_load_dictionary() {
        let data = "\
VULNERABILITY_ID,TAXONOMY,OCCUPANCY
11,CR/LFINF,RES
12,CR/LFINF,COM
";
        let index = VulnerabilityIndex::from_csv_reader(data.as_bytes(), default_key_fields())
            .unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(["cr/lfinf", "com"]), Some(12));
    }

    #[test]
    fn test_taxonomy_only() {
        let data = "taxonomy,vulnerability_id,description\nW/LWAL,3,wood\n";
        let index =
            VulnerabilityIndex::from_csv_reader(data.as_bytes(), vec![KeyField::Taxonomy]).unwrap();
        assert_eq!(index.get(["W/LWAL"]), Some(3));
    }

    #[test]
    fn test_missing_key_column() {
        let data = "vulnerability_id,taxonomy\n1,W\n";
        let result = VulnerabilityIndex::from_csv_reader(data.as_bytes(), default_key_fields());
        assert!(matches!(result, Err(VulnerabilityError::MissingColumn(ref c)) if c == "occupancy"));
    }

    #[test]
    fn test_invalid_id_aborts_load() {
        let data = "vulnerability_id,taxonomy,occupancy\nabc,W,RES\n";
        let result = VulnerabilityIndex::from_csv_reader(data.as_bytes(), default_key_fields());
        assert!(matches!(
            result,
            Err(VulnerabilityError::InvalidRow { line: 2, .. })
        ));
    }

    #[test]
    fn test_empty_key_value_aborts_load() {
        let data = "vulnerability_id,taxonomy,occupancy\n1,W,\n";
        let result = VulnerabilityIndex::from_csv_reader(data.as_bytes(), default_key_fields());
        assert!(matches!(result, Err(VulnerabilityError::InvalidRow { .. })));
    }

    #[test]
    fn test_duplicate_rows_last_wins() {
        let data = "vulnerability_id,taxonomy,occupancy\n1,W,RES\n2,W,RES\n";
        let index = VulnerabilityIndex::from_csv_reader(data.as_bytes(), default_key_fields())
            .unwrap();
        assert_eq!(index.get(["W", "RES"]), Some(2));
    }

    #[test]
    fn test_from_csv_path_not_found() {
        let result =
            VulnerabilityIndex::from_csv_path("/nonexistent/vuln.csv", default_key_fields());
        assert!(matches!(result, Err(VulnerabilityError::NotFound(_))));
    }
}
