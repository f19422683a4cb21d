//! Header handling shared by the reference-table loaders.

use csv::StringRecord;

/// Column positions of a CSV header row, matched case-insensitively.
pub(crate) struct TableHeaders {
    names: Vec<String>,
}

impl TableHeaders {
    pub(crate) fn new(headers: &StringRecord) -> Self {
        Self {
            names: headers.iter().map(|h| h.trim().to_lowercase()).collect(),
        }
    }

    /// Position of the first column matching any of `aliases`.
    pub(crate) fn position(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            let alias = alias.to_lowercase();
            self.names.iter().position(|name| *name == alias)
        })
    }
}

/// Trimmed field `idx` of a record, `""` when the row is short.
pub(crate) fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

/// One-based line number of a record, for error messages.
pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ignores_case_and_whitespace() {
        let headers = TableHeaders::new(&StringRecord::from(vec![" AreaPeril_ID", "LON", "lat"]));
        assert_eq!(headers.position(&["areaperil_id"]), Some(0));
        assert_eq!(headers.position(&["lon"]), Some(1));
        assert_eq!(headers.position(&["missing", "LAT"]), Some(2));
        assert_eq!(headers.position(&["missing"]), None);
    }

    #[test]
    fn test_field_short_row() {
        let record = StringRecord::from(vec![" 1 "]);
        assert_eq!(field(&record, 0), "1");
        assert_eq!(field(&record, 3), "");
    }
}
