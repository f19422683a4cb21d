//! Streaming CSV reader for location files.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::RawRow;

/// Error type for reading location files.
#[derive(Debug, thiserror::Error)]
pub enum LocationReadError {
    #[error("Failed to open locations file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to read locations header: {0}")]
    Header(#[source] csv::Error),
    #[error("Failed to read location row at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Lazily yields [`RawRow`]s from a location CSV with a header row.
///
/// Rows are read on demand, so large exposure files are never held in
/// memory. Header names are kept as written; [`RawRow`] handles case.
pub struct LocationReader<R: Read> {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
}

impl LocationReader<File> {
    /// Open a location file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LocationReadError> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| LocationReadError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Opened locations file");
        Self::from_csv(reader)
    }
}

impl<R: Read> LocationReader<R> {
    /// Read locations from any reader.
    pub fn from_reader(reader: R) -> Result<Self, LocationReadError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_csv(reader)
    }

    fn from_csv(mut reader: csv::Reader<R>) -> Result<Self, LocationReadError> {
        let headers = reader
            .headers()
            .map_err(LocationReadError::Header)?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Self {
            headers,
            records: reader.into_records(),
        })
    }

    /// Column names from the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for LocationReader<R> {
    type Item = Result<RawRow, LocationReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(source) => {
                let line = source.position().map(|p| p.line()).unwrap_or(0);
                return Some(Err(LocationReadError::Row { line, source }));
            }
        };

        Some(Ok(self
            .headers
            .iter()
            .map(String::as_str)
            .zip(record.iter())
            .collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATIONS: &str = "\
ROW_ID,LONGITUDE,LATITUDE,COV1,BLDGCLASS,OCCTYPE
1,10.0,20.0,1,CR/LFINF,RES
2, 10.5 ,20.5,3,W/LWAL,COM
";

    #[test]
    fn test_reads_rows_in_order() {
        let reader = LocationReader::from_reader(LOCATIONS.as_bytes()).unwrap();
        assert_eq!(reader.headers().len(), 6);

        let rows: Vec<RawRow> = reader.map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("row_id"), Some("1"));
        assert_eq!(rows[1].get("longitude"), Some("10.5"));
        assert_eq!(rows[1].get("OCCTYPE"), Some("COM"));
    }

    #[test]
    fn test_ragged_row_is_error() {
        let data = "ROW_ID,LONGITUDE\n1,2\n3\n";
        let mut reader = LocationReader::from_reader(data.as_bytes()).unwrap();
        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, LocationReadError::Row { .. }));
    }

    #[test]
    fn test_missing_file() {
        let result = LocationReader::from_path("/nonexistent/locations.csv");
        assert!(matches!(result, Err(LocationReadError::Open { .. })));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let reader = LocationReader::from_reader("ROW_ID\n".as_bytes()).unwrap();
        assert_eq!(reader.count(), 0);
    }
}
