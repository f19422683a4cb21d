//! Loading the area-peril dictionary from CSV.
//!
//! The file needs an `areaperil_id`, `lon` and `lat` column (any case).
//! Other columns are ignored. Any unparseable row aborts the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::cell::GridSpacing;
use super::index::AreaPerilIndex;
use super::AreaPerilError;
use crate::location::{to_float, to_int};
use crate::table::{field, line_of, TableHeaders};

const ID_COLUMNS: &[&str] = &["areaperil_id", "area_peril_id"];
const LON_COLUMNS: &[&str] = &["lon", "longitude"];
const LAT_COLUMNS: &[&str] = &["lat", "latitude"];

impl AreaPerilIndex {
    /// Build an index from an area-peril CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(
        path: P,
        spacing: GridSpacing,
        bucket_size: f64,
    ) -> Result<Self, AreaPerilError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AreaPerilError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let index = Self::from_csv_reader(file, spacing, bucket_size)?;

        tracing::info!(
            path = %path.display(),
            count = index.len(),
            "Loaded area peril dictionary"
        );

        Ok(index)
    }

    /// Build an index from CSV data in any reader.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        spacing: GridSpacing,
        bucket_size: f64,
    ) -> Result<Self, AreaPerilError> {
        let cells = read_cells(reader)?;
        Self::build_with_bucket_size(spacing, bucket_size, cells)
    }
}

/// Parse every `(area_peril_id, lon, lat)` row of the dictionary.
fn read_cells<R: Read>(reader: R) -> Result<Vec<(u64, f64, f64)>, AreaPerilError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = TableHeaders::new(reader.headers()?);

    let id_col = headers
        .position(ID_COLUMNS)
        .ok_or_else(|| AreaPerilError::MissingColumn(ID_COLUMNS[0].to_string()))?;
    let lon_col = headers
        .position(LON_COLUMNS)
        .ok_or_else(|| AreaPerilError::MissingColumn(LON_COLUMNS[0].to_string()))?;
    let lat_col = headers
        .position(LAT_COLUMNS)
        .ok_or_else(|| AreaPerilError::MissingColumn(LAT_COLUMNS[0].to_string()))?;

    let mut cells = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = line_of(&record);

        let raw_id = field(&record, id_col);
        let id = to_int(raw_id)
            .and_then(|v| u64::try_from(v).ok())
            .ok_or_else(|| AreaPerilError::InvalidRow {
                line,
                message: format!("invalid areaperil_id '{}'", raw_id),
            })?;

        let lon = parse_coordinate(&record, lon_col, "lon", line)?;
        let lat = parse_coordinate(&record, lat_col, "lat", line)?;

        cells.push((id, lon, lat));
    }

    Ok(cells)
}

fn parse_coordinate(
    record: &csv::StringRecord,
    col: usize,
    name: &str,
    line: u64,
) -> Result<f64, AreaPerilError> {
    let raw = field(record, col);
    to_float(raw)
        .filter(|v| v.is_finite())
        .ok_or_else(|| AreaPerilError::InvalidRow {
            line,
            message: format!("invalid {} '{}'", name, raw),
        })
}
