//! Coordinate validation module
//!
//! Range checks for geographic coordinates in decimal degrees. Location rows
//! carry coordinates that may be absent or unparseable, so validation takes
//! `Option<f64>` and reports the first problem found.

mod types;

pub use types::{CoordError, GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Checks that a latitude is within -90..=90.
///
/// NaN and infinities are rejected because they fail the range test.
#[inline]
pub fn is_valid_lat(lat: f64) -> bool {
    (MIN_LAT..=MAX_LAT).contains(&lat)
}

/// Checks that a longitude is within -180..=180.
#[inline]
pub fn is_valid_lon(lon: f64) -> bool {
    (MIN_LON..=MAX_LON).contains(&lon)
}

/// Validates an optional longitude/latitude pair.
///
/// # Arguments
///
/// * `lon` - Longitude in degrees, `None` if it failed to parse
/// * `lat` - Latitude in degrees, `None` if it failed to parse
///
/// # Returns
///
/// A `GeoPoint` when both values are present and in range.
#[inline]
pub fn validate_lon_lat(lon: Option<f64>, lat: Option<f64>) -> Result<GeoPoint, CoordError> {
    let lat = lat.ok_or(CoordError::MissingLatitude)?;
    let lon = lon.ok_or(CoordError::MissingLongitude)?;

    if !is_valid_lat(lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !is_valid_lon(lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }

    Ok(GeoPoint { lon, lat })
}
