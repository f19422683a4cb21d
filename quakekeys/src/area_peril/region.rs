//! Grid bucket coordinate type.
//!
//! A [`GridRegion`] identifies one square bucket of the area-peril index.
//! Buckets are `size` degrees on a side and identified by the floor of
//! latitude and longitude divided by `size`. With a 1° bucket this is the
//! familiar 1°×1° tile naming (`+43+006`).

use std::fmt;

use super::AreaCell;

/// A square grid bucket, identified by its south-west corner index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridRegion {
    /// Floor of latitude / bucket size (south edge).
    pub lat: i32,
    /// Floor of longitude / bucket size (west edge).
    pub lon: i32,
}

impl GridRegion {
    /// Create a region from integer bucket indices.
    pub fn new(lat: i32, lon: i32) -> Self {
        Self { lat, lon }
    }

    /// The region containing a point.
    ///
    /// Points on a bucket edge belong to the bucket to their north/east.
    pub fn containing(lon: f64, lat: f64, size: f64) -> Self {
        Self {
            lat: (lat / size).floor() as i32,
            lon: (lon / size).floor() as i32,
        }
    }

    /// Every region a cell's box overlaps, edges included.
    pub fn covering(cell: &AreaCell, size: f64) -> impl Iterator<Item = GridRegion> {
        let south_west = Self::containing(cell.min_lon, cell.min_lat, size);
        let north_east = Self::containing(cell.max_lon, cell.max_lat, size);

        (south_west.lat..=north_east.lat).flat_map(move |lat| {
            (south_west.lon..=north_east.lon).map(move |lon| GridRegion::new(lat, lon))
        })
    }
}

impl fmt::Display for GridRegion {
    /// Format as a signed bucket name (e.g., `+43+006`, `-46+012`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+03}{:+04}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area_peril::GridSpacing;

    #[test]
    fn test_containing_positive() {
        let region = GridRegion::containing(7.23, 43.67, 1.0);
        assert_eq!(region, GridRegion::new(43, 7));
    }

    #[test]
    fn test_containing_negative() {
        let region = GridRegion::containing(-118.4, -33.9, 1.0);
        assert_eq!(region.lat, -34);
        assert_eq!(region.lon, -119);
    }

    #[test]
    fn test_containing_fractional_size() {
        let region = GridRegion::containing(10.3, 20.6, 0.5);
        assert_eq!(region, GridRegion::new(41, 20));
    }

    #[test]
    fn test_covering_single_bucket() {
        let spacing = GridSpacing::new(0.05).unwrap();
        let cell = AreaCell::around(1, 10.5, 20.5, spacing);
        let regions: Vec<_> = GridRegion::covering(&cell, 1.0).collect();
        assert_eq!(regions, vec![GridRegion::new(20, 10)]);
    }

    #[test]
    fn test_covering_straddles_corner() {
        let spacing = GridSpacing::new(0.05).unwrap();
        let cell = AreaCell::around(1, 10.0, 20.0, spacing);
        let regions: Vec<_> = GridRegion::covering(&cell, 1.0).collect();
        assert_eq!(regions.len(), 4);
        assert!(regions.contains(&GridRegion::new(19, 9)));
        assert!(regions.contains(&GridRegion::new(19, 10)));
        assert!(regions.contains(&GridRegion::new(20, 9)));
        assert!(regions.contains(&GridRegion::new(20, 10)));
    }

    #[test]
    fn test_display() {
        assert_eq!(GridRegion::new(43, 6).to_string(), "+43+006");
        assert_eq!(GridRegion::new(-46, 12).to_string(), "-46+012");
        assert_eq!(GridRegion::new(33, -119).to_string(), "+33-119");
    }
}
