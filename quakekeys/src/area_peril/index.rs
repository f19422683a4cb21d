//! AreaPerilIndex: point-in-cell lookup over a frozen set of area cells.
//!
//! Cells are registered in every fixed-size [`GridRegion`] bucket their box
//! overlaps. A query hashes the point to its bucket and scans only that
//! bucket, so cost depends on local cell density rather than table size.
//!
//! # Tie-break
//!
//! Overlapping cells are valid reference data. When several cells contain a
//! point the lowest `area_peril_id` wins. Buckets are sorted by id at build
//! time so the first containing cell in a bucket is the answer.

use std::collections::HashMap;

use super::cell::{AreaCell, GridSpacing};
use super::region::GridRegion;
use super::{AreaPerilError, DEFAULT_BUCKET_SIZE};
use crate::coord::{validate_lon_lat, GeoPoint};
use crate::outcome::LookupOutcome;

/// Message for coordinates that are missing or out of range.
pub const INVALID_COORDINATES_MESSAGE: &str = "Invalid lat/lon";

/// Message for valid coordinates outside every cell.
pub const NO_CELL_MESSAGE: &str = "No intersecting cell found";

/// Immutable spatial index of area cells.
///
/// Built once by [`AreaPerilIndex::build`] and read-only afterwards. The
/// index owns all of its state, so independently configured engines never
/// see each other's cells. Share it between threads with `Arc`.
#[derive(Debug, Clone)]
pub struct AreaPerilIndex {
    spacing: GridSpacing,
    bucket_size: f64,
    cells: Vec<AreaCell>,
    by_id: HashMap<u64, usize>,
    buckets: HashMap<GridRegion, Vec<usize>>,
}

impl AreaPerilIndex {
    /// An index with no cells; every valid query is a no-match.
    pub fn empty(spacing: GridSpacing) -> Self {
        Self {
            spacing,
            bucket_size: DEFAULT_BUCKET_SIZE,
            cells: Vec::new(),
            by_id: HashMap::new(),
            buckets: HashMap::new(),
        }
    }

    /// Build an index from `(area_peril_id, lon, lat)` reference points.
    ///
    /// Uses 1°×1° buckets.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate id or a non-finite reference point. A failed
    /// build leaves nothing behind; there is no partially built index.
    pub fn build<I>(spacing: GridSpacing, cells: I) -> Result<Self, AreaPerilError>
    where
        I: IntoIterator<Item = (u64, f64, f64)>,
    {
        Self::build_with_bucket_size(spacing, DEFAULT_BUCKET_SIZE, cells)
    }

    /// Build an index with a custom bucket size in degrees.
    ///
    /// The bucket must be at least as wide as a cell, which keeps every
    /// cell within a 2×2 block of buckets.
    ///
    /// # Errors
    ///
    /// Besides the [`build`](Self::build) errors, fails on a non-positive
    /// bucket size or one smaller than the grid spacing.
    pub fn build_with_bucket_size<I>(
        spacing: GridSpacing,
        bucket_size: f64,
        cells: I,
    ) -> Result<Self, AreaPerilError>
    where
        I: IntoIterator<Item = (u64, f64, f64)>,
    {
        if !(bucket_size.is_finite() && bucket_size > 0.0) {
            return Err(AreaPerilError::InvalidBucketSize(bucket_size));
        }
        if bucket_size < spacing.degrees() {
            return Err(AreaPerilError::BucketSmallerThanSpacing {
                bucket_size,
                grid_spacing: spacing.degrees(),
            });
        }

        let mut index = Self {
            bucket_size,
            ..Self::empty(spacing)
        };

        for (area_peril_id, lon, lat) in cells {
            if !(lon.is_finite() && lat.is_finite()) {
                return Err(AreaPerilError::InvalidCell {
                    area_peril_id,
                    lon,
                    lat,
                });
            }
            if index.by_id.contains_key(&area_peril_id) {
                return Err(AreaPerilError::DuplicateAreaPeril(area_peril_id));
            }

            let cell = AreaCell::around(area_peril_id, lon, lat, spacing);
            let slot = index.cells.len();
            for region in GridRegion::covering(&cell, bucket_size) {
                index.buckets.entry(region).or_default().push(slot);
            }
            index.by_id.insert(area_peril_id, slot);
            index.cells.push(cell);
        }

        let cells = &index.cells;
        for bucket in index.buckets.values_mut() {
            bucket.sort_unstable_by_key(|&slot| cells[slot].area_peril_id);
        }

        tracing::debug!(
            cells = index.cells.len(),
            buckets = index.buckets.len(),
            grid_spacing = spacing.degrees(),
            bucket_size,
            "Built area peril index"
        );

        Ok(index)
    }

    /// Look up the cell containing `(lon, lat)`.
    pub fn query(&self, lon: f64, lat: f64) -> LookupOutcome {
        self.lookup(Some(lon), Some(lat))
    }

    /// Look up possibly-missing coordinates.
    ///
    /// - missing, non-finite or out-of-range coordinates → `Fail`
    /// - no containing cell → `NoMatch`
    /// - otherwise `Success` with the lowest containing `area_peril_id`
    pub fn lookup(&self, lon: Option<f64>, lat: Option<f64>) -> LookupOutcome {
        let point = match validate_lon_lat(lon, lat) {
            Ok(point) => point,
            Err(e) => {
                tracing::trace!(error = %e, "Rejected location coordinates");
                return LookupOutcome::fail(INVALID_COORDINATES_MESSAGE);
            }
        };

        match self.hits(point).next() {
            Some(cell) => LookupOutcome::success(cell.area_peril_id),
            None => LookupOutcome::no_match(NO_CELL_MESSAGE),
        }
    }

    /// All cells containing a point, lowest id first.
    pub fn hits(&self, point: GeoPoint) -> impl Iterator<Item = &AreaCell> + '_ {
        let region = GridRegion::containing(point.lon, point.lat, self.bucket_size);
        self.buckets
            .get(&region)
            .into_iter()
            .flatten()
            .map(move |&slot| &self.cells[slot])
            .filter(move |cell| cell.contains(point.lon, point.lat))
    }

    /// Get a cell by area-peril id.
    pub fn get(&self, area_peril_id: u64) -> Option<&AreaCell> {
        self.by_id.get(&area_peril_id).map(|&slot| &self.cells[slot])
    }

    /// Grid spacing used to size the cells.
    pub fn grid_spacing(&self) -> GridSpacing {
        self.spacing
    }

    /// Bucket size in degrees.
    pub fn bucket_size(&self) -> f64 {
        self.bucket_size
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the index has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AreaCell> {
        self.cells.iter()
    }
}
