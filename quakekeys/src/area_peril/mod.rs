//! Area-peril lookup: which hazard cell contains a location.
//!
//! Each reference point `(area_peril_id, lon, lat)` becomes a square
//! [`AreaCell`] of side [`GridSpacing`] centred on the point. The
//! [`AreaPerilIndex`] buckets cells into a [`GridRegion`] grid and answers
//! point-in-cell queries.
//!
//! # Architecture
//!
//! ```text
//! AreaPerilIndex
//! ├── cells: [AreaCell { id: 1, 9.975..10.025 × 19.975..20.025 }, ...]
//! └── buckets (1°×1°)
//!     ├── (+19+009) → [1]
//!     ├── (+20+010) → [1, 2]
//!     └── ...
//! ```
//!
//! # Usage
//!
//! ```
//! use quakekeys::area_peril::{AreaPerilIndex, GridSpacing};
//! use quakekeys::outcome::LookupStatus;
//!
//! let spacing = GridSpacing::new(0.05).unwrap();
//! let index = AreaPerilIndex::build(spacing, vec![(1, 10.0, 20.0)]).unwrap();
//!
//! assert_eq!(index.query(10.02, 20.02).id, Some(1));
//! assert_eq!(index.query(10.03, 20.03).status, LookupStatus::NoMatch);
//! assert_eq!(index.query(0.0, 91.0).status, LookupStatus::Fail);
//! ```

mod cell;
mod index;
mod loader;
mod region;

use std::path::PathBuf;

pub use cell::{AreaCell, GridSpacing, DEFAULT_GRID_SPACING};
pub use index::{AreaPerilIndex, INVALID_COORDINATES_MESSAGE, NO_CELL_MESSAGE};
pub use region::GridRegion;

/// Default bucket size of the spatial grid, in degrees.
pub const DEFAULT_BUCKET_SIZE: f64 = 1.0;

/// Error type for building the area-peril index.
#[derive(Debug, thiserror::Error)]
pub enum AreaPerilError {
    #[error("Grid spacing must be a positive number of degrees, got {0}")]
    InvalidGridSpacing(f64),
    #[error("Bucket size must be a positive number of degrees, got {0}")]
    InvalidBucketSize(f64),
    #[error("Bucket size {bucket_size} is smaller than the grid spacing {grid_spacing}")]
    BucketSmallerThanSpacing { bucket_size: f64, grid_spacing: f64 },
    #[error("Area peril {area_peril_id} has a non-finite reference point ({lon}, {lat})")]
    InvalidCell { area_peril_id: u64, lon: f64, lat: f64 },
    #[error("Duplicate area peril id {0}")]
    DuplicateAreaPeril(u64),
    #[error("Area peril dictionary not found at: {0}")]
    NotFound(PathBuf),
    #[error("Area peril dictionary has no '{0}' column")]
    MissingColumn(String),
    #[error("Invalid area peril row at line {line}: {message}")]
    InvalidRow { line: u64, message: String },
    #[error("Failed to read area peril dictionary: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
