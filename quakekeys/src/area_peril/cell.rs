//! Area cells and the grid spacing that shapes them.

use super::AreaPerilError;

/// Grid spacing of the hazard model, in degrees.
pub const DEFAULT_GRID_SPACING: f64 = 0.05;

/// Side length of an area cell in degrees.
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GridSpacing(f64);

impl GridSpacing {
    /// Validate a spacing value.
    pub fn new(degrees: f64) -> Result<Self, AreaPerilError> {
        if degrees.is_finite() && degrees > 0.0 {
            Ok(Self(degrees))
        } else {
            Err(AreaPerilError::InvalidGridSpacing(degrees))
        }
    }

    /// Spacing in degrees.
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Half the spacing; the distance from a cell centre to its edges.
    pub fn half(&self) -> f64 {
        self.0 / 2.0
    }
}

impl Default for GridSpacing {
    fn default() -> Self {
        Self(DEFAULT_GRID_SPACING)
    }
}

/// An axis-aligned hazard cell tagged with its area-peril id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaCell {
    /// Area-peril identifier
    pub area_peril_id: u64,
    /// West edge
    pub min_lon: f64,
    /// South edge
    pub min_lat: f64,
    /// East edge
    pub max_lon: f64,
    /// North edge
    pub max_lat: f64,
}

impl AreaCell {
    /// The square cell of side `spacing` centred on `(lon, lat)`.
    pub fn around(area_peril_id: u64, lon: f64, lat: f64, spacing: GridSpacing) -> Self {
        let d = spacing.half();
        Self {
            area_peril_id,
            min_lon: lon - d,
            min_lat: lat - d,
            max_lon: lon + d,
            max_lat: lat + d,
        }
    }

    /// Inclusive point containment.
    #[inline]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        (self.min_lon..=self.max_lon).contains(&lon) && (self.min_lat..=self.max_lat).contains(&lat)
    }

    /// Centre of the box as `(lon, lat)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Box area in square degrees.
    pub fn area(&self) -> f64 {
        (self.max_lon - self.min_lon) * (self.max_lat - self.min_lat)
    }
}
