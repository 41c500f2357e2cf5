//! In-memory flood-depth raster.
//!
//! # Data layout
//!
//! North-up grid, row-major, row 0 at the northern edge.  Cell `(row, col)`
//! covers
//!
//! ```text
//! x ∈ [west + col·cell_width,  west + (col+1)·cell_width)
//! y ∈ (north − (row+1)·cell_height,  north − row·cell_height]
//! ```
//!
//! Each band is a flat `Vec<f32>` of `width × height` depths in metres.
//! Negative depths are legal (ground above the flood line).

use fa_core::{BandId, BoundingBox, Point};
use tracing::debug;

use crate::{ExposureError, SpatialError, SpatialResult};

/// Georeferencing of a raster grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RasterGeometry {
    pub west:        f64,
    pub north:       f64,
    pub cell_width:  f64,
    pub cell_height: f64,
    pub width:       usize,
    pub height:      usize,
}

impl RasterGeometry {
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Area covered by the grid.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            Point::new(self.west, self.north - self.height as f64 * self.cell_height),
            Point::new(self.west + self.width as f64 * self.cell_width, self.north),
        )
    }

    /// `(row, col)` of the cell covering `p`, or `None` outside coverage.
    pub fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        let col = ((p.x - self.west) / self.cell_width).floor();
        let row = ((self.north - p.y) / self.cell_height).floor();
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.height && col < self.width).then_some((row, col))
    }
}

/// What to do when a household sits where the raster has no value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NoDataPolicy {
    /// Treat the household as unexposed (depth 0).
    #[default]
    Zero,
    /// Propagate [`ExposureError::NoData`] and abort construction.
    Fail,
}

impl NoDataPolicy {
    /// Apply the policy to a raw lookup.  Band errors always propagate.
    pub fn resolve(self, lookup: Result<f64, ExposureError>) -> Result<f64, ExposureError> {
        match (self, lookup) {
            (NoDataPolicy::Zero, Err(ExposureError::NoData { location })) => {
                debug!(%location, "no flood data; using zero depth");
                Ok(0.0)
            }
            (_, other) => other,
        }
    }
}

/// A multi-band flood-depth surface queryable by coordinate.
pub struct FloodRaster {
    geometry: RasterGeometry,
    bands:    Vec<Vec<f32>>,
    nodata:   Option<f32>,
}

impl FloodRaster {
    /// Validate dimensions and wrap the band data.
    pub fn new(
        geometry: RasterGeometry,
        bands:    Vec<Vec<f32>>,
        nodata:   Option<f32>,
    ) -> SpatialResult<Self> {
        if !(geometry.cell_width > 0.0 && geometry.cell_height > 0.0) {
            return Err(SpatialError::InvalidRaster(format!(
                "cell size must be positive, got {}×{}",
                geometry.cell_width, geometry.cell_height
            )));
        }
        if bands.is_empty() {
            return Err(SpatialError::InvalidRaster("raster has no bands".into()));
        }
        let expected = geometry.cell_count();
        if let Some((i, band)) = bands.iter().enumerate().find(|(_, b)| b.len() != expected) {
            return Err(SpatialError::InvalidRaster(format!(
                "band {i} has {} cells, expected {expected}",
                band.len()
            )));
        }
        Ok(Self { geometry, bands, nodata })
    }

    pub fn geometry(&self) -> &RasterGeometry {
        &self.geometry
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Raw depth at `location` in `band`.  May be negative.
    pub fn estimate_depth(&self, location: Point, band: BandId) -> Result<f64, ExposureError> {
        let data = self.bands.get(band.index()).ok_or(ExposureError::BandOutOfRange {
            band,
            bands: self.bands.len(),
        })?;
        let (row, col) = self
            .geometry
            .cell_of(location)
            .ok_or(ExposureError::NoData { location })?;
        let value = data[row * self.geometry.width + col];
        if value.is_nan() || self.nodata == Some(value) {
            return Err(ExposureError::NoData { location });
        }
        Ok(value as f64)
    }
}
