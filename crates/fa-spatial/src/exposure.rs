//! Exposure model: raster depth lookup plus damage derivation.

use fa_core::{BandId, Point};

use crate::{DamageCurve, ExposureError, FloodRaster, NoDataPolicy};

/// Depth and damage for one household.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Exposure {
    /// Flood depth in metres, never negative.
    pub depth:  f64,
    /// Damage factor in `[0, 1]`.
    pub damage: f64,
}

/// Everything needed to turn a location into an [`Exposure`].
pub struct ExposureModel {
    pub raster: FloodRaster,
    pub band:   BandId,
    pub nodata: NoDataPolicy,
    pub curve:  DamageCurve,
}

impl ExposureModel {
    pub fn new(raster: FloodRaster, band: BandId, nodata: NoDataPolicy, curve: DamageCurve) -> Self {
        Self { raster, band, nodata, curve }
    }

    /// Estimated exposure at `location` from the configured band.
    ///
    /// Negative raster depths (high ground) are clamped to zero; missing
    /// data is handled according to [`NoDataPolicy`].
    pub fn estimate(&self, location: Point) -> Result<Exposure, ExposureError> {
        let raw = self
            .nodata
            .resolve(self.raster.estimate_depth(location, self.band))?;
        Ok(self.exposure_for_depth(raw))
    }

    /// Exposure for an already-known depth (e.g. an observed flood).
    pub fn exposure_for_depth(&self, depth: f64) -> Exposure {
        let depth = if depth > 0.0 { depth } else { 0.0 };
        Exposure { depth, damage: self.curve.damage(depth) }
    }
}
