//! The static environment households are placed into.

use fa_spatial::{Domain, ExposureError, ExposureModel, FloodRaster, Floodplain};

use crate::config::ExposureConfig;
use crate::SimResult;

/// Placement domain, floodplain, and exposure model.  Fixed for the whole
/// run.
pub struct Landscape {
    pub domain:     Domain,
    pub floodplain: Floodplain,
    pub exposure:   ExposureModel,
}

impl Landscape {
    /// Assemble a landscape, checking that the configured band exists.
    pub fn new(
        domain:     Domain,
        floodplain: Floodplain,
        raster:     FloodRaster,
        exposure:   &ExposureConfig,
    ) -> SimResult<Self> {
        let bands = raster.band_count();
        if exposure.band.index() >= bands {
            return Err(ExposureError::BandOutOfRange { band: exposure.band, bands }.into());
        }
        exposure.damage_curve.validate()?;
        Ok(Self {
            domain,
            floodplain,
            exposure: ExposureModel::new(raster, exposure.band, exposure.nodata, exposure.damage_curve.clone()),
        })
    }
}
