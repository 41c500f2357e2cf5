//! The observed flood event.

use fa_agent::HouseholdStore;
use fa_core::{SimRng, Tick};
use fa_spatial::ExposureModel;

use crate::config::FloodShockConfig;

/// Sets every household's actual depth to a random multiple of its
/// estimated depth, once, at a fixed tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FloodShock {
    pub tick:       Tick,
    pub factor_min: f64,
    pub factor_max: f64,
}

impl FloodShock {
    /// `None` when the shock is disabled.
    pub fn from_config(config: &FloodShockConfig) -> Option<Self> {
        config.enabled.then(|| Self {
            tick:       Tick(config.tick),
            factor_min: config.depth_factor_min,
            factor_max: config.depth_factor_max,
        })
    }

    pub fn is_due(&self, now: Tick) -> bool {
        now == self.tick
    }

    /// Draw one factor per household in ascending id order and write actual
    /// depth and damage.  Returns the number of households left with a
    /// positive actual depth.
    pub fn apply(&self, store: &mut HouseholdStore, exposure: &ExposureModel, rng: &mut SimRng) -> usize {
        let mut flooded = 0;
        for i in 0..store.count {
            let factor: f64 = rng.gen_range(self.factor_min..=self.factor_max);
            let actual = exposure.exposure_for_depth(factor * store.flood_depth_estimated[i]);
            store.flood_depth_actual[i] = actual.depth;
            store.flood_damage_actual[i] = actual.damage;
            if actual.depth > 0.0 {
                flooded += 1;
            }
        }
        flooded
    }
}
