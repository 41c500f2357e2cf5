//! Household construction.

use tracing::{debug, info};

use fa_agent::{HouseholdInit, HouseholdStore};
use fa_core::{AgentId, AgentRng};
use fa_spatial::sample_location;

use crate::config::{ModelConfig, Stubbornness};
use crate::{Landscape, SimError, SimResult};

/// Create `config.population.households` households.
///
/// Each household draws its location (and stubbornness, if not fixed) from
/// its own [`AgentRng`] seeded by `(run.seed, id)`, so one household's
/// draws never shift another's.  Any placement, exposure, or stubbornness
/// failure aborts construction.
pub fn build_population(config: &ModelConfig, landscape: &Landscape) -> SimResult<HouseholdStore> {
    let n = config.population.households;
    let retries = config.population.max_placement_retries;
    let mut store = HouseholdStore::with_capacity(n);

    for i in 0..n {
        let agent = AgentId(i as u32);
        let mut rng = AgentRng::new(config.run.seed, agent);

        let location = sample_location(&landscape.domain, &mut rng, retries)
            .map_err(|source| SimError::Placement { agent, source })?;
        let in_floodplain = landscape.floodplain.contains(location);
        let exposure = landscape
            .exposure
            .estimate(location)
            .map_err(|source| SimError::Exposure { agent, source })?;
        let stubbornness = match config.influence.stubbornness {
            Stubbornness::Fixed(v) => v,
            Stubbornness::Uniform { low, high } => rng.gen_range(low..=high),
        };

        store.push(HouseholdInit {
            location,
            in_floodplain,
            flood_depth_estimated: exposure.depth,
            flood_damage_estimated: exposure.damage,
            stubbornness,
        })?;
        debug!(%agent, %location, in_floodplain, depth = exposure.depth, damage = exposure.damage, "household placed");
    }

    info!(
        households = store.count,
        in_floodplain = store.in_floodplain.iter().filter(|&&f| f).count(),
        mean_belief = store.mean_belief(),
        "population built"
    );
    Ok(store)
}
