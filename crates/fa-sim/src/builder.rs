//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use fa_agent::HouseholdStore;
use fa_core::{AgentId, SimRng, Tick};
use fa_spatial::SocialNetwork;

use crate::population::build_population;
use crate::{AgentKind, FloodShock, Landscape, ModelConfig, Scheduled, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`ModelConfig`]: ticks, seed, population, influence, exposure, shock
/// - [`Landscape`]: domain, floodplain, and exposure model
/// - [`SocialNetwork`]: one node per household
///
/// # Optional inputs
///
/// | Method           | Default                                     |
/// |------------------|---------------------------------------------|
/// | `.households(s)` | Generated from the config and landscape     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, landscape, network).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     ModelConfig,
    landscape:  Landscape,
    network:    SocialNetwork,
    households: Option<HouseholdStore>,
}

impl SimBuilder {
    pub fn new(config: ModelConfig, landscape: Landscape, network: SocialNetwork) -> Self {
        Self { config, landscape, network, households: None }
    }

    /// Use an already-populated store instead of generating one.
    pub fn households(mut self, store: HouseholdStore) -> Self {
        self.households = Some(store);
        self
    }

    /// Validate inputs, create the population, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let households = match self.households {
            Some(store) => store,
            None => build_population(&self.config, &self.landscape)?,
        };

        if self.network.node_count() != households.count {
            return Err(SimError::AgentCountMismatch {
                expected: households.count,
                got:      self.network.node_count(),
                what:     "social network nodes",
            });
        }

        let mut agents: Vec<Scheduled> =
            Vec::with_capacity(households.count + self.config.population.governments);
        agents.extend(households.agent_ids().map(|id| Scheduled::new(AgentKind::Household, id)));
        agents.extend(
            (0..self.config.population.governments as u32)
                .map(|i| Scheduled::new(AgentKind::Government, AgentId(i))),
        );

        // Separate streams so toggling the shock never changes activation
        // order and vice versa.
        let mut root = SimRng::new(self.config.run.seed);
        let activation_rng = root.child(1);
        let shock_rng = root.child(2);

        info!(
            households = households.count,
            governments = self.config.population.governments,
            ties = self.network.tie_count(),
            ticks = self.config.run.total_ticks,
            seed = self.config.run.seed,
            "simulation built"
        );

        Ok(Sim {
            params:       self.config.influence_params(),
            shock:        FloodShock::from_config(&self.config.flood_shock),
            config:       self.config,
            landscape:    self.landscape,
            network:      self.network,
            households,
            agents,
            activation_rng,
            shock_rng,
            current_tick: Tick::ZERO,
        })
    }
}
