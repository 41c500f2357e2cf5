//! `fa-sim`: configuration, population construction, and the tick loop.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..run.total_ticks:
//!   ① Shock    : on flood_shock.tick, write actual depth/damage for every
//!                 household (factor ~ U[min, max] × estimated depth).
//!   ② Order    : ascending ids, or a seeded shuffle of all agents.
//!   ③ Steps    : each agent steps to completion in that order; a fault
//!                 aborts the run with a dump of every household.
//!   ④ Report   : TickSummary to the observer; household snapshot on
//!                 ticks divisible by run.output_interval_ticks.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fa_sim::{Landscape, ModelConfig, NoopObserver, SimBuilder};
//!
//! let config = ModelConfig::from_file(path)?;
//! let landscape = Landscape::new(domain, floodplain, raster, &config.exposure)?;
//! let mut sim = SimBuilder::new(config, landscape, network).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod landscape;
pub mod observer;
pub mod population;
pub mod shock;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::{
    ActivationOrder, ExposureConfig, FloodShockConfig, InfluenceConfig, ModelConfig,
    PopulationConfig, RunConfig, Stubbornness,
};
pub use error::{SimError, SimResult};
pub use landscape::Landscape;
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use population::build_population;
pub use shock::FloodShock;
pub use sim::{Activation, AgentKind, Scheduled, Sim};
