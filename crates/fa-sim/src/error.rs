use thiserror::Error;

use fa_agent::{AgentError, PopulationDump};
use fa_behavior::BehaviorError;
use fa_core::{AgentId, Tick};
use fa_spatial::{ExposureError, PlacementError, SpatialError};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("could not place household {agent}: {source}")]
    Placement {
        agent:  AgentId,
        source: PlacementError,
    },

    #[error("exposure lookup failed for household {agent}: {source}")]
    Exposure {
        agent:  AgentId,
        source: ExposureError,
    },

    #[error("{what} length {got} does not match household count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    /// A step failed mid-tick.  `dump` holds every household row as it was
    /// when the run stopped.
    #[error("step fault at {tick}: {source}")]
    StepFault {
        tick:   Tick,
        source: BehaviorError,
        dump:   Box<PopulationDump>,
    },

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    /// The raster cannot serve the configured exposure settings.
    #[error("flood raster: {0}")]
    Raster(#[from] ExposureError),

    #[error("config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type SimResult<T> = Result<T, SimError>;
