//! Model configuration, loadable from TOML.
//!
//! Every section and every field has a default, so an empty document is a
//! valid configuration:
//!
//! ```toml
//! [run]
//! total_ticks = 20
//! seed = 42
//! activation = "shuffled"        # or "sequential"
//! output_interval_ticks = 1
//!
//! [population]
//! households = 25
//! governments = 1
//! max_placement_retries = 10000
//!
//! [influence]
//! stubbornness = { uniform = { low = 0.3, high = 0.9 } }   # or { fixed = 0.5 }
//! hop_radius = 1
//! agreement_gate = 1.0
//! adaptation_threshold = 0.5
//!
//! [exposure]
//! band = 0
//! nodata = "zero"                # or "fail"
//! damage_curve = { kind = "log_depth", scale = 0.1746, offset = 0.6483, min_depth = 0.025, max_depth = 6.0 }
//!
//! [flood_shock]
//! enabled = true
//! tick = 5
//! depth_factor_min = 0.5
//! depth_factor_max = 1.2
//! ```

use serde::{Deserialize, Serialize};

use fa_behavior::InfluenceParams;
use fa_core::BandId;
use fa_spatial::{DamageCurve, NoDataPolicy, DEFAULT_MAX_RETRIES};

use crate::{SimError, SimResult};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub run:         RunConfig,
    pub population:  PopulationConfig,
    pub influence:   InfluenceConfig,
    pub exposure:    ExposureConfig,
    pub flood_shock: FloodShockConfig,
}

impl ModelConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> SimResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &std::path::Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject values the model cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        if self.population.max_placement_retries == 0 {
            return Err(invalid("population.max_placement_retries must be at least 1"));
        }
        self.influence.stubbornness.validate()?;
        self.influence_params()
            .validate()
            .map_err(|e| SimError::InvalidConfiguration(e.to_string()))?;
        self.exposure.damage_curve.validate()?;

        let shock = &self.flood_shock;
        if shock.enabled {
            let finite = shock.depth_factor_min.is_finite() && shock.depth_factor_max.is_finite();
            if !finite
                || !(shock.depth_factor_min >= 0.0)
                || !(shock.depth_factor_max >= shock.depth_factor_min)
            {
                return Err(invalid(format!(
                    "flood_shock depth factors must be finite with 0 <= min <= max, got [{}, {}]",
                    shock.depth_factor_min, shock.depth_factor_max
                )));
            }
        }
        Ok(())
    }

    pub fn influence_params(&self) -> InfluenceParams {
        InfluenceParams {
            hop_radius:           self.influence.hop_radius,
            agreement_gate:       self.influence.agreement_gate,
            adaptation_threshold: self.influence.adaptation_threshold,
        }
    }
}

fn invalid(msg: impl Into<String>) -> SimError {
    SimError::InvalidConfiguration(msg.into())
}

// ── [run] ─────────────────────────────────────────────────────────────────────

/// Order in which agents take their step within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationOrder {
    /// Households by ascending id, then governments.
    Sequential,
    /// A fresh seeded permutation every tick.
    #[default]
    Shuffled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub total_ticks:           u64,
    pub seed:                  u64,
    pub activation:            ActivationOrder,
    /// Household snapshots are emitted on ticks divisible by this.  0
    /// disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total_ticks:           20,
            seed:                  42,
            activation:            ActivationOrder::Shuffled,
            output_interval_ticks: 1,
        }
    }
}

// ── [population] ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub households:            usize,
    pub governments:           usize,
    pub max_placement_retries: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self { households: 25, governments: 1, max_placement_retries: DEFAULT_MAX_RETRIES }
    }
}

// ── [influence] ───────────────────────────────────────────────────────────────

/// How each household's stubbornness is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stubbornness {
    Fixed(f64),
    /// Drawn uniformly from `[low, high]` with the household's own RNG.
    Uniform { low: f64, high: f64 },
}

impl Default for Stubbornness {
    fn default() -> Self {
        Stubbornness::Fixed(0.5)
    }
}

impl Stubbornness {
    pub fn validate(&self) -> SimResult<()> {
        let in_range = |v: f64| v > 0.0 && v <= 1.0;
        match *self {
            Stubbornness::Fixed(v) if in_range(v) => Ok(()),
            Stubbornness::Uniform { low, high } if in_range(low) && in_range(high) && low <= high => Ok(()),
            other => Err(invalid(format!(
                "stubbornness must lie in (0, 1], got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceConfig {
    pub stubbornness:         Stubbornness,
    pub hop_radius:           u32,
    pub agreement_gate:       f64,
    pub adaptation_threshold: f64,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        let p = InfluenceParams::default();
        Self {
            stubbornness:         Stubbornness::default(),
            hop_radius:           p.hop_radius,
            agreement_gate:       p.agreement_gate,
            adaptation_threshold: p.adaptation_threshold,
        }
    }
}

// ── [exposure] ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureConfig {
    pub band:         BandId,
    pub nodata:       NoDataPolicy,
    pub damage_curve: DamageCurve,
}

// ── [flood_shock] ─────────────────────────────────────────────────────────────

/// A single observed flood, applied to every household at `tick`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloodShockConfig {
    pub enabled:          bool,
    pub tick:             u64,
    pub depth_factor_min: f64,
    pub depth_factor_max: f64,
}

impl Default for FloodShockConfig {
    fn default() -> Self {
        Self { enabled: true, tick: 5, depth_factor_min: 0.5, depth_factor_max: 1.2 }
    }
}
