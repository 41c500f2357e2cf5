//! Point-in-time copies of household state.

use std::fmt;

use fa_core::{AgentId, Point, Tick};

use crate::AdaptationState;

/// One household's row, detached from the store.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HouseholdSnapshot {
    pub id:                     AgentId,
    pub location:               Point,
    pub in_floodplain:          bool,
    pub flood_depth_estimated:  f64,
    pub flood_damage_estimated: f64,
    pub flood_depth_actual:     f64,
    pub flood_damage_actual:    f64,
    pub belief:                 f64,
    pub stubbornness:           f64,
    pub adaptation:             AdaptationState,
    pub friends_count:          usize,
    /// Latest entry of the belief-difference history, if any step ran.
    pub last_belief_diff:       Option<f64>,
    pub current_step:           u64,
}

impl HouseholdSnapshot {
    #[inline]
    pub fn is_adapted(&self) -> bool {
        self.adaptation.is_adapted()
    }
}

/// Every household's state at the moment a run was aborted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationDump {
    pub tick:       Tick,
    pub households: Vec<HouseholdSnapshot>,
}

impl fmt::Display for PopulationDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "population state at {} ({} households):", self.tick, self.households.len())?;
        for h in &self.households {
            writeln!(
                f,
                "  {} at {} belief={:.6} stubbornness={:.3} {} friends={} step={}",
                h.id, h.location, h.belief, h.stubbornness, h.adaptation, h.friends_count, h.current_step,
            )?;
        }
        Ok(())
    }
}
