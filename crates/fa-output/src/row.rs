//! Plain data row types written by output backends.

use fa_agent::HouseholdSnapshot;
use fa_core::Tick;
use fa_sim::TickSummary;

/// One household's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseholdSnapshotRow {
    pub agent_id:               u32,
    pub tick:                   u64,
    pub x:                      f64,
    pub y:                      f64,
    pub in_floodplain:          bool,
    pub flood_depth_estimated:  f64,
    pub flood_damage_estimated: f64,
    pub flood_depth_actual:     f64,
    pub flood_damage_actual:    f64,
    pub belief:                 f64,
    pub is_adapted:             bool,
    pub friends_count:          u32,
    /// Latest mean absolute belief difference; `None` before the first step.
    pub belief_diff:            Option<f64>,
}

impl HouseholdSnapshotRow {
    pub fn new(tick: Tick, h: &HouseholdSnapshot) -> Self {
        Self {
            agent_id:               h.id.0,
            tick:                   tick.0,
            x:                      h.location.x,
            y:                      h.location.y,
            in_floodplain:          h.in_floodplain,
            flood_depth_estimated:  h.flood_depth_estimated,
            flood_damage_estimated: h.flood_damage_estimated,
            flood_depth_actual:     h.flood_depth_actual,
            flood_damage_actual:    h.flood_damage_actual,
            belief:                 h.belief,
            is_adapted:             h.is_adapted(),
            friends_count:          h.friends_count as u32,
            belief_diff:            h.last_belief_diff,
        }
    }
}

/// Model-level reporters for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:               u64,
    pub stepped_agents:     u64,
    pub adapted_households: u64,
    pub mean_belief:        f64,
    pub flood_shock:        bool,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:               s.tick.0,
            stepped_agents:     s.stepped as u64,
            adapted_households: s.adapted_households as u64,
            mean_belief:        s.mean_belief,
            flood_shock:        s.flood_shock,
        }
    }
}

/// The weight one household gave one friend during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FriendWeightRow {
    pub tick:      u64,
    pub agent_id:  u32,
    pub friend_id: u32,
    pub weight:    f64,
}
