//! Household storage: `HouseholdStore` (SoA data) and `HouseholdInit`.
//!
//! # Why Structure-of-Arrays?
//!
//! A household's step reads a handful of fields (belief, location) from each
//! of its friends and writes only its own row.  Keeping each field in its own
//! `Vec` indexed by `AgentId` makes those friend reads contiguous and lets
//! the borrow checker see the single-writer pattern plainly:
//!
//! ```ignore
//! let friend_belief = store.belief[friend.index()];   // read a neighbor
//! store.belief[me.index()] = revised;                 // write own row
//! ```

use fa_core::{AgentId, Point};

use crate::{AdaptationState, AgentError, AgentResult, HouseholdSnapshot};

/// Construction-time values for one household.
///
/// Everything else (belief, actual exposure, ties, history) is derived or
/// starts at its initial value when the household is pushed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HouseholdInit {
    pub location:               Point,
    pub in_floodplain:          bool,
    /// Non-negative estimated depth in metres.
    pub flood_depth_estimated:  f64,
    /// Damage factor in `[0, 1]`; also the initial belief.
    pub flood_damage_estimated: f64,
    /// Resistance to social influence, in `(0, 1]`.
    pub stubbornness:           f64,
}

/// Structure-of-Arrays storage for all household state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them.
#[derive(Clone, Debug, Default)]
pub struct HouseholdStore {
    /// Number of households.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Fixed at construction ─────────────────────────────────────────────
    pub location:               Vec<Point>,
    pub in_floodplain:          Vec<bool>,
    pub flood_depth_estimated:  Vec<f64>,
    pub flood_damage_estimated: Vec<f64>,
    pub stubbornness:           Vec<f64>,

    // ── Set by the flood-shock event ──────────────────────────────────────
    pub flood_depth_actual:  Vec<f64>,
    pub flood_damage_actual: Vec<f64>,

    // ── Written by the household's own step ───────────────────────────────
    pub belief: Vec<f64>,

    /// Friends found by the latest neighbor discovery, in iteration order.
    pub friends: Vec<Vec<AgentId>>,

    /// Distance to each friend, aligned with `friends`.  Valid for the
    /// latest step only.
    pub friend_distances: Vec<Vec<f64>>,

    /// Influence weight of each friend, aligned with `friends`.  Valid for
    /// the latest step only.
    pub weights: Vec<Vec<f64>>,

    pub adaptation: Vec<AdaptationState>,

    /// One mean absolute belief difference per completed step.
    pub belief_diff_history: Vec<Vec<f64>>,

    /// Number of steps this household has completed.
    pub current_step: Vec<u64>,
}

impl HouseholdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for `n` households.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            count: 0,
            location:               Vec::with_capacity(n),
            in_floodplain:          Vec::with_capacity(n),
            flood_depth_estimated:  Vec::with_capacity(n),
            flood_damage_estimated: Vec::with_capacity(n),
            stubbornness:           Vec::with_capacity(n),
            flood_depth_actual:     Vec::with_capacity(n),
            flood_damage_actual:    Vec::with_capacity(n),
            belief:                 Vec::with_capacity(n),
            friends:                Vec::with_capacity(n),
            friend_distances:       Vec::with_capacity(n),
            weights:                Vec::with_capacity(n),
            adaptation:             Vec::with_capacity(n),
            belief_diff_history:    Vec::with_capacity(n),
            current_step:           Vec::with_capacity(n),
        }
    }

    /// Append a household and return its id.
    ///
    /// Fails with [`AgentError::InvalidStubbornness`] unless
    /// `0 < stubbornness <= 1`; the value is never coerced.
    pub fn push(&mut self, init: HouseholdInit) -> AgentResult<AgentId> {
        let id = AgentId(self.count as u32);
        let s = init.stubbornness;
        if !(s > 0.0 && s <= 1.0) {
            return Err(AgentError::InvalidStubbornness { agent: id, value: s });
        }

        self.location.push(init.location);
        self.in_floodplain.push(init.in_floodplain);
        self.flood_depth_estimated.push(init.flood_depth_estimated.max(0.0));
        self.flood_damage_estimated.push(init.flood_damage_estimated);
        self.stubbornness.push(s);
        self.flood_depth_actual.push(0.0);
        self.flood_damage_actual.push(0.0);
        self.belief.push(init.flood_damage_estimated);
        self.friends.push(Vec::new());
        self.friend_distances.push(Vec::new());
        self.weights.push(Vec::new());
        self.adaptation.push(AdaptationState::NotAdapted);
        self.belief_diff_history.push(Vec::new());
        self.current_step.push(0);

        self.count += 1;
        Ok(id)
    }

    /// `true` if there are no households.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn is_adapted(&self, agent: AgentId) -> bool {
        self.adaptation[agent.index()].is_adapted()
    }

    /// Number of households that have adapted.
    pub fn adapted_count(&self) -> usize {
        self.adaptation.iter().filter(|a| a.is_adapted()).count()
    }

    /// Population mean belief; 0 for an empty store.
    pub fn mean_belief(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.belief.iter().sum::<f64>() / self.count as f64
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    /// Copy one household's row.
    pub fn snapshot(&self, agent: AgentId) -> AgentResult<HouseholdSnapshot> {
        if !self.contains(agent) {
            return Err(AgentError::AgentNotFound(agent));
        }
        let i = agent.index();
        Ok(HouseholdSnapshot {
            id:                     agent,
            location:               self.location[i],
            in_floodplain:          self.in_floodplain[i],
            flood_depth_estimated:  self.flood_depth_estimated[i],
            flood_damage_estimated: self.flood_damage_estimated[i],
            flood_depth_actual:     self.flood_depth_actual[i],
            flood_damage_actual:    self.flood_damage_actual[i],
            belief:                 self.belief[i],
            stubbornness:           self.stubbornness[i],
            adaptation:             self.adaptation[i],
            friends_count:          self.friends[i].len(),
            last_belief_diff:       self.belief_diff_history[i].last().copied(),
            current_step:           self.current_step[i],
        })
    }

    /// Copy every household's row, in ascending id order.
    pub fn snapshots(&self) -> Vec<HouseholdSnapshot> {
        self.agent_ids()
            .filter_map(|id| self.snapshot(id).ok())
            .collect()
    }
}
