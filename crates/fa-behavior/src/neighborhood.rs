//! Friends of one household, paired with freshly computed weights.

use fa_agent::{AgentError, HouseholdStore};
use fa_core::{AgentId, Point};

use crate::min_max_weights;

/// One friend as seen by the household being stepped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub id:       AgentId,
    /// The friend's belief at the moment it was gathered.
    pub belief:   f64,
    pub distance: f64,
    pub weight:   f64,
}

/// The input to a belief revision.
///
/// A `Neighborhood` only comes into existence through [`gather`] or
/// [`from_distances`], both of which compute weights from the distances they
/// were given.  Holding one therefore means the weights match the friend
/// set it was built from.
///
/// [`gather`]: Neighborhood::gather
/// [`from_distances`]: Neighborhood::from_distances
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Neighborhood {
    entries: Vec<Neighbor>,
}

impl Neighborhood {
    /// Read location and belief of each friend from `store` and weight them
    /// by distance to `origin`.  Order follows `friends`.
    pub fn gather(
        origin: Point,
        friends: &[AgentId],
        store: &HouseholdStore,
    ) -> Result<Self, AgentError> {
        let mut parts = Vec::with_capacity(friends.len());
        for &id in friends {
            if !store.contains(id) {
                return Err(AgentError::AgentNotFound(id));
            }
            let i = id.index();
            parts.push((id, store.belief[i], origin.distance(store.location[i])));
        }
        Ok(Self::from_distances(parts))
    }

    /// Build from `(id, belief, distance)` triples, in the given order.
    pub fn from_distances(parts: impl IntoIterator<Item = (AgentId, f64, f64)>) -> Self {
        let parts: Vec<(AgentId, f64, f64)> = parts.into_iter().collect();
        let distances: Vec<f64> = parts.iter().map(|&(_, _, d)| d).collect();
        let weights = min_max_weights(&distances);
        let entries = parts
            .into_iter()
            .zip(weights)
            .map(|((id, belief, distance), weight)| Neighbor { id, belief, distance, weight })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Neighbor> + '_ {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<AgentId> {
        self.entries.iter().map(|n| n.id).collect()
    }

    pub fn distances(&self) -> Vec<f64> {
        self.entries.iter().map(|n| n.distance).collect()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.entries.iter().map(|n| n.weight).collect()
    }
}
