//! Social-network topology and hop-radius neighbor discovery.
//!
//! # Data layout
//!
//! Nodes are households, identified by `AgentId`.  Ties are undirected and
//! stored in **Compressed Sparse Row (CSR)** form, once per direction, so
//! the ties of household `a` occupy
//!
//! ```text
//! tie_to[ tie_start[a] .. tie_start[a+1] ]
//! ```
//!
//! sorted by ascending neighbor id.  Adjacency is purely topological:
//! household coordinates play no part in who is connected to whom.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use fa_core::AgentId;

// ── SocialNetwork ─────────────────────────────────────────────────────────────

/// Undirected social graph in CSR format.
///
/// Do not construct directly; use [`SocialNetworkBuilder`].  Queries index
/// the CSR arrays directly and panic on an `AgentId` outside the network.
#[derive(Clone, Debug)]
pub struct SocialNetwork {
    /// CSR row pointer.  Length = `node_count + 1`.
    pub tie_start: Vec<u32>,
    /// Neighbor of each directed half-tie, sorted within each row.
    pub tie_to: Vec<AgentId>,
}

impl SocialNetwork {
    /// A network with `node_count` isolated households.
    pub fn isolated(node_count: usize) -> Self {
        SocialNetworkBuilder::new(node_count).build()
    }

    pub fn node_count(&self) -> usize {
        self.tie_start.len() - 1
    }

    /// Number of undirected ties.
    pub fn tie_count(&self) -> usize {
        self.tie_to.len() / 2
    }

    /// Directly tied households of `agent`, ascending by id.
    #[inline]
    pub fn neighbors(&self, agent: AgentId) -> &[AgentId] {
        let start = self.tie_start[agent.index()] as usize;
        let end   = self.tie_start[agent.index() + 1] as usize;
        &self.tie_to[start..end]
    }

    #[inline]
    pub fn degree(&self, agent: AgentId) -> usize {
        self.neighbors(agent).len()
    }

    /// Every household whose shortest hop distance from `agent` is in
    /// `1..=radius`, ascending by id.  `agent` itself is never included and
    /// a radius of 0 yields an empty list.
    ///
    /// Breadth-first search cut off at `radius`; cost is proportional to the
    /// size of the ego network, not the whole graph.
    pub fn neighbors_at_radius(&self, agent: AgentId, radius: u32) -> Vec<AgentId> {
        if radius == 0 {
            return Vec::new();
        }
        let mut seen: FxHashSet<AgentId> = FxHashSet::default();
        seen.insert(agent);
        let mut frontier: VecDeque<(AgentId, u32)> = VecDeque::new();
        frontier.push_back((agent, 0));
        let mut found = Vec::new();

        while let Some((node, hops)) = frontier.pop_front() {
            if hops == radius {
                continue;
            }
            for &next in self.neighbors(node) {
                if seen.insert(next) {
                    found.push(next);
                    frontier.push_back((next, hops + 1));
                }
            }
        }
        found.sort_unstable();
        found
    }

    /// Size of the `radius`-hop ego network of `agent` (excluding itself).
    pub fn count_within(&self, agent: AgentId, radius: u32) -> usize {
        self.neighbors_at_radius(agent, radius).len()
    }
}

// ── SocialNetworkBuilder ──────────────────────────────────────────────────────

/// Collect undirected ties, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use fa_core::AgentId;
/// use fa_spatial::SocialNetworkBuilder;
///
/// let mut b = SocialNetworkBuilder::new(3);
/// b.add_tie(AgentId(0), AgentId(1));
/// b.add_tie(AgentId(1), AgentId(2));
/// let net = b.build();
/// assert_eq!(net.tie_count(), 2);
/// assert_eq!(net.neighbors_at_radius(AgentId(0), 2), vec![AgentId(1), AgentId(2)]);
/// ```
pub struct SocialNetworkBuilder {
    node_count: usize,
    ties:       FxHashSet<(u32, u32)>,
}

impl SocialNetworkBuilder {
    pub fn new(node_count: usize) -> Self {
        Self { node_count, ties: FxHashSet::default() }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn tie_count(&self) -> usize {
        self.ties.len()
    }

    /// `true` if `a` and `b` are already tied.
    pub fn has_tie(&self, a: AgentId, b: AgentId) -> bool {
        self.ties.contains(&(a.0.min(b.0), a.0.max(b.0)))
    }

    /// Add an undirected tie.  Returns `false` (and adds nothing) for a
    /// self-loop or a tie that already exists.
    ///
    /// # Panics
    /// Panics if either endpoint is outside `0..node_count`.
    pub fn add_tie(&mut self, a: AgentId, b: AgentId) -> bool {
        assert!(
            a.index() < self.node_count && b.index() < self.node_count,
            "tie {a}–{b} outside network of {} households",
            self.node_count
        );
        if a == b {
            return false;
        }
        self.ties.insert((a.0.min(b.0), a.0.max(b.0)))
    }

    /// Remove an undirected tie.  Returns `false` if it did not exist.
    pub fn remove_tie(&mut self, a: AgentId, b: AgentId) -> bool {
        self.ties.remove(&(a.0.min(b.0), a.0.max(b.0)))
    }

    /// Consume the builder and produce a [`SocialNetwork`].
    pub fn build(self) -> SocialNetwork {
        let n = self.node_count;

        let mut half: Vec<(u32, u32)> = Vec::with_capacity(self.ties.len() * 2);
        for &(a, b) in &self.ties {
            half.push((a, b));
            half.push((b, a));
        }
        half.sort_unstable();

        let mut tie_start = vec![0u32; n + 1];
        for &(from, _) in &half {
            tie_start[from as usize + 1] += 1;
        }
        for i in 1..=n {
            tie_start[i] += tie_start[i - 1];
        }
        debug_assert_eq!(tie_start[n] as usize, half.len());

        let tie_to = half.into_iter().map(|(_, to)| AgentId(to)).collect();
        SocialNetwork { tie_start, tie_to }
    }
}
