//! Synthetic small-world social network.

use fa_core::{AgentId, SimRng};
use fa_spatial::{SocialNetwork, SocialNetworkBuilder};

/// Watts–Strogatz style graph: a ring lattice where each household is tied
/// to its `degree / 2` nearest ids on either side, then each lattice tie is
/// rewired to a random household with probability `rewire`.
///
/// Rewiring never creates self-loops or duplicate ties; a draw that would is
/// skipped and the original tie kept.
pub fn small_world(n: usize, degree: usize, rewire: f64, rng: &mut SimRng) -> SocialNetwork {
    let mut b = SocialNetworkBuilder::new(n);
    if n < 2 {
        return b.build();
    }
    let id = |i: usize| AgentId(i as u32);
    let half = (degree / 2).clamp(1, ((n - 1) / 2).max(1));

    for i in 0..n {
        for j in 1..=half {
            b.add_tie(id(i), id((i + j) % n));
        }
    }

    for j in 1..=half {
        for i in 0..n {
            if rng.random::<f64>() >= rewire {
                continue;
            }
            let (a, old) = (id(i), id((i + j) % n));
            let target = id(rng.gen_range(0..n));
            if target == a || !b.has_tie(a, old) || b.has_tie(a, target) {
                continue;
            }
            b.remove_tie(a, old);
            b.add_tie(a, target);
        }
    }
    b.build()
}
