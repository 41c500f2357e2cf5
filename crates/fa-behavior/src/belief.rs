//! Sequential, weighted belief revision.

use fa_core::{AgentId, Tick};

use crate::{BehaviorError, BehaviorResult, Neighborhood};

/// Outcome of one [`revise_belief`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeliefRevision {
    pub belief:        f64,
    /// Mean of `|belief - friend.belief|` over every friend, measured after
    /// the fold.  0 when there are no friends.
    pub mean_abs_diff: f64,
    /// Friends that passed the agreement gate.
    pub applied:       usize,
}

/// One influence step: the stubbornness-weighted mean of `belief` and
/// `friend_belief`.
///
/// Returns `None` when `stubbornness + weight` is not positive.  For
/// `stubbornness > 0` and `weight >= 0` the result is a convex combination,
/// so it lies between the two beliefs.
#[inline]
pub fn blend(belief: f64, stubbornness: f64, friend_belief: f64, weight: f64) -> Option<f64> {
    let denom = stubbornness + weight;
    if !(denom > 0.0) || !denom.is_finite() {
        return None;
    }
    Some((stubbornness * belief + friend_belief * weight) / denom)
}

/// Fold every friend of `agent` into `belief`, in neighborhood order.
///
/// A friend contributes only if `|belief - friend.belief| <= gate`, checked
/// against the belief as revised so far.  A later friend therefore sees the
/// effect of earlier ones.  A NaN or infinite belief or weight fails with
/// [`BehaviorError::NonFinite`] before it can reach the gate.
pub fn revise_belief(
    agent: AgentId,
    tick: Tick,
    belief: f64,
    stubbornness: f64,
    hood: &Neighborhood,
    gate: f64,
) -> BehaviorResult<BeliefRevision> {
    let mut b = belief;
    let mut applied = 0;

    for friend in hood.iter() {
        if !(b.is_finite() && friend.belief.is_finite() && friend.weight.is_finite()) {
            return Err(BehaviorError::NonFinite {
                agent,
                tick,
                friend: friend.id,
                belief: b,
                friend_belief: friend.belief,
                weight: friend.weight,
            });
        }
        if (b - friend.belief).abs() > gate {
            continue;
        }
        b = blend(b, stubbornness, friend.belief, friend.weight)
            .ok_or(BehaviorError::DivisionFault {
                agent,
                tick,
                friend: friend.id,
                stubbornness,
                weight: friend.weight,
            })?;
        applied += 1;
    }

    let mean_abs_diff = if hood.is_empty() {
        0.0
    } else {
        hood.iter().map(|f| (b - f.belief).abs()).sum::<f64>() / hood.len() as f64
    };

    Ok(BeliefRevision { belief: b, mean_abs_diff, applied })
}
