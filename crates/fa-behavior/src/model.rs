//! The `Steppable` trait: anything the scheduler activates once per tick.

use fa_agent::HouseholdStore;
use fa_core::{AgentId, Tick};

use crate::{BehaviorResult, StepContext};

/// An entity that takes one step per tick.
///
/// Steps run one at a time in the scheduler's activation order.  A step
/// writes only its own row of `store` but may read any other row, so a
/// household activated later in a tick sees beliefs already revised earlier
/// in the same tick.
///
/// # Example
///
/// ```rust,ignore
/// let ctx = StepContext::new(tick, &network, &params);
/// for agent in &agents {
///     if let Some(report) = agent.step(&ctx, &mut store)? {
///         observer.on_household_step(&report);
///     }
/// }
/// ```
pub trait Steppable: Send + Sync {
    fn agent_id(&self) -> AgentId;

    /// Advance by one tick.  Returns `None` for entities with nothing to
    /// report.
    fn step(
        &self,
        ctx:   &StepContext<'_>,
        store: &mut HouseholdStore,
    ) -> BehaviorResult<Option<StepReport>>;
}

/// What one household step did.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    pub agent:          AgentId,
    pub tick:           Tick,
    pub belief_before:  f64,
    pub belief_after:   f64,
    /// `(friend, weight)` in the order friends were folded in.
    pub weights:        Vec<(AgentId, f64)>,
    pub mean_abs_diff:  f64,
    /// `true` only on the step where the household crossed the threshold.
    pub newly_adapted:  bool,
}
