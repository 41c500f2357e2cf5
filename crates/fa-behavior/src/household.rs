//! The household agent.

use tracing::trace;

use fa_agent::{AgentError, HouseholdStore};
use fa_core::AgentId;

use crate::{revise_belief, BehaviorResult, Neighborhood, StepContext, StepReport, Steppable};

/// A household, identified by its row in the [`HouseholdStore`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Household {
    pub id: AgentId,
}

impl Household {
    pub fn new(id: AgentId) -> Self {
        Self { id }
    }

    /// Size of this household's ego network at `ctx`'s hop radius.
    pub fn count_friends(&self, ctx: &StepContext<'_>) -> usize {
        ctx.network.count_within(self.id, ctx.params.hop_radius)
    }
}

impl Steppable for Household {
    fn agent_id(&self) -> AgentId {
        self.id
    }

    fn step(
        &self,
        ctx:   &StepContext<'_>,
        store: &mut HouseholdStore,
    ) -> BehaviorResult<Option<StepReport>> {
        let me = self.id;
        if !store.contains(me) {
            return Err(AgentError::AgentNotFound(me).into());
        }
        let i = me.index();

        let friends = ctx.network.neighbors_at_radius(me, ctx.params.hop_radius);
        let hood = Neighborhood::gather(store.location[i], &friends, store)?;

        let before = store.belief[i];
        let revision = revise_belief(
            me,
            ctx.tick,
            before,
            store.stubbornness[i],
            &hood,
            ctx.params.agreement_gate,
        )?;

        let was = store.adaptation[i];
        let now = ctx.params.adaptation_rule().decide(was, revision.belief);

        store.belief[i] = revision.belief;
        store.adaptation[i] = now;
        store.friend_distances[i] = hood.distances();
        store.weights[i] = hood.weights();
        store.friends[i] = friends;
        store.belief_diff_history[i].push(revision.mean_abs_diff);
        store.current_step[i] += 1;

        let newly_adapted = !was.is_adapted() && now.is_adapted();
        trace!(
            agent = %me,
            tick = %ctx.tick,
            friends = hood.len(),
            applied = revision.applied,
            before,
            after = revision.belief,
            newly_adapted,
            "household step"
        );

        Ok(Some(StepReport {
            agent:         me,
            tick:          ctx.tick,
            belief_before: before,
            belief_after:  revision.belief,
            weights:       hood.iter().map(|n| (n.id, n.weight)).collect(),
            mean_abs_diff: revision.mean_abs_diff,
            newly_adapted,
        }))
    }
}
