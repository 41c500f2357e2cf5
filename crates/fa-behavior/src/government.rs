use fa_agent::HouseholdStore;
use fa_core::AgentId;

use crate::{BehaviorResult, StepContext, StepReport, Steppable};

/// A government agent.  Scheduled like a household but its step has no
/// effect.
///
/// Government ids live in their own space, separate from household ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Government {
    pub id: AgentId,
}

impl Government {
    pub fn new(id: AgentId) -> Self {
        Self { id }
    }
}

impl Steppable for Government {
    fn agent_id(&self) -> AgentId {
        self.id
    }

    fn step(&self, _ctx: &StepContext<'_>, _store: &mut HouseholdStore) -> BehaviorResult<Option<StepReport>> {
        Ok(None)
    }
}
