use fa_core::Tick;
use fa_spatial::SocialNetwork;

use crate::InfluenceParams;

/// Read-only inputs to one agent step.  The household registry is passed
/// separately as the only mutable state.
pub struct StepContext<'a> {
    pub tick:    Tick,
    pub network: &'a SocialNetwork,
    pub params:  &'a InfluenceParams,
}

impl<'a> StepContext<'a> {
    pub fn new(tick: Tick, network: &'a SocialNetwork, params: &'a InfluenceParams) -> Self {
        Self { tick, network, params }
    }
}
