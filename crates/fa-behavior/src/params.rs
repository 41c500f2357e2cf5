//! Social-influence parameters shared by every household.

use crate::{AdaptationRule, BehaviorError, BehaviorResult};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InfluenceParams {
    /// Maximum hop distance at which another household counts as a friend.
    pub hop_radius:           u32,
    /// Friends whose belief differs by more than this are ignored.
    pub agreement_gate:       f64,
    pub adaptation_threshold: f64,
}

impl Default for InfluenceParams {
    fn default() -> Self {
        Self { hop_radius: 1, agreement_gate: 1.0, adaptation_threshold: 0.5 }
    }
}

impl InfluenceParams {
    pub fn adaptation_rule(&self) -> AdaptationRule {
        AdaptationRule::new(self.adaptation_threshold)
    }

    pub fn validate(&self) -> BehaviorResult<()> {
        if !(self.agreement_gate >= 0.0) {
            return Err(BehaviorError::InvalidConfiguration(format!(
                "agreement_gate must be >= 0, got {}",
                self.agreement_gate
            )));
        }
        if !(0.0..=1.0).contains(&self.adaptation_threshold) {
            return Err(BehaviorError::InvalidConfiguration(format!(
                "adaptation_threshold must be in [0, 1], got {}",
                self.adaptation_threshold
            )));
        }
        Ok(())
    }
}
