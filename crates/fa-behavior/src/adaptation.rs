use fa_agent::AdaptationState;

/// One-way threshold transition.
///
/// `NotAdapted` becomes `Adapted` once belief is strictly above
/// `threshold`; `Adapted` never reverts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdaptationRule {
    pub threshold: f64,
}

impl Default for AdaptationRule {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl AdaptationRule {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn decide(&self, current: AdaptationState, belief: f64) -> AdaptationState {
        match current {
            AdaptationState::Adapted => AdaptationState::Adapted,
            AdaptationState::NotAdapted if belief > self.threshold => AdaptationState::Adapted,
            AdaptationState::NotAdapted => AdaptationState::NotAdapted,
        }
    }
}
