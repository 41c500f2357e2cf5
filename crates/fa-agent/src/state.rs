//! Adaptation state of a household.

/// Whether a household has taken protective measures.
///
/// `Adapted` is absorbing: no transition leads back to `NotAdapted`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdaptationState {
    #[default]
    NotAdapted,
    Adapted,
}

impl AdaptationState {
    #[inline]
    pub fn is_adapted(self) -> bool {
        matches!(self, AdaptationState::Adapted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdaptationState::NotAdapted => "not_adapted",
            AdaptationState::Adapted    => "adapted",
        }
    }
}

impl std::fmt::Display for AdaptationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
