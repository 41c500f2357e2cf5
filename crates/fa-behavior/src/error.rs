use thiserror::Error;

use fa_agent::AgentError;
use fa_core::{AgentId, Tick};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BehaviorError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `stubbornness + weight` was not positive during a belief update.
    /// Construction rejects zero stubbornness, so reaching this means an
    /// invariant was broken.
    #[error(
        "division fault for {agent} at {tick}: stubbornness {stubbornness} + weight {weight} \
         of friend {friend} is not positive"
    )]
    DivisionFault {
        agent:        AgentId,
        tick:         Tick,
        friend:       AgentId,
        stubbornness: f64,
        weight:       f64,
    },

    /// A belief or weight entering the fold was NaN or infinite.
    #[error(
        "non-finite input for {agent} at {tick} from friend {friend}: belief {belief}, \
         friend belief {friend_belief}, weight {weight}"
    )]
    NonFinite {
        agent:         AgentId,
        tick:          Tick,
        friend:        AgentId,
        belief:        f64,
        friend_belief: f64,
        weight:        f64,
    },

    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
