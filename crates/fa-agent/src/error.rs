use thiserror::Error;

use fa_core::AgentId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    /// Stubbornness must lie in `(0, 1]`; zero would allow a zero
    /// denominator in the belief update.
    #[error("invalid configuration for {agent}: stubbornness {value} is outside (0, 1]")]
    InvalidStubbornness { agent: AgentId, value: f64 },

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
