use fetch_core::{AgentId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecideError {
    /// The host reported a NaN or infinite position for this agent.
    /// Nothing sensible can be decided from it; the batch boundary
    /// substitutes the safe halt decision.
    #[error("agent {agent} reported a non-finite position")]
    NonFinitePosition { agent: AgentId },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type DecideResult<T> = Result<T, DecideError>;
