//! Error type for policy dispatch.

use steer_core::{AgentId, Behavior};
use steer_path::PathError;
use thiserror::Error;

/// Errors from resolving targets and dispatching steering policies.
///
/// A validated scenario never hits these at runtime: `SimBuilder` checks the
/// same conditions at setup.  They exist so dispatch stays total without
/// panicking on a hand-built, unvalidated agent.
#[derive(Error, Debug)]
pub enum BehaviorError {
    #[error("agent {0}: behavior requires a target but none is set")]
    MissingTarget(AgentId),

    #[error("agent {0}: target references unknown agent {1}")]
    UnknownTarget(AgentId, AgentId),

    #[error("agent {agent}: behavior {behavior} does not match its parameter variant")]
    ParamMismatch { agent: AgentId, behavior: Behavior },

    #[error(transparent)]
    Path(#[from] PathError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
