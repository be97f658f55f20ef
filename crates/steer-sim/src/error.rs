use steer_behavior::BehaviorError;
use steer_core::SteerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scenario configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Core(#[from] SteerError),
}

pub type SimResult<T> = Result<T, SimError>;
