use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("a move needs at least one step")]
    ZeroSteps,

    #[error("walker at {position} has no move in progress")]
    NotMoving { position: Position },

    #[error("walker is already travelling to {target}")]
    AlreadyTransitioning { target: Position },

    #[error("walker at {position} is not between tiles")]
    NotTransitioning { position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ZeroSteps => ErrorSeverity::Validation,
            Self::NotMoving { .. }
            | Self::AlreadyTransitioning { .. }
            | Self::NotTransitioning { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroSteps => "MOVE_ZERO_STEPS",
            Self::NotMoving { .. } => "MOVE_NOT_MOVING",
            Self::AlreadyTransitioning { .. } => "MOVE_ALREADY_TRANSITIONING",
            Self::NotTransitioning { .. } => "MOVE_NOT_TRANSITIONING",
        }
    }
}
