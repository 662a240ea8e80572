//! Error types surfaced by the match engine.

use crate::error::{ErrorSeverity, GameError};
use crate::fighter::ProfileError;
use crate::state::InvalidPlayerId;

/// Errors raised while configuring a match.
///
/// Stepping itself never fails: illegal inputs are dropped.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    InvalidPlayer(#[from] InvalidPlayerId),

    #[error("rejected fighter profile: {0}")]
    Profile(#[from] ProfileError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidPlayer(err) => err.severity(),
            Self::Profile(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPlayer(err) => err.error_code(),
            Self::Profile(err) => err.error_code(),
        }
    }
}
