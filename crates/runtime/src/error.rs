//! Unified error types surfaced by the runtime.
//!
//! Wraps failures from the engine, content lookups and batch coordination so
//! callers can bubble them up with consistent context.
use thiserror::Error;

use fight_content::ContentError;
use fight_core::{EngineError, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown reward event '{tag}'")]
    UnknownReward { tag: String },

    #[error("reward weight for '{tag}' must be finite, got {weight}")]
    InvalidRewardWeight { tag: String, weight: f32 },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("match task failed to join")]
    MatchJoin(#[source] tokio::task::JoinError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownReward { .. } | Self::InvalidRewardWeight { .. } => {
                ErrorSeverity::Validation
            }
            Self::Engine(err) => err.severity(),
            Self::Content(err) => err.severity(),
            Self::MatchJoin(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownReward { .. } => "RUNTIME_UNKNOWN_REWARD",
            Self::InvalidRewardWeight { .. } => "RUNTIME_INVALID_REWARD_WEIGHT",
            Self::Engine(err) => err.error_code(),
            Self::Content(err) => err.error_code(),
            Self::MatchJoin(_) => "RUNTIME_MATCH_JOIN",
        }
    }
}
