//! Content lookup and validation errors.

use fight_core::{ErrorSeverity, GameError, ProfileError};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ContentError {
    #[error("unknown fighter '{tag}'")]
    UnknownFighter { tag: String },

    #[error("fighter '{tag}' is already registered")]
    DuplicateFighter { tag: String },

    #[error("fighter '{tag}' is invalid: {source}")]
    InvalidFighter {
        tag: String,
        #[source]
        source: ProfileError,
    },

    #[error("unknown weapon '{name}'")]
    UnknownWeapon { name: String },

    #[error("unknown armour '{name}'")]
    UnknownArmour { name: String },
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFighter { .. } => "CONTENT_UNKNOWN_FIGHTER",
            Self::DuplicateFighter { .. } => "CONTENT_DUPLICATE_FIGHTER",
            Self::InvalidFighter { .. } => "CONTENT_INVALID_FIGHTER",
            Self::UnknownWeapon { .. } => "CONTENT_UNKNOWN_WEAPON",
            Self::UnknownArmour { .. } => "CONTENT_UNKNOWN_ARMOUR",
        }
    }
}
