use core::fmt;

use crate::error::{ErrorSeverity, GameError};

/// Raised when a raw player id is outside `1..=2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid player id {0}: expected 1 or 2")]
pub struct InvalidPlayerId(pub u8);

impl GameError for InvalidPlayerId {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "INVALID_PLAYER_ID"
    }
}

/// One of the two seats in a match.
///
/// Player one is always evaluated first within a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One = 1,
    Two = 2,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Validates a raw 1-based id coming from a host interface.
    pub fn new(raw: u8) -> Result<Self, InvalidPlayerId> {
        match raw {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(InvalidPlayerId(other)),
        }
    }

    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Zero-based slot used for per-player arrays.
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.get())
    }
}

/// Direction a combatant faces; attacks extend in this direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub const fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Final result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    PlayerOne,
    PlayerTwo,
    Draw,
}

impl Winner {
    pub const fn from_player(player: PlayerId) -> Self {
        match player {
            PlayerId::One => Winner::PlayerOne,
            PlayerId::Two => Winner::PlayerTwo,
        }
    }

    pub const fn player(self) -> Option<PlayerId> {
        match self {
            Winner::PlayerOne => Some(PlayerId::One),
            Winner::PlayerTwo => Some(PlayerId::Two),
            Winner::Draw => None,
        }
    }

    /// Host encoding: 1 or 2 for a winner, 0 for a draw.
    pub const fn as_u8(self) -> u8 {
        match self {
            Winner::PlayerOne => 1,
            Winner::PlayerTwo => 2,
            Winner::Draw => 0,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::PlayerOne => f.write_str("player one"),
            Winner::PlayerTwo => f.write_str("player two"),
            Winner::Draw => f.write_str("draw"),
        }
    }
}
