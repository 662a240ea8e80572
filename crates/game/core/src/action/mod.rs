//! Player-selectable actions.
//!
//! An [`Action`] is a request, not a command: the state machine decides
//! whether the combatant's current state accepts it, and the engine drops
//! requests that arrive during cooldown without reporting an error.

/// Discrete input chosen by a decision provider each tick.
///
/// The discriminants match the action indices used by external policies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Left = 0,
    Right = 1,
    Jump = 2,
    Block = 3,
    Attack = 4,
    Idle = 5,
}

impl Action {
    pub const COUNT: usize = 6;

    /// Every action in index order.
    pub const ALL: [Action; Self::COUNT] = [
        Action::Left,
        Action::Right,
        Action::Jump,
        Action::Block,
        Action::Attack,
        Action::Idle,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns true for actions that start a cooldown once their recovery ends.
    pub const fn has_cooldown(self) -> bool {
        matches!(self, Action::Attack | Action::Block | Action::Jump)
    }
}
