use crate::action::Action;
use crate::frame::Phase;

/// Discrete combat state of a combatant.
///
/// Movement, attack and block chains each have startup, active and recovery
/// states. Jumps replace the single active phase with an impulse tick followed
/// by rising and falling states that end on physics events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatState {
    Idle,

    LeftStartup,
    LeftActive,
    LeftRecovery,

    RightStartup,
    RightActive,
    RightRecovery,

    AttackStartup,
    AttackActive,
    AttackRecovery,

    BlockStartup,
    BlockActive,
    BlockRecovery,

    JumpStartup,
    /// Single tick that applies the upward impulse.
    JumpActive,
    JumpRising,
    JumpFalling,
    JumpRecovery,

    Stunned,
}

impl CombatState {
    /// States in which a new input may be accepted.
    pub const fn is_actionable(self) -> bool {
        matches!(
            self,
            CombatState::Idle | CombatState::JumpRising | CombatState::JumpFalling
        )
    }

    pub const fn is_recovery(self) -> bool {
        matches!(self.chain(), Some((_, Phase::Recovery)))
    }

    pub const fn is_attacking(self) -> bool {
        matches!(
            self,
            CombatState::AttackStartup | CombatState::AttackActive | CombatState::AttackRecovery
        )
    }

    pub const fn is_blocking(self) -> bool {
        matches!(
            self,
            CombatState::BlockStartup | CombatState::BlockActive | CombatState::BlockRecovery
        )
    }

    pub const fn is_jumping(self) -> bool {
        matches!(
            self,
            CombatState::JumpStartup
                | CombatState::JumpActive
                | CombatState::JumpRising
                | CombatState::JumpFalling
                | CombatState::JumpRecovery
        )
    }

    /// Action chain and phase for states with a fixed frame window.
    ///
    /// Rising, falling, idle and stunned states have no window.
    pub const fn chain(self) -> Option<(Action, Phase)> {
        use CombatState::*;
        match self {
            LeftStartup => Some((Action::Left, Phase::Startup)),
            LeftActive => Some((Action::Left, Phase::Active)),
            LeftRecovery => Some((Action::Left, Phase::Recovery)),
            RightStartup => Some((Action::Right, Phase::Startup)),
            RightActive => Some((Action::Right, Phase::Active)),
            RightRecovery => Some((Action::Right, Phase::Recovery)),
            AttackStartup => Some((Action::Attack, Phase::Startup)),
            AttackActive => Some((Action::Attack, Phase::Active)),
            AttackRecovery => Some((Action::Attack, Phase::Recovery)),
            BlockStartup => Some((Action::Block, Phase::Startup)),
            BlockActive => Some((Action::Block, Phase::Active)),
            BlockRecovery => Some((Action::Block, Phase::Recovery)),
            JumpStartup => Some((Action::Jump, Phase::Startup)),
            JumpActive => Some((Action::Jump, Phase::Active)),
            JumpRecovery => Some((Action::Jump, Phase::Recovery)),
            Idle | JumpRising | JumpFalling | Stunned => None,
        }
    }

    /// State that follows `self` when its window elapses.
    ///
    /// Recovery states have no fixed successor: they return to idle or the
    /// airborne state matching the combatant's physics.
    pub const fn after_frame_complete(self) -> Option<CombatState> {
        use CombatState::*;
        match self {
            LeftStartup => Some(LeftActive),
            LeftActive => Some(LeftRecovery),
            RightStartup => Some(RightActive),
            RightActive => Some(RightRecovery),
            AttackStartup => Some(AttackActive),
            AttackActive => Some(AttackRecovery),
            BlockStartup => Some(BlockActive),
            BlockActive => Some(BlockRecovery),
            JumpStartup => Some(JumpActive),
            JumpActive => Some(JumpRising),
            LeftRecovery | RightRecovery | AttackRecovery | BlockRecovery | JumpRecovery
            | Idle | JumpRising | JumpFalling | Stunned => None,
        }
    }

    /// Entry state for an input action.
    pub const fn startup_of(action: Action) -> Option<CombatState> {
        match action {
            Action::Left => Some(CombatState::LeftStartup),
            Action::Right => Some(CombatState::RightStartup),
            Action::Jump => Some(CombatState::JumpStartup),
            Action::Block => Some(CombatState::BlockStartup),
            Action::Attack => Some(CombatState::AttackStartup),
            Action::Idle => None,
        }
    }
}
