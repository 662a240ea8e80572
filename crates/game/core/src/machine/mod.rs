//! Combat state machine.
//!
//! Transitions are driven by two kinds of events: inputs chosen by a
//! decision provider, and automatic events raised at tick end (phase
//! windows elapsing, jump apex, landing, stun start and end).
//!
//! Two rules keep frame data faithful:
//!
//! - A phase whose window is zero ticks is never occupied. Entering it
//!   immediately follows its `FrameComplete` edge, recursively, so a
//!   `0/1/0` movement chain goes straight to the active state.
//! - Leaving stun or any recovery phase returns to the state matching the
//!   physical situation: `Idle` on the floor, otherwise `JumpRising` or
//!   `JumpFalling` by the sign of vertical velocity.
mod effects;

pub use effects::{EffectSet, MAX_EFFECTS, StateEffect, Velocity};

use crate::action::Action;
use crate::frame::FrameDataTable;
use crate::state::{CombatState, Combatant, Facing};

/// Event that may move a combatant to another state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MachineEvent {
    Input(Action),
    FrameComplete,
    PeakReached,
    Landed,
    Stunned,
    StunOver,
}

/// A resolved state change.
///
/// `from` is the source of the final edge, which differs from the occupied
/// state when zero-length phases were skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: CombatState,
    pub to: CombatState,
    pub trigger: MachineEvent,
}

enum Target {
    State(CombatState),
    /// Idle, rising or falling depending on physics.
    SmartReturn,
}

/// Number of ticks spent in `state` before `FrameComplete` fires.
///
/// `None` means the state ends only on another event.
pub fn phase_length(state: CombatState, frames: &FrameDataTable) -> Option<u32> {
    match state {
        CombatState::JumpActive => Some(1),
        _ => state
            .chain()
            .map(|(action, phase)| frames.window(action).phase(phase)),
    }
}

fn target(state: CombatState, event: MachineEvent) -> Option<Target> {
    match event {
        MachineEvent::Input(action) => {
            let accepts = match action {
                Action::Idle => false,
                Action::Jump => state == CombatState::Idle,
                Action::Left | Action::Right | Action::Attack | Action::Block => {
                    state.is_actionable()
                }
            };
            if accepts {
                CombatState::startup_of(action).map(Target::State)
            } else {
                None
            }
        }
        MachineEvent::FrameComplete if state.is_recovery() => Some(Target::SmartReturn),
        MachineEvent::FrameComplete => state.after_frame_complete().map(Target::State),
        MachineEvent::PeakReached => {
            (state == CombatState::JumpRising).then_some(Target::State(CombatState::JumpFalling))
        }
        MachineEvent::Landed => {
            (state == CombatState::JumpFalling).then_some(Target::State(CombatState::JumpRecovery))
        }
        MachineEvent::Stunned => {
            (state != CombatState::Stunned).then_some(Target::State(CombatState::Stunned))
        }
        MachineEvent::StunOver => (state == CombatState::Stunned).then_some(Target::SmartReturn),
    }
}

/// Whether the transition table has an edge for `event` out of `state`.
pub fn can_transition(state: CombatState, event: MachineEvent) -> bool {
    target(state, event).is_some()
}

/// Resolves `event` from `state`, following zero-length phases.
///
/// Returns `None` when the table has no edge.
pub fn resolve(combatant: &Combatant, state: CombatState, event: MachineEvent) -> Option<Transition> {
    let to = match target(state, event)? {
        Target::State(next) => next,
        Target::SmartReturn => smart_return(combatant),
    };

    if phase_length(to, &combatant.profile.frames) == Some(0) {
        if let Some(skipped) = resolve(combatant, to, MachineEvent::FrameComplete) {
            return Some(skipped);
        }
    }

    Some(Transition {
        from: state,
        to,
        trigger: event,
    })
}

/// Target state for `event`, or `state` itself when no edge exists.
pub fn next_state(combatant: &Combatant, state: CombatState, event: MachineEvent) -> CombatState {
    resolve(combatant, state, event).map_or(state, |transition| transition.to)
}

/// Automatic event pending for the combatant at tick end, if any.
///
/// Checked in priority order: a fresh stun wins over everything else.
pub fn should_auto_transition(combatant: &Combatant) -> Option<MachineEvent> {
    let state = combatant.current_state;

    if combatant.got_stunned() && state != CombatState::Stunned {
        return Some(MachineEvent::Stunned);
    }

    if state == CombatState::Stunned {
        return (combatant.stun_frames_remaining == 0).then_some(MachineEvent::StunOver);
    }

    if let Some(length) = phase_length(state, &combatant.profile.frames) {
        if combatant.frames_in_state >= length {
            return Some(MachineEvent::FrameComplete);
        }
    }

    match state {
        CombatState::JumpRising if combatant.vy >= 0.0 => Some(MachineEvent::PeakReached),
        CombatState::JumpFalling if combatant.is_grounded() => Some(MachineEvent::Landed),
        _ => None,
    }
}

/// Entry side effects for `state`.
pub fn state_effects(state: CombatState) -> EffectSet {
    match state {
        CombatState::LeftActive => EffectSet::new()
            .with(StateEffect::SetVelocityX(Velocity::MoveSpeed(-1.0)))
            .with(StateEffect::SetFacing(Facing::Left)),
        CombatState::RightActive => EffectSet::new()
            .with(StateEffect::SetVelocityX(Velocity::MoveSpeed(1.0)))
            .with(StateEffect::SetFacing(Facing::Right)),
        CombatState::JumpActive => {
            EffectSet::new().with(StateEffect::SetVelocityY(Velocity::JumpForce(-1.0)))
        }
        CombatState::Idle => EffectSet::new().with(StateEffect::ZeroVelocityX),
        _ => EffectSet::new(),
    }
}

fn smart_return(combatant: &Combatant) -> CombatState {
    if combatant.is_grounded() {
        CombatState::Idle
    } else if combatant.vy < 0.0 {
        CombatState::JumpRising
    } else {
        CombatState::JumpFalling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::fighter::FighterProfile;
    use crate::frame::FrameWindow;
    use crate::state::{CombatFlags, PlayerId};

    fn fighter(frames: FrameDataTable) -> Combatant {
        Combatant::new(
            PlayerId::One,
            FighterProfile::balanced().with_frames(frames),
            &MatchConfig::new(),
        )
    }

    #[test]
    fn movement_skips_zero_startup() {
        let c = fighter(FrameDataTable::defaults());
        let transition = resolve(&c, CombatState::Idle, MachineEvent::Input(Action::Left));

        assert_eq!(
            transition.map(|t| t.to),
            Some(CombatState::LeftActive),
        );
    }

    #[test]
    fn all_zero_chain_lands_back_in_idle_through_recovery() {
        let frames = FrameDataTable::defaults().with_window(Action::Attack, FrameWindow::new(0, 0, 0));
        let c = fighter(frames);

        let transition = resolve(&c, CombatState::Idle, MachineEvent::Input(Action::Attack))
            .expect("attack accepted from idle");

        assert_eq!(transition.to, CombatState::Idle);
        assert_eq!(transition.from, CombatState::AttackRecovery);
    }

    #[test]
    fn jump_only_from_idle() {
        assert!(can_transition(CombatState::Idle, MachineEvent::Input(Action::Jump)));
        assert!(!can_transition(CombatState::JumpRising, MachineEvent::Input(Action::Jump)));
        assert!(can_transition(CombatState::JumpFalling, MachineEvent::Input(Action::Attack)));
        assert!(!can_transition(CombatState::AttackActive, MachineEvent::Input(Action::Block)));
        assert!(!can_transition(CombatState::Idle, MachineEvent::Input(Action::Idle)));
    }

    #[test]
    fn unknown_edge_keeps_state() {
        let c = fighter(FrameDataTable::defaults());
        assert_eq!(
            next_state(&c, CombatState::Idle, MachineEvent::Landed),
            CombatState::Idle
        );
        assert!(!can_transition(CombatState::Stunned, MachineEvent::Stunned));
    }

    #[test]
    fn stun_event_takes_priority() {
        let mut c = fighter(FrameDataTable::defaults());
        c.current_state = CombatState::AttackStartup;
        c.frames_in_state = 3;
        c.stun(5);

        assert_eq!(should_auto_transition(&c), Some(MachineEvent::Stunned));
    }

    #[test]
    fn smart_return_follows_physics() {
        let mut c = fighter(FrameDataTable::defaults());
        c.current_state = CombatState::Stunned;
        assert_eq!(should_auto_transition(&c), Some(MachineEvent::StunOver));
        assert_eq!(next_state(&c, CombatState::Stunned, MachineEvent::StunOver), CombatState::Idle);

        c.flags.remove(CombatFlags::GROUNDED);
        c.vy = -3.0;
        assert_eq!(
            next_state(&c, CombatState::Stunned, MachineEvent::StunOver),
            CombatState::JumpRising
        );

        c.vy = 2.0;
        assert_eq!(
            next_state(&c, CombatState::Stunned, MachineEvent::StunOver),
            CombatState::JumpFalling
        );
    }

    #[test]
    fn airborne_recovery_returns_to_jump_state() {
        let mut c = fighter(FrameDataTable::defaults());
        c.current_state = CombatState::AttackRecovery;
        c.flags.remove(CombatFlags::GROUNDED);
        c.vy = 4.0;

        let transition = resolve(&c, CombatState::AttackRecovery, MachineEvent::FrameComplete)
            .expect("recovery always completes");
        assert_eq!(transition.to, CombatState::JumpFalling);
        assert_eq!(transition.from, CombatState::AttackRecovery);

        c.vy = -4.0;
        assert_eq!(
            next_state(&c, CombatState::BlockRecovery, MachineEvent::FrameComplete),
            CombatState::JumpRising
        );

        c.flags.insert(CombatFlags::GROUNDED);
        c.vy = 0.0;
        assert_eq!(
            next_state(&c, CombatState::JumpRecovery, MachineEvent::FrameComplete),
            CombatState::Idle
        );
    }

    #[test]
    fn jump_active_lasts_one_tick() {
        let mut c = fighter(FrameDataTable::defaults());
        c.current_state = CombatState::JumpActive;
        c.frames_in_state = 0;
        assert_eq!(should_auto_transition(&c), None);

        c.frames_in_state = 1;
        assert_eq!(should_auto_transition(&c), Some(MachineEvent::FrameComplete));
        assert_eq!(phase_length(CombatState::JumpRising, &c.profile.frames), None);
    }

    #[test]
    fn movement_effects_set_velocity_and_facing() {
        let mut c = fighter(FrameDataTable::defaults());
        state_effects(CombatState::LeftActive).apply(&mut c);
        assert_eq!(c.vx, -5.0);
        assert_eq!(c.facing, Facing::Left);

        state_effects(CombatState::JumpActive).apply(&mut c);
        assert_eq!(c.vy, -15.0);

        state_effects(CombatState::Idle).apply(&mut c);
        assert_eq!(c.vx, 0.0);
        assert!(state_effects(CombatState::AttackActive).is_empty());
    }
}
