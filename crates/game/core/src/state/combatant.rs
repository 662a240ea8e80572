use bitflags::bitflags;

use crate::action::Action;
use crate::config::MatchConfig;
use crate::fighter::FighterProfile;
use crate::frame::Phase;
use crate::machine::{self, Transition};

use super::{CombatState, Facing, PlayerId};

bitflags! {
    /// Per-combatant boolean state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CombatFlags: u8 {
        /// Standing on the floor.
        const GROUNDED = 1 << 0;
        /// Hit or block-reversed during the current tick; cleared at tick end.
        const GOT_STUNNED = 1 << 1;
        /// Current attack already connected; cleared when the attack ends.
        const ATTACK_LANDED = 1 << 2;
        /// Last accepted action has run back to idle.
        const ACTION_COMPLETE = 1 << 3;
    }
}

/// Dynamic state of one fighter within a match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: PlayerId,
    pub profile: FighterProfile,

    // ===== physics =====
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub facing: Facing,
    pub spawn_x: f32,
    pub spawn_y: f32,

    // ===== combat =====
    pub health: f32,
    pub max_health: f32,
    pub attack_cooldown_remaining: u32,
    pub block_cooldown_remaining: u32,
    pub jump_cooldown_remaining: u32,
    pub stun_frames_remaining: u32,

    // ===== state machine =====
    pub current_state: CombatState,
    pub frames_in_state: u32,
    pub flags: CombatFlags,
    pub pending_action: Option<Action>,
    pub last_action_frame: Option<u64>,
}

impl Combatant {
    /// Creates a combatant standing at its spawn point.
    pub fn new(id: PlayerId, profile: FighterProfile, config: &MatchConfig) -> Self {
        let spawn_x = config.spawn_x(id);
        let spawn_y = config.ground_level - profile.height / 2.0;
        let facing = match id {
            PlayerId::One => Facing::Right,
            PlayerId::Two => Facing::Left,
        };

        Self {
            id,
            x: spawn_x,
            y: spawn_y,
            vx: 0.0,
            vy: 0.0,
            facing,
            spawn_x,
            spawn_y,
            health: profile.health,
            max_health: profile.health,
            attack_cooldown_remaining: 0,
            block_cooldown_remaining: 0,
            jump_cooldown_remaining: 0,
            stun_frames_remaining: 0,
            current_state: CombatState::Idle,
            frames_in_state: 0,
            flags: CombatFlags::GROUNDED | CombatFlags::ACTION_COMPLETE,
            pending_action: None,
            last_action_frame: None,
            profile,
        }
    }

    /// Restores the spawn state while keeping the profile.
    pub fn respawn(&mut self, config: &MatchConfig) {
        let profile = core::mem::take(&mut self.profile);
        *self = Self::new(self.id, profile, config);
    }

    pub fn half_width(&self) -> f32 {
        self.profile.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.profile.height / 2.0
    }

    pub fn is_grounded(&self) -> bool {
        self.flags.contains(CombatFlags::GROUNDED)
    }

    pub fn got_stunned(&self) -> bool {
        self.flags.contains(CombatFlags::GOT_STUNNED)
    }

    pub fn attack_landed(&self) -> bool {
        self.flags.contains(CombatFlags::ATTACK_LANDED)
    }

    pub fn action_complete(&self) -> bool {
        self.flags.contains(CombatFlags::ACTION_COMPLETE)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn cooldown_remaining(&self, action: Action) -> u32 {
        match action {
            Action::Attack => self.attack_cooldown_remaining,
            Action::Block => self.block_cooldown_remaining,
            Action::Jump => self.jump_cooldown_remaining,
            Action::Left | Action::Right | Action::Idle => 0,
        }
    }

    pub fn is_on_cooldown(&self, action: Action) -> bool {
        action.has_cooldown() && self.cooldown_remaining(action) > 0
    }

    fn start_cooldown(&mut self, action: Action) {
        let ticks = self.profile.cooldown(action);
        match action {
            Action::Attack => self.attack_cooldown_remaining = ticks,
            Action::Block => self.block_cooldown_remaining = ticks,
            Action::Jump => self.jump_cooldown_remaining = ticks,
            Action::Left | Action::Right | Action::Idle => {}
        }
    }

    pub fn tick_cooldowns(&mut self) {
        self.attack_cooldown_remaining = self.attack_cooldown_remaining.saturating_sub(1);
        self.block_cooldown_remaining = self.block_cooldown_remaining.saturating_sub(1);
        self.jump_cooldown_remaining = self.jump_cooldown_remaining.saturating_sub(1);
    }

    /// Counts down an existing stun. Skipped on the tick the stun was applied.
    pub fn tick_stun(&mut self) {
        if !self.got_stunned() {
            self.stun_frames_remaining = self.stun_frames_remaining.saturating_sub(1);
        }
    }

    /// Applies a stun; the state machine moves to `Stunned` at tick end.
    ///
    /// A zero-length stun is ignored.
    pub fn stun(&mut self, frames: u32) {
        if frames == 0 {
            return;
        }
        self.stun_frames_remaining = frames;
        self.flags.insert(CombatFlags::GOT_STUNNED);
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn clamp_health(&mut self) {
        self.health = self.health.clamp(0.0, self.max_health);
    }

    /// Enters the transition target and applies its entry side effects.
    ///
    /// Cooldowns start on the recovery-to-idle edge. Landed-attack state is
    /// cleared whenever an attack chain is left.
    pub fn enter(&mut self, transition: Transition) {
        let previous = self.current_state;
        let next = transition.to;

        self.current_state = next;
        self.frames_in_state = 0;
        machine::state_effects(next).apply(self);

        if previous.is_attacking() && !next.is_attacking() {
            self.flags.remove(CombatFlags::ATTACK_LANDED);
        }

        if next == CombatState::Idle {
            self.flags.remove(CombatFlags::ATTACK_LANDED);
            if previous != CombatState::Idle {
                self.flags.insert(CombatFlags::ACTION_COMPLETE);
            }
            if let Some((action, Phase::Recovery)) = transition.from.chain() {
                self.start_cooldown(action);
            }
        }

        tracing::trace!(
            target: "core::machine",
            player = %self.id,
            from = %previous,
            to = %next,
            event = ?transition.trigger,
            "state transition"
        );
    }

    /// Records an accepted input.
    pub fn begin_action(&mut self, transition: Transition, frame: u64) {
        self.enter(transition);
        self.last_action_frame = Some(frame);
        self.flags.remove(CombatFlags::ACTION_COMPLETE);
    }

    /// Clears flags that only live for one tick.
    pub fn end_tick(&mut self) {
        self.frames_in_state += 1;
        self.flags.remove(CombatFlags::GOT_STUNNED);
        self.clamp_health();
    }
}
