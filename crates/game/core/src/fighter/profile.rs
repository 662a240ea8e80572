//! Static fighter parameters.
use crate::action::Action;
use crate::error::{ErrorSeverity, GameError};
use crate::frame::FrameDataTable;

use super::modifiers::{Armour, Weapon};

/// Errors raised when a fighter profile cannot be simulated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("fighter '{name}': {field} must be positive, got {value}")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("fighter '{name}': {field} must be finite")]
    NonFinite { name: String, field: &'static str },

    #[error("fighter '{name}': {field} must lie in [0, 1], got {value}")]
    OutOfUnitRange {
        name: String,
        field: &'static str,
        value: f32,
    },
}

impl GameError for ProfileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositive { .. } => "PROFILE_NON_POSITIVE",
            Self::NonFinite { .. } => "PROFILE_NON_FINITE",
            Self::OutOfUnitRange { .. } => "PROFILE_OUT_OF_UNIT_RANGE",
        }
    }
}

/// Body, movement and combat parameters for one fighter.
///
/// Profiles persist across matches; [`crate::MatchState::reset`] only
/// restores the dynamic state built from them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FighterProfile {
    pub name: String,

    // ===== body =====
    pub width: f32,
    pub height: f32,

    // ===== movement =====
    /// Added to vertical velocity every tick.
    pub gravity: f32,
    /// Horizontal velocity multiplier applied outside movement/jump states.
    pub friction: f32,
    pub move_speed: f32,
    pub jump_force: f32,

    // ===== offense =====
    pub x_attack_range: f32,
    pub y_attack_range: f32,
    pub attack_damage: f32,
    pub on_hit_stun: u32,

    // ===== defense =====
    /// Fraction of incoming damage absorbed by a block.
    pub block_efficiency: f32,
    /// Stun inflicted on an attacker whose hit was blocked.
    pub on_block_stun: u32,
    pub damage_reduction: f32,
    pub health: f32,

    // ===== cooldowns (ticks) =====
    pub attack_cooldown: u32,
    pub block_cooldown: u32,
    pub jump_cooldown: u32,

    pub frames: FrameDataTable,
}

impl FighterProfile {
    pub const DEFAULT_NAME: &'static str = "balanced";

    pub fn balanced() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_owned(),
            width: 50.0,
            height: 100.0,
            gravity: 0.8,
            friction: 0.85,
            move_speed: 5.0,
            jump_force: 15.0,
            x_attack_range: 80.0,
            y_attack_range: 40.0,
            attack_damage: 10.0,
            on_hit_stun: 8,
            block_efficiency: 0.75,
            on_block_stun: 12,
            damage_reduction: 0.0,
            health: 100.0,
            attack_cooldown: 20,
            block_cooldown: 15,
            jump_cooldown: 30,
            frames: FrameDataTable::defaults(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_frames(mut self, frames: FrameDataTable) -> Self {
        self.frames = frames;
        self
    }

    /// Cooldown started when the action's recovery ends.
    pub fn cooldown(&self, action: Action) -> u32 {
        match action {
            Action::Attack => self.attack_cooldown,
            Action::Block => self.block_cooldown,
            Action::Jump => self.jump_cooldown,
            Action::Left | Action::Right | Action::Idle => 0,
        }
    }

    /// Applies optional weapon and armour modifiers.
    ///
    /// Gravity modifiers multiply; everything else is additive. Derived
    /// values are clamped so the result always passes [`Self::validate`]
    /// when the base profile does.
    pub fn derive(&self, weapon: Option<&Weapon>, armour: Option<&Armour>) -> Self {
        let mut derived = self.clone();

        if let Some(weapon) = weapon {
            derived.gravity *= weapon.gravity_modifier;
            derived.jump_force += weapon.jump_force_modifier;
            derived.move_speed += weapon.move_speed_modifier;
            derived.x_attack_range += weapon.x_attack_range_modifier;
            derived.y_attack_range += weapon.y_attack_range_modifier;
            derived.attack_damage += weapon.attack_damage_modifier;
            derived.attack_cooldown =
                offset_ticks(derived.attack_cooldown, weapon.attack_cooldown_modifier);
            derived.on_hit_stun = offset_ticks(derived.on_hit_stun, weapon.hit_stun_frames_modifier);
            derived.on_block_stun =
                offset_ticks(derived.on_block_stun, weapon.block_stun_frames_modifier);
        }

        if let Some(armour) = armour {
            derived.gravity *= armour.gravity_modifier;
            derived.jump_force += armour.jump_force_modifier;
            derived.move_speed += armour.move_speed_modifier;
            derived.health += armour.health_modifier;
            derived.damage_reduction += armour.damage_reduction_modifier;
        }

        derived.jump_force = derived.jump_force.max(0.0);
        derived.move_speed = derived.move_speed.max(0.0);
        derived.x_attack_range = derived.x_attack_range.max(0.0);
        derived.y_attack_range = derived.y_attack_range.max(0.0);
        derived.attack_damage = derived.attack_damage.max(0.0);
        derived.gravity = derived.gravity.max(0.0);
        derived.health = derived.health.max(1.0);
        derived.damage_reduction = derived.damage_reduction.clamp(0.0, 1.0);
        derived
    }

    /// Rejects profiles that would break geometry or damage arithmetic.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let finite = [
            ("width", self.width),
            ("height", self.height),
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("x_attack_range", self.x_attack_range),
            ("y_attack_range", self.y_attack_range),
            ("attack_damage", self.attack_damage),
            ("block_efficiency", self.block_efficiency),
            ("damage_reduction", self.damage_reduction),
            ("health", self.health),
        ];
        if let Some((field, _)) = finite.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ProfileError::NonFinite {
                name: self.name.clone(),
                field,
            });
        }

        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("health", self.health),
        ] {
            if value <= 0.0 {
                return Err(ProfileError::NonPositive {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }

        for (field, value) in [
            ("friction", self.friction),
            ("block_efficiency", self.block_efficiency),
            ("damage_reduction", self.damage_reduction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::OutOfUnitRange {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }

        Ok(())
    }
}

impl Default for FighterProfile {
    fn default() -> Self {
        Self::balanced()
    }
}

fn offset_ticks(base: u32, delta: i32) -> u32 {
    base.saturating_add_signed(delta)
}
