//! Declarative side effects applied on state entry.
use arrayvec::ArrayVec;

use crate::state::{Combatant, Facing};

/// Maximum number of effects attached to a single state.
pub const MAX_EFFECTS: usize = 2;

/// Velocity source, resolved against the combatant's profile when applied.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Velocity {
    Fixed(f32),
    /// Profile `move_speed` multiplied by the sign.
    MoveSpeed(f32),
    /// Profile `jump_force` multiplied by the sign.
    JumpForce(f32),
}

impl Velocity {
    fn resolve(self, combatant: &Combatant) -> f32 {
        match self {
            Velocity::Fixed(value) => value,
            Velocity::MoveSpeed(sign) => sign * combatant.profile.move_speed,
            Velocity::JumpForce(sign) => sign * combatant.profile.jump_force,
        }
    }
}

/// Single entry side effect.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateEffect {
    SetVelocityX(Velocity),
    SetVelocityY(Velocity),
    SetFacing(Facing),
    ZeroVelocityX,
}

/// Ordered effects attached to a state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectSet(ArrayVec<StateEffect, MAX_EFFECTS>);

impl EffectSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, effect: StateEffect) -> Self {
        self.0.push(effect);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interprets every effect in order.
    pub fn apply(&self, combatant: &mut Combatant) {
        for effect in &self.0 {
            match *effect {
                StateEffect::SetVelocityX(velocity) => combatant.vx = velocity.resolve(combatant),
                StateEffect::SetVelocityY(velocity) => combatant.vy = velocity.resolve(combatant),
                StateEffect::SetFacing(facing) => combatant.facing = facing,
                StateEffect::ZeroVelocityX => combatant.vx = 0.0,
            }
        }
    }
}
