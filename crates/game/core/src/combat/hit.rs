//! Hitbox geometry and overlap checks.

use crate::state::{CombatState, Combatant};

/// Axis-aligned rectangle with normalised corners (`x1 <= x2`, `y1 <= y2`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hitbox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Hitbox {
    /// Builds a box from two arbitrary corners.
    pub fn from_corners(ax: f32, ay: f32, bx: f32, by: f32) -> Self {
        Self {
            x1: ax.min(bx),
            y1: ay.min(by),
            x2: ax.max(bx),
            y2: ay.max(by),
        }
    }

    pub fn centered(x: f32, y: f32, width: f32, height: f32) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::from_corners(x - hw, y - hh, x + hw, y + hh)
    }

    /// Separating-axis test; touching edges count as overlap.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        !(self.x2 < other.x1 || other.x2 < self.x1 || self.y2 < other.y1 || other.y2 < self.y1)
    }
}

/// Body box centred on the combatant.
pub fn body_hitbox(combatant: &Combatant) -> Hitbox {
    Hitbox::centered(
        combatant.x,
        combatant.y,
        combatant.profile.width,
        combatant.profile.height,
    )
}

/// Attack box, present only during `AttackActive`.
///
/// Starts at the leading body edge and extends `x_attack_range` in the
/// facing direction, spanning `y_attack_range` around the centre line.
pub fn attack_hitbox(combatant: &Combatant) -> Option<Hitbox> {
    if combatant.current_state != CombatState::AttackActive {
        return None;
    }

    let profile = &combatant.profile;
    let direction = combatant.facing.sign();
    let front = combatant.x + direction * combatant.half_width();
    let reach = front + direction * profile.x_attack_range;
    let half_span = profile.y_attack_range / 2.0;

    Some(Hitbox::from_corners(
        front,
        combatant.y - half_span,
        reach,
        combatant.y + half_span,
    ))
}

/// Whether `attacker` connects with `defender` this tick.
///
/// An attack lands at most once per active window.
pub fn check_hit(attacker: &Combatant, defender: &Combatant) -> bool {
    if attacker.attack_landed() {
        return false;
    }
    attack_hitbox(attacker).is_some_and(|attack| attack.overlaps(&body_hitbox(defender)))
}
