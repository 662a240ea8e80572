//! Equipment modifiers applied on top of a base profile.

/// Offensive equipment.
///
/// `gravity_modifier` multiplies; the rest add to the base value. Tick
/// modifiers are signed and saturate at zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Weapon {
    pub name: String,
    pub gravity_modifier: f32,
    pub jump_force_modifier: f32,
    pub move_speed_modifier: f32,
    pub x_attack_range_modifier: f32,
    pub y_attack_range_modifier: f32,
    pub attack_damage_modifier: f32,
    pub attack_cooldown_modifier: i32,
    pub hit_stun_frames_modifier: i32,
    pub block_stun_frames_modifier: i32,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            name: String::new(),
            gravity_modifier: 1.0,
            jump_force_modifier: 0.0,
            move_speed_modifier: 0.0,
            x_attack_range_modifier: 0.0,
            y_attack_range_modifier: 0.0,
            attack_damage_modifier: 0.0,
            attack_cooldown_modifier: 0,
            hit_stun_frames_modifier: 0,
            block_stun_frames_modifier: 0,
        }
    }
}

/// Defensive equipment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Armour {
    pub name: String,
    pub gravity_modifier: f32,
    pub jump_force_modifier: f32,
    pub move_speed_modifier: f32,
    pub health_modifier: f32,
    pub damage_reduction_modifier: f32,
}

impl Default for Armour {
    fn default() -> Self {
        Self {
            name: String::new(),
            gravity_modifier: 1.0,
            jump_force_modifier: 0.0,
            move_speed_modifier: 0.0,
            health_modifier: 0.0,
            damage_reduction_modifier: 0.0,
        }
    }
}
