//! Damage arithmetic.

/// Damage from a clean hit.
pub fn hit_damage(attack_damage: f32, damage_reduction: f32) -> f32 {
    attack_damage * (1.0 - damage_reduction)
}

/// Damage that leaks through a block.
pub fn blocked_damage(attack_damage: f32, block_efficiency: f32, damage_reduction: f32) -> f32 {
    attack_damage * (1.0 - block_efficiency) * (1.0 - damage_reduction)
}
