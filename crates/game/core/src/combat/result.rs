//! Combat events and per-tick hit resolution.

use crate::state::{CombatFlags, CombatState, Combatant, PlayerId};

use super::damage::{blocked_damage, hit_damage};
use super::hit::check_hit;

/// Outcome of one connecting attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// Clean hit: the defender takes damage and is stunned.
    Hit {
        attacker: PlayerId,
        defender: PlayerId,
        damage: f32,
        stun_frames: u32,
    },
    /// Blocked hit: the defender takes chip damage and the attacker is stunned.
    Blocked {
        attacker: PlayerId,
        defender: PlayerId,
        damage: f32,
        stun_frames: u32,
    },
    /// Both attacks connected in the same tick. Arrays are indexed by
    /// [`PlayerId::index`] and describe what each player received.
    Trade {
        damage: [f32; 2],
        stun_frames: [u32; 2],
    },
}

impl CombatEvent {
    /// Damage received by `player` from this event.
    pub fn damage_taken(&self, player: PlayerId) -> f32 {
        match *self {
            CombatEvent::Hit {
                defender, damage, ..
            }
            | CombatEvent::Blocked {
                defender, damage, ..
            } if defender == player => damage,
            CombatEvent::Trade { damage, .. } => damage[player.index()],
            _ => 0.0,
        }
    }

    /// Damage dealt by `player` through this event.
    pub fn damage_dealt(&self, player: PlayerId) -> f32 {
        self.damage_taken(player.opponent())
    }
}

/// Resolves attacks between both combatants for the current tick.
///
/// Eligibility for both sides is decided before anything is mutated, so a
/// mutual hit is symmetric regardless of evaluation order.
pub fn resolve_combat(p1: &mut Combatant, p2: &mut Combatant) -> Option<CombatEvent> {
    let p1_hits = check_hit(p1, p2);
    let p2_hits = check_hit(p2, p1);

    let event = match (p1_hits, p2_hits) {
        (true, true) => trade(p1, p2),
        (true, false) => one_sided(p1, p2),
        (false, true) => one_sided(p2, p1),
        (false, false) => return None,
    };

    tracing::debug!(target: "core::combat", ?event, "attack connected");
    Some(event)
}

fn trade(p1: &mut Combatant, p2: &mut Combatant) -> CombatEvent {
    let p1_damage = hit_damage(p2.profile.attack_damage, p1.profile.damage_reduction);
    let p2_damage = hit_damage(p1.profile.attack_damage, p2.profile.damage_reduction);
    let p1_stun = p1.profile.on_hit_stun;
    let p2_stun = p2.profile.on_hit_stun;

    for (combatant, damage, stun) in [(&mut *p1, p1_damage, p1_stun), (&mut *p2, p2_damage, p2_stun)] {
        combatant.take_damage(damage);
        combatant.stun(stun);
        combatant.flags.insert(CombatFlags::ATTACK_LANDED);
    }

    let mut damage = [0.0; 2];
    let mut stun_frames = [0; 2];
    damage[p1.id.index()] = p1_damage;
    damage[p2.id.index()] = p2_damage;
    stun_frames[p1.id.index()] = p1_stun;
    stun_frames[p2.id.index()] = p2_stun;

    CombatEvent::Trade {
        damage,
        stun_frames,
    }
}

fn one_sided(attacker: &mut Combatant, defender: &mut Combatant) -> CombatEvent {
    attacker.flags.insert(CombatFlags::ATTACK_LANDED);
    let attack_damage = attacker.profile.attack_damage;

    if defender.current_state == CombatState::BlockActive {
        let damage = blocked_damage(
            attack_damage,
            defender.profile.block_efficiency,
            defender.profile.damage_reduction,
        );
        let stun_frames = defender.profile.on_block_stun;
        defender.take_damage(damage);
        attacker.stun(stun_frames);

        CombatEvent::Blocked {
            attacker: attacker.id,
            defender: defender.id,
            damage,
            stun_frames,
        }
    } else {
        let damage = hit_damage(attack_damage, defender.profile.damage_reduction);
        let stun_frames = attacker.profile.on_hit_stun;
        defender.take_damage(damage);
        defender.stun(stun_frames);

        CombatEvent::Hit {
            attacker: attacker.id,
            defender: defender.id,
            damage,
            stun_frames,
        }
    }
}
