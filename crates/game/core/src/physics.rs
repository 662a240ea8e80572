//! Per-tick kinematics.
//!
//! Order per combatant: gravity, integration, horizontal clamp, floor
//! collision, friction. Y grows downward.
use crate::config::MatchConfig;
use crate::state::{CombatFlags, CombatState, Combatant};

/// States that keep their commanded horizontal velocity for the whole window.
pub fn is_friction_exempt(state: CombatState) -> bool {
    matches!(
        state,
        CombatState::AttackActive | CombatState::LeftActive | CombatState::RightActive
    )
}

/// Advances one combatant by one tick.
pub fn integrate(combatant: &mut Combatant, config: &MatchConfig) {
    combatant.vy += combatant.profile.gravity;
    combatant.x += combatant.vx;
    combatant.y += combatant.vy;

    let half_width = combatant.half_width();
    combatant.x = combatant
        .x
        .max(half_width)
        .min(config.arena_width - half_width);

    let half_height = combatant.half_height();
    if combatant.y + half_height >= config.ground_level {
        combatant.y = config.ground_level - half_height;
        combatant.vy = 0.0;
        combatant.flags.insert(CombatFlags::GROUNDED);
    } else {
        combatant.flags.remove(CombatFlags::GROUNDED);
    }

    if !is_friction_exempt(combatant.current_state) {
        combatant.vx *= combatant.profile.friction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::FighterProfile;
    use crate::state::PlayerId;

    fn fighter() -> (Combatant, MatchConfig) {
        let config = MatchConfig::new();
        (
            Combatant::new(PlayerId::One, FighterProfile::balanced(), &config),
            config,
        )
    }

    #[test]
    fn standing_fighter_stays_grounded() {
        let (mut c, config) = fighter();
        integrate(&mut c, &config);

        assert!(c.is_grounded());
        assert_eq!(c.vy, 0.0);
        assert_eq!(c.y, 300.0);
    }

    #[test]
    fn clamps_to_arena_walls() {
        let (mut c, config) = fighter();
        c.x = 10.0;
        c.vx = -50.0;
        integrate(&mut c, &config);
        assert_eq!(c.x, 25.0);

        c.x = 790.0;
        c.vx = 50.0;
        integrate(&mut c, &config);
        assert_eq!(c.x, 775.0);
    }

    #[test]
    fn friction_skips_active_movement_and_attack() {
        let (mut c, config) = fighter();
        c.current_state = CombatState::LeftActive;
        c.vx = -5.0;
        integrate(&mut c, &config);
        assert_eq!(c.vx, -5.0);

        c.current_state = CombatState::JumpRising;
        integrate(&mut c, &config);
        assert_eq!(c.vx, -5.0 * 0.85);
    }

    #[test]
    fn airborne_fighter_accelerates_downward() {
        let (mut c, config) = fighter();
        c.y = 100.0;
        c.vy = -15.0;
        integrate(&mut c, &config);

        assert!(!c.is_grounded());
        assert!((c.vy + 14.2).abs() < 1e-5);
        assert!((c.y - 85.8).abs() < 1e-4);
    }
}
