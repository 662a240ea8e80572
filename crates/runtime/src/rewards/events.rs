//! Built-in reward events.
use fight_core::{MatchState, PlayerId, Winner};

use super::{RewardCategory, RewardEvent};

/// Horizontal gap between the fighters as a fraction of the arena width.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistanceX;

impl RewardEvent for DistanceX {
    fn tag(&self) -> &'static str {
        "distance_x"
    }

    fn category(&self) -> RewardCategory {
        RewardCategory::Distance
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn measure(&self, state: &MatchState, _player: PlayerId) -> f32 {
        let width = state.config.arena_width;
        if width <= 0.0 {
            return 0.0;
        }
        state.distance().0 / width
    }
}

/// Damage dealt this tick, relative to the opponent's maximum health.
#[derive(Clone, Copy, Debug, Default)]
pub struct DamageDealt;

impl RewardEvent for DamageDealt {
    fn tag(&self) -> &'static str {
        "damage_dealt"
    }

    fn category(&self) -> RewardCategory {
        RewardCategory::Combat
    }

    fn measure(&self, state: &MatchState, player: PlayerId) -> f32 {
        let dealt: f32 = state
            .events
            .iter()
            .map(|event| event.damage_dealt(player))
            .sum();
        dealt / state.combatant(player.opponent()).max_health
    }
}

/// Damage received this tick, relative to the player's maximum health.
#[derive(Clone, Copy, Debug, Default)]
pub struct DamageTaken;

impl RewardEvent for DamageTaken {
    fn tag(&self) -> &'static str {
        "damage_taken"
    }

    fn category(&self) -> RewardCategory {
        RewardCategory::Combat
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn measure(&self, state: &MatchState, player: PlayerId) -> f32 {
        let taken: f32 = state
            .events
            .iter()
            .map(|event| event.damage_taken(player))
            .sum();
        taken / state.combatant(player).max_health
    }
}

/// Own health fraction minus the opponent's, in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HealthAdvantage;

impl RewardEvent for HealthAdvantage {
    fn tag(&self) -> &'static str {
        "health_advantage"
    }

    fn category(&self) -> RewardCategory {
        RewardCategory::Health
    }

    fn measure(&self, state: &MatchState, player: PlayerId) -> f32 {
        let fraction = |id: PlayerId| {
            let combatant = state.combatant(id);
            combatant.health / combatant.max_health
        };
        fraction(player) - fraction(player.opponent())
    }
}

/// `1` on the tick the player wins, `-1` on a loss, `0` otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchOutcome;

impl RewardEvent for MatchOutcome {
    fn tag(&self) -> &'static str {
        "match_outcome"
    }

    fn category(&self) -> RewardCategory {
        RewardCategory::Outcome
    }

    fn measure(&self, state: &MatchState, player: PlayerId) -> f32 {
        match state.winner {
            Some(Winner::Draw) | None => 0.0,
            Some(winner) if winner.player() == Some(player) => 1.0,
            Some(_) => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use fight_core::{CombatEvent, FighterProfile, MatchConfig};

    use super::*;

    fn state() -> MatchState {
        MatchState::new(
            MatchConfig::new(),
            FighterProfile::balanced(),
            FighterProfile {
                health: 50.0,
                ..FighterProfile::balanced()
            },
        )
    }

    #[test]
    fn distance_is_normalised_by_arena_width() {
        let state = state();
        let expected = state.distance().0 / 800.0;

        assert_eq!(DistanceX.measure(&state, PlayerId::One), expected);
        assert_eq!(DistanceX.measure(&state, PlayerId::Two), expected);
    }

    #[test]
    fn damage_events_are_seen_from_both_sides() {
        let mut state = state();
        state.events.push(CombatEvent::Hit {
            attacker: PlayerId::One,
            defender: PlayerId::Two,
            damage: 10.0,
            stun_frames: 8,
        });

        assert_eq!(DamageDealt.measure(&state, PlayerId::One), 0.2);
        assert_eq!(DamageTaken.measure(&state, PlayerId::Two), 0.2);
        assert_eq!(DamageDealt.measure(&state, PlayerId::Two), 0.0);
        assert_eq!(DamageTaken.measure(&state, PlayerId::One), 0.0);
    }

    #[test]
    fn health_advantage_is_antisymmetric() {
        let mut state = state();
        state.combatant_mut(PlayerId::One).health = 75.0;
        state.combatant_mut(PlayerId::Two).health = 25.0;

        assert_eq!(HealthAdvantage.measure(&state, PlayerId::One), 0.25);
        assert_eq!(HealthAdvantage.measure(&state, PlayerId::Two), -0.25);
    }

    #[test]
    fn outcome_rewards_only_a_decided_match() {
        let mut state = state();
        assert_eq!(MatchOutcome.measure(&state, PlayerId::One), 0.0);

        state.winner = Some(Winner::PlayerTwo);
        assert_eq!(MatchOutcome.measure(&state, PlayerId::One), -1.0);
        assert_eq!(MatchOutcome.measure(&state, PlayerId::Two), 1.0);

        state.winner = Some(Winner::Draw);
        assert_eq!(MatchOutcome.measure(&state, PlayerId::Two), 0.0);
    }
}
