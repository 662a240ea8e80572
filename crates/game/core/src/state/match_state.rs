use crate::combat::CombatEvent;
use crate::config::MatchConfig;
use crate::fighter::FighterProfile;

use super::{Combatant, PlayerId, Winner};

/// Canonical snapshot of a match.
///
/// Runtime layers clone or query this state but mutate it exclusively
/// through [`crate::MatchEngine`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub config: MatchConfig,
    /// Number of completed ticks.
    pub frame: u64,
    /// Indexed by [`PlayerId::index`].
    pub combatants: [Combatant; 2],
    pub finished: bool,
    pub winner: Option<Winner>,
    /// Combat events produced during the most recent tick.
    pub events: Vec<CombatEvent>,
}

impl MatchState {
    pub fn new(config: MatchConfig, p1: FighterProfile, p2: FighterProfile) -> Self {
        let combatants = [
            Combatant::new(PlayerId::One, p1, &config),
            Combatant::new(PlayerId::Two, p2, &config),
        ];
        Self {
            config,
            frame: 0,
            combatants,
            finished: false,
            winner: None,
            events: Vec::new(),
        }
    }

    pub fn combatant(&self, player: PlayerId) -> &Combatant {
        &self.combatants[player.index()]
    }

    pub fn combatant_mut(&mut self, player: PlayerId) -> &mut Combatant {
        &mut self.combatants[player.index()]
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Absolute horizontal and vertical distance between the combatants.
    pub fn distance(&self) -> (f32, f32) {
        let [a, b] = &self.combatants;
        ((a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Returns the match to frame zero with both combatants respawned.
    ///
    /// Fighter profiles persist.
    pub fn reset(&mut self) {
        for combatant in &mut self.combatants {
            combatant.respawn(&self.config);
        }
        self.frame = 0;
        self.finished = false;
        self.winner = None;
        self.events.clear();
    }

    /// Replaces one fighter's profile and respawns it.
    pub fn set_combatant(&mut self, player: PlayerId, profile: FighterProfile) {
        let config = &self.config;
        self.combatants[player.index()] = Combatant::new(player, profile, config);
    }

    /// SHA-256 over the canonical bincode encoding.
    ///
    /// Two states with equal digests are bit-identical.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        Ok(Sha256::digest(&bytes).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CombatState;

    fn state() -> MatchState {
        MatchState::new(
            MatchConfig::new(),
            FighterProfile::balanced(),
            FighterProfile::balanced(),
        )
    }

    #[test]
    fn reset_restores_initial_snapshot() {
        let fresh = state();
        let mut dirty = fresh.clone();
        dirty.frame = 99;
        dirty.finished = true;
        dirty.winner = Some(Winner::PlayerTwo);
        dirty.combatants[0].health = 3.0;
        dirty.combatants[1].current_state = CombatState::Stunned;

        dirty.reset();

        assert_eq!(dirty, fresh);
    }

    #[test]
    fn set_combatant_replaces_profile() {
        let mut state = state();
        let heavy = FighterProfile {
            health: 150.0,
            ..FighterProfile::balanced()
        };

        state.set_combatant(PlayerId::Two, heavy);

        assert_eq!(state.combatant(PlayerId::Two).max_health, 150.0);
        assert_eq!(state.combatant(PlayerId::One).max_health, 100.0);
        assert_eq!(state.distance().0, 400.0);
    }
}
