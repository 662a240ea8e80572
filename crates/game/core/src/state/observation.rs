use crate::config::MatchConfig;

use super::{Combatant, MatchState, PlayerId};

pub const OBSERVATION_LEN: usize = 20;

/// Features describing one combatant.
const SELF_FEATURES: usize = 9;

/// Normalised feature vector seen by a decision provider.
///
/// Layout: nine features for the observing combatant, the same nine for the
/// opponent, then absolute horizontal and vertical distance.
/// Per combatant: x, y, health, vx, vy, jumping, blocking, attacking and
/// attack cooldown progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation(pub [f32; OBSERVATION_LEN]);

impl Observation {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn own(&self) -> &[f32] {
        &self.0[..SELF_FEATURES]
    }

    pub fn opponent(&self) -> &[f32] {
        &self.0[SELF_FEATURES..SELF_FEATURES * 2]
    }

    pub fn distance_x(&self) -> f32 {
        self.0[SELF_FEATURES * 2]
    }

    pub fn distance_y(&self) -> f32 {
        self.0[SELF_FEATURES * 2 + 1]
    }
}

impl MatchState {
    /// Builds the observation for `player`.
    pub fn observation(&self, player: PlayerId) -> Observation {
        let own = self.combatant(player);
        let other = self.combatant(player.opponent());
        let config = &self.config;

        let mut features = [0.0; OBSERVATION_LEN];
        features[..SELF_FEATURES].copy_from_slice(&describe(own, config));
        features[SELF_FEATURES..SELF_FEATURES * 2].copy_from_slice(&describe(other, config));
        features[SELF_FEATURES * 2] = ratio((own.x - other.x).abs(), config.arena_width);
        features[SELF_FEATURES * 2 + 1] = ratio((own.y - other.y).abs(), config.arena_height);

        Observation(features)
    }
}

fn describe(c: &Combatant, config: &MatchConfig) -> [f32; SELF_FEATURES] {
    [
        ratio(c.x, config.arena_width),
        ratio(c.y, config.arena_height),
        ratio(c.health, c.max_health),
        ratio(c.vx, config.max_x_velocity),
        ratio(c.vy, config.max_y_velocity),
        flag(c.current_state.is_jumping()),
        flag(c.current_state.is_blocking()),
        flag(c.current_state.is_attacking()),
        ratio(
            c.attack_cooldown_remaining as f32,
            c.profile.attack_cooldown as f32,
        ),
    ]
}

fn ratio(value: f32, scale: f32) -> f32 {
    if scale == 0.0 { 0.0 } else { value / scale }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}
