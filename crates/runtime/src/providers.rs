//! Stock decision providers.
//!
//! Any `FnMut(PlayerId, &Observation) -> Action` already works as a provider;
//! these cover the common fixed, scripted and random policies.
use std::collections::VecDeque;

use fight_core::{Action, DecisionProvider, Observation, PlayerId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Returns the same action on every decision.
#[derive(Clone, Copy, Debug)]
pub struct FixedActionProvider(pub Action);

impl DecisionProvider for FixedActionProvider {
    fn decide(&mut self, _player: PlayerId, _observation: &Observation) -> Action {
        self.0
    }
}

/// Plays a fixed list of actions, one per decision, then idles.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    script: VecDeque<Action>,
}

impl ScriptedProvider {
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DecisionProvider for ScriptedProvider {
    fn decide(&mut self, _player: PlayerId, _observation: &Observation) -> Action {
        self.script.pop_front().unwrap_or(Action::Idle)
    }
}

/// Uniform random policy over every action.
///
/// Seeded so a batch can be replayed exactly.
#[derive(Clone, Debug)]
pub struct RandomProvider {
    rng: ChaCha8Rng,
}

impl RandomProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Both seats share a seed but draw from separate streams.
    pub fn for_player(seed: u64, player: PlayerId) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(player.index() as u64);
        Self { rng }
    }
}

impl DecisionProvider for RandomProvider {
    fn decide(&mut self, _player: PlayerId, _observation: &Observation) -> Action {
        Action::ALL[self.rng.gen_range(0..Action::COUNT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> Observation {
        Observation::default()
    }

    #[test]
    fn script_runs_out_into_idle() {
        let mut provider = ScriptedProvider::new([Action::Jump, Action::Attack]);

        assert_eq!(provider.decide(PlayerId::One, &blank()), Action::Jump);
        assert_eq!(provider.decide(PlayerId::One, &blank()), Action::Attack);
        assert_eq!(provider.remaining(), 0);
        assert_eq!(provider.decide(PlayerId::One, &blank()), Action::Idle);
    }

    #[test]
    fn random_provider_is_reproducible() {
        let draw = |mut provider: RandomProvider| -> Vec<Action> {
            (0..64)
                .map(|_| provider.decide(PlayerId::One, &blank()))
                .collect()
        };

        assert_eq!(draw(RandomProvider::new(7)), draw(RandomProvider::new(7)));
        assert_ne!(
            draw(RandomProvider::for_player(7, PlayerId::One)),
            draw(RandomProvider::for_player(7, PlayerId::Two))
        );
    }
}
