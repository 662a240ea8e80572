//! Narrow interfaces to the collaborators that drive and observe a match.
//!
//! The engine never blocks inside a tick: every hook is called synchronously
//! and must return immediately.

use crate::action::Action;
use crate::state::{MatchState, Observation, PlayerId, Winner};

/// Chooses an action for a combatant in an actionable state.
///
/// Only called while the combatant can accept input; the returned action may
/// still be dropped if it is on cooldown or illegal from the current state.
pub trait DecisionProvider {
    fn decide(&mut self, player: PlayerId, observation: &Observation) -> Action;
}

impl<F> DecisionProvider for F
where
    F: FnMut(PlayerId, &Observation) -> Action,
{
    fn decide(&mut self, player: PlayerId, observation: &Observation) -> Action {
        self(player, observation)
    }
}

/// A constant action is the simplest provider.
impl DecisionProvider for Action {
    fn decide(&mut self, _player: PlayerId, _observation: &Observation) -> Action {
        *self
    }
}

/// Per-player scalar feedback evaluated after every tick.
pub trait RewardHook: Send {
    fn evaluate(&mut self, state: &MatchState, player: PlayerId) -> f32;
}

/// Observer notified at match start, every tick and match end.
///
/// The engine never reads recorded output back.
pub trait RecordingHook: Send {
    fn start(&mut self, state: &MatchState);

    fn record(&mut self, state: &MatchState, frame: u64);

    fn stop(&mut self, winner: Winner);
}
