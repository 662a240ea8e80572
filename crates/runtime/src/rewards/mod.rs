//! Reward shaping for learning agents.
//!
//! A [`RewardEvent`] measures one aspect of the match from a player's point
//! of view. A [`RewardTable`] combines weighted events and plugs into the
//! engine as its [`fight_core::RewardHook`].
mod events;
mod table;

pub use events::{DamageDealt, DamageTaken, DistanceX, HealthAdvantage, MatchOutcome};
pub use table::{RewardConstructor, RewardRegistry, RewardTable};

use fight_core::{MatchState, PlayerId};

/// Coarse grouping used for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RewardCategory {
    Distance,
    Health,
    Combat,
    Outcome,
}

/// One measurable signal, evaluated after every tick.
pub trait RewardEvent: Send {
    /// Registry tag, e.g. `"distance_x"`.
    fn tag(&self) -> &'static str;

    fn category(&self) -> RewardCategory;

    /// Whether larger measurements are desirable. Weights carry the sign;
    /// this is informational.
    fn higher_is_better(&self) -> bool {
        true
    }

    fn measure(&self, state: &MatchState, player: PlayerId) -> f32;
}
