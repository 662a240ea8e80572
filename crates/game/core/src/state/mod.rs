//! Authoritative match state representation.
//!
//! This module owns the data structures that describe both combatants and
//! the match clock. Runtime layers clone or query this state but mutate it
//! exclusively through the engine.
mod combat_state;
mod combatant;
mod common;
mod match_state;
mod observation;

pub use combat_state::CombatState;
pub use combatant::{CombatFlags, Combatant};
pub use common::{Facing, InvalidPlayerId, PlayerId, Winner};
pub use match_state::MatchState;
pub use observation::{OBSERVATION_LEN, Observation};
