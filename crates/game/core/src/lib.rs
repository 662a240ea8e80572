//! Deterministic fighting-match simulation shared by training, replay and tooling.
//!
//! `fight-core` defines the canonical rules (frame data, combat states, physics,
//! hit resolution) and exposes a single stepping API. All state mutation flows
//! through [`engine::MatchEngine`]; supporting crates depend on the types
//! re-exported here.
//!
//! Identical inputs always produce bit-identical [`MatchState`] trajectories:
//! player one is evaluated before player two in every phase, and simultaneous
//! hits are resolved symmetrically so evaluation order never decides a match.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod fighter;
pub mod frame;
pub mod machine;
pub mod physics;
pub mod state;

pub use action::Action;
pub use combat::{CombatEvent, Hitbox};
pub use config::MatchConfig;
pub use engine::{
    DecisionProvider, EngineError, MatchEngine, RecordingHook, RewardHook, StepReport,
};
pub use error::{ErrorSeverity, GameError};
pub use fighter::{Armour, FighterProfile, ProfileError, Weapon};
pub use frame::{ActionAttributes, ActionFrameData, FrameDataTable, FrameWindow, Phase};
pub use machine::{EffectSet, MachineEvent, StateEffect, Transition};
pub use state::{
    CombatFlags, CombatState, Combatant, Facing, InvalidPlayerId, MatchState, Observation,
    PlayerId, Winner,
};
