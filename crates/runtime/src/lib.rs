//! Match orchestration around the deterministic fight core.
//!
//! This crate drives [`fight_core::MatchEngine`] instances to completion and
//! supplies the collaborators the engine only knows as traits.
//!
//! Modules are organized by responsibility:
//! - [`providers`] holds the stock decision providers
//! - [`rewards`] implements reward events and the weighted reward table
//! - [`replay`] records per-frame snapshots in memory
//! - [`runner`] runs one match; [`batch`] fans many out over tokio's blocking pool
//! - [`config`] reads runtime settings from the environment
pub mod batch;
pub mod config;
pub mod error;
pub mod providers;
pub mod replay;
pub mod rewards;
pub mod runner;

pub use batch::{BatchRunner, BatchSummary, ProviderFactory};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use providers::{FixedActionProvider, RandomProvider, ScriptedProvider};
pub use replay::{PlayerFrame, Replay, ReplayFrame, ReplayMetadata, ReplayRecorder};
pub use rewards::{
    DamageDealt, DamageTaken, DistanceX, HealthAdvantage, MatchOutcome, RewardCategory,
    RewardEvent, RewardRegistry, RewardTable,
};
pub use runner::{MatchRunner, MatchSummary};
