//! Parallel batches of independent matches.
//!
//! Each match owns its engine and providers and runs on tokio's blocking
//! pool. Match `i` is seeded with `base_seed + i`, so a batch is
//! reproducible regardless of scheduling.
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use fight_core::{
    DecisionProvider, EngineError, FighterProfile, MatchConfig, MatchEngine, PlayerId,
};

use crate::error::{Result, RuntimeError};
use crate::providers::RandomProvider;
use crate::rewards::{RewardRegistry, RewardTable};
use crate::runner::{MatchRunner, MatchSummary};

/// Builds the provider for one seat of one match from the match seed.
pub type ProviderFactory =
    Arc<dyn Fn(PlayerId, u64) -> Box<dyn DecisionProvider + Send> + Send + Sync>;

/// Aggregate over a batch, matches in seed order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub matches: Vec<MatchSummary>,
    /// Wins indexed by seat.
    pub wins: [usize; 2],
    pub draws: usize,
    pub mean_frames: f64,
}

impl BatchSummary {
    pub fn from_matches(matches: Vec<MatchSummary>) -> Self {
        let mut wins = [0; 2];
        let mut draws = 0;
        for summary in &matches {
            match summary.winner.player() {
                Some(player) => wins[player.index()] += 1,
                None => draws += 1,
            }
        }

        let mean_frames = if matches.is_empty() {
            0.0
        } else {
            matches.iter().map(|m| m.frames as f64).sum::<f64>() / matches.len() as f64
        };

        Self {
            matches,
            wins,
            draws,
            mean_frames,
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.matches.is_empty() {
            return 0.0;
        }
        self.wins[player.index()] as f64 / self.matches.len() as f64
    }
}

/// Runs the same pairing many times with different seeds.
#[derive(Clone)]
pub struct BatchRunner {
    config: MatchConfig,
    fighters: [FighterProfile; 2],
    registry: RewardRegistry,
    reward_weights: Vec<(String, f32)>,
    providers: ProviderFactory,
    record: bool,
}

impl BatchRunner {
    /// Both seats default to seeded random play.
    pub fn new(config: MatchConfig, p1: FighterProfile, p2: FighterProfile) -> Self {
        Self {
            config,
            fighters: [p1, p2],
            registry: RewardRegistry::builtin(),
            reward_weights: Vec::new(),
            providers: Arc::new(random_play),
            record: false,
        }
    }

    pub fn with_reward_registry(mut self, registry: RewardRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Reward table built per match from `(tag, weight)` pairs.
    pub fn with_rewards<S>(mut self, weights: impl IntoIterator<Item = (S, f32)>) -> Self
    where
        S: Into<String>,
    {
        self.reward_weights = weights
            .into_iter()
            .map(|(tag, weight)| (tag.into(), weight))
            .collect();
        self
    }

    pub fn with_providers<F>(mut self, factory: F) -> Self
    where
        F: Fn(PlayerId, u64) -> Box<dyn DecisionProvider + Send> + Send + Sync + 'static,
    {
        self.providers = Arc::new(factory);
        self
    }

    pub fn recording(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    /// Checks fighters and reward tags before any match starts.
    pub fn validate(&self) -> Result<()> {
        for fighter in &self.fighters {
            fighter.validate().map_err(EngineError::from)?;
        }
        self.reward_table()?;
        Ok(())
    }

    /// Runs one match synchronously.
    pub fn run_one(&self, seed: u64) -> Result<MatchSummary> {
        let [p1, p2] = self.fighters.clone();
        let engine = MatchEngine::new(self.config.clone(), p1, p2)?;

        let mut runner = MatchRunner::new(engine);
        if !self.reward_weights.is_empty() {
            runner = runner.with_rewards(self.reward_table()?);
        }
        if self.record {
            runner = runner.recording();
        }

        let mut p1 = (self.providers)(PlayerId::One, seed);
        let mut p2 = (self.providers)(PlayerId::Two, seed);
        Ok(runner.run(p1.as_mut(), p2.as_mut()))
    }

    /// Runs `matches` matches in parallel.
    pub async fn run(&self, matches: usize, base_seed: u64) -> Result<BatchSummary> {
        self.validate()?;

        tracing::info!(
            target: "runtime::batch",
            matches,
            base_seed,
            p1 = %self.fighters[0].name,
            p2 = %self.fighters[1].name,
            "batch started"
        );

        let mut tasks = JoinSet::new();
        for index in 0..matches {
            let runner = self.clone();
            let seed = base_seed.wrapping_add(index as u64);
            tasks.spawn_blocking(move || runner.run_one(seed).map(|summary| (index, summary)));
        }

        let mut results = Vec::with_capacity(matches);
        while let Some(joined) = tasks.join_next().await {
            let (index, summary) = joined.map_err(RuntimeError::MatchJoin)??;
            tracing::trace!(target: "runtime::batch", index, winner = %summary.winner, "match joined");
            results.push((index, summary));
        }
        results.sort_by_key(|(index, _)| *index);

        let summary =
            BatchSummary::from_matches(results.into_iter().map(|(_, summary)| summary).collect());
        tracing::info!(
            target: "runtime::batch",
            p1_wins = summary.wins[0],
            p2_wins = summary.wins[1],
            draws = summary.draws,
            mean_frames = summary.mean_frames,
            "batch finished"
        );
        Ok(summary)
    }

    fn reward_table(&self) -> Result<RewardTable> {
        RewardTable::from_weights(
            &self.registry,
            self.reward_weights
                .iter()
                .map(|(tag, weight)| (tag.as_str(), *weight)),
        )
    }
}

fn random_play(player: PlayerId, seed: u64) -> Box<dyn DecisionProvider + Send> {
    Box::new(RandomProvider::for_player(seed, player))
}

#[cfg(test)]
mod tests {
    use fight_core::Winner;

    use super::*;

    fn summary(winner: Winner, frames: u64) -> MatchSummary {
        MatchSummary {
            winner,
            frames,
            health: [0.0; 2],
            rewards: [0.0; 2],
            hits: [0; 2],
            blocks: [0; 2],
            replay: None,
        }
    }

    #[test]
    fn summary_tallies_outcomes() {
        let batch = BatchSummary::from_matches(vec![
            summary(Winner::PlayerOne, 100),
            summary(Winner::PlayerOne, 200),
            summary(Winner::Draw, 300),
            summary(Winner::PlayerTwo, 400),
        ]);

        assert_eq!(batch.wins, [2, 1]);
        assert_eq!(batch.draws, 1);
        assert_eq!(batch.mean_frames, 250.0);
        assert_eq!(batch.win_rate(PlayerId::One), 0.5);
        assert_eq!(BatchSummary::default().win_rate(PlayerId::Two), 0.0);
    }

    #[test]
    fn run_one_is_deterministic_per_seed() {
        let runner = BatchRunner::new(
            MatchConfig::new().with_max_frames(300),
            FighterProfile::balanced(),
            FighterProfile::balanced(),
        )
        .with_rewards([("health_advantage", 1.0)]);

        assert_eq!(runner.run_one(11).unwrap(), runner.run_one(11).unwrap());
    }

    #[test]
    fn unknown_reward_fails_validation() {
        let runner = BatchRunner::new(
            MatchConfig::new(),
            FighterProfile::balanced(),
            FighterProfile::balanced(),
        )
        .with_rewards([("flair", 1.0)]);

        assert!(matches!(
            runner.validate(),
            Err(RuntimeError::UnknownReward { .. })
        ));
    }
}
