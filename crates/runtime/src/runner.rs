//! Single-match driver.
use serde::{Deserialize, Serialize};

use fight_core::{CombatEvent, DecisionProvider, MatchEngine, PlayerId, RewardHook, Winner};

use crate::replay::{Replay, ReplayRecorder};

/// Result of one completed match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: Winner,
    pub frames: u64,
    /// Final health indexed by seat.
    pub health: [f32; 2],
    /// Rewards summed over every tick.
    pub rewards: [f32; 2],
    /// Attacks that connected unblocked, trades included.
    pub hits: [u32; 2],
    /// Attacks absorbed by a block.
    pub blocks: [u32; 2],
    pub replay: Option<Replay>,
}

/// Steps one engine until the match ends.
pub struct MatchRunner {
    engine: MatchEngine,
    recorder: Option<ReplayRecorder>,
}

impl MatchRunner {
    pub fn new(engine: MatchEngine) -> Self {
        Self {
            engine,
            recorder: None,
        }
    }

    pub fn with_rewards(mut self, hook: impl RewardHook + 'static) -> Self {
        self.engine = self.engine.with_rewards(hook);
        self
    }

    /// Captures a replay into the summary.
    pub fn recording(mut self) -> Self {
        let recorder = ReplayRecorder::new();
        self.engine = self.engine.with_recorder(recorder.clone());
        self.recorder = Some(recorder);
        self
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Runs to completion. The engine's frame limit bounds the loop.
    pub fn run(
        mut self,
        p1: &mut dyn DecisionProvider,
        p2: &mut dyn DecisionProvider,
    ) -> MatchSummary {
        let mut rewards = [0.0; 2];
        let mut hits = [0; 2];
        let mut blocks = [0; 2];

        let winner = loop {
            let report = self.engine.step(&mut *p1, &mut *p2);
            for player in PlayerId::BOTH {
                rewards[player.index()] += report.reward(player);
            }
            for event in &report.events {
                tally(event, &mut hits, &mut blocks);
            }
            if let Some(winner) = report.outcome {
                break winner;
            }
        };

        let summary = MatchSummary {
            winner,
            frames: self.engine.frame(),
            health: PlayerId::BOTH.map(|player| self.engine.health(player)),
            rewards,
            hits,
            blocks,
            replay: self.recorder.as_ref().map(ReplayRecorder::snapshot),
        };

        tracing::debug!(
            target: "runtime::runner",
            %winner,
            frames = summary.frames,
            p1_health = summary.health[0],
            p2_health = summary.health[1],
            "match complete"
        );
        summary
    }
}

fn tally(event: &CombatEvent, hits: &mut [u32; 2], blocks: &mut [u32; 2]) {
    match *event {
        CombatEvent::Hit { attacker, .. } => hits[attacker.index()] += 1,
        CombatEvent::Blocked { defender, .. } => blocks[defender.index()] += 1,
        CombatEvent::Trade { .. } => {
            hits[0] += 1;
            hits[1] += 1;
        }
    }
}
