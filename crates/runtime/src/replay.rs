//! In-memory replay recording.
//!
//! [`ReplayRecorder`] is a cloneable handle: give one clone to the engine as
//! its recording hook and keep another to read the replay once the match is
//! over. Persisting replays is left to the host; [`Replay::to_json`] produces
//! the serialized form.
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fight_core::{Combatant, CombatState, Facing, MatchState, RecordingHook, Winner};

pub const REPLAY_FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayMetadata {
    pub version: u32,
    pub arena_width: f32,
    pub arena_height: f32,
    pub ground_level: f32,
    pub max_frames: u64,
    /// Fighter names indexed by seat.
    pub fighters: [String; 2],
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub total_frames: usize,
    pub winner: Option<Winner>,
}

/// One combatant's dynamic state at the end of a tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerFrame {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub health: f32,
    pub facing: Facing,
    pub state: CombatState,
    pub frames_in_state: u32,
    pub grounded: bool,
    pub attack_cooldown_remaining: u32,
    pub block_cooldown_remaining: u32,
    pub jump_cooldown_remaining: u32,
    pub stun_frames_remaining: u32,
}

impl From<&Combatant> for PlayerFrame {
    fn from(combatant: &Combatant) -> Self {
        Self {
            x: combatant.x,
            y: combatant.y,
            vx: combatant.vx,
            vy: combatant.vy,
            health: combatant.health,
            facing: combatant.facing,
            state: combatant.current_state,
            frames_in_state: combatant.frames_in_state,
            grounded: combatant.is_grounded(),
            attack_cooldown_remaining: combatant.attack_cooldown_remaining,
            block_cooldown_remaining: combatant.block_cooldown_remaining,
            jump_cooldown_remaining: combatant.jump_cooldown_remaining,
            stun_frames_remaining: combatant.stun_frames_remaining,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    pub frame: u64,
    pub players: [PlayerFrame; 2],
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub metadata: ReplayMetadata,
    pub frames: Vec<ReplayFrame>,
}

impl Replay {
    /// Whether the recorder has seen the end of the match.
    pub fn is_complete(&self) -> bool {
        self.metadata.ended_at.is_some()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Shared-buffer recording hook.
#[derive(Clone, Debug, Default)]
pub struct ReplayRecorder {
    replay: Arc<Mutex<Replay>>,
}

impl ReplayRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn snapshot(&self) -> Replay {
        self.lock().clone()
    }

    pub fn frame_count(&self) -> usize {
        self.lock().frames.len()
    }

    fn lock(&self) -> MutexGuard<'_, Replay> {
        self.replay.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordingHook for ReplayRecorder {
    fn start(&mut self, state: &MatchState) {
        let [p1, p2] = &state.combatants;
        let mut replay = self.lock();
        replay.frames.clear();
        replay.metadata = ReplayMetadata {
            version: REPLAY_FORMAT_VERSION,
            arena_width: state.config.arena_width,
            arena_height: state.config.arena_height,
            ground_level: state.config.ground_level,
            max_frames: state.config.max_frames,
            fighters: [p1.profile.name.clone(), p2.profile.name.clone()],
            started_at: Some(Utc::now()),
            ..ReplayMetadata::default()
        };
    }

    fn record(&mut self, state: &MatchState, frame: u64) {
        let [p1, p2] = &state.combatants;
        self.lock().frames.push(ReplayFrame {
            frame,
            players: [PlayerFrame::from(p1), PlayerFrame::from(p2)],
        });
    }

    fn stop(&mut self, winner: Winner) {
        let mut replay = self.lock();
        let total_frames = replay.frames.len();
        replay.metadata.ended_at = Some(Utc::now());
        replay.metadata.total_frames = total_frames;
        replay.metadata.winner = Some(winner);
        tracing::debug!(
            target: "runtime::replay",
            frames = replay.metadata.total_frames,
            %winner,
            "replay closed"
        );
    }
}
