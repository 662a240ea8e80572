//! Frame scheduling.
//!
//! The [`MatchEngine`] owns the [`MatchState`] and is the only component that
//! mutates it. One call to [`MatchEngine::step`] runs a complete tick:
//! decide → apply actions → physics → combat → advance counters and
//! automatic transitions → termination → hooks.

mod errors;
mod hook;
mod tick;

pub use errors::EngineError;
pub use hook::{DecisionProvider, RecordingHook, RewardHook};

use core::convert::Infallible;

use crate::combat::CombatEvent;
use crate::config::MatchConfig;
use crate::fighter::FighterProfile;
use crate::state::{CombatState, MatchState, Observation, PlayerId, Winner};

impl From<Infallible> for EngineError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Summary of one tick handed back to the driver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// Frame counter after the tick.
    pub frame: u64,
    /// Reward per player, indexed by [`PlayerId::index`]. Zero without a reward hook.
    pub rewards: [f32; 2],
    pub events: Vec<CombatEvent>,
    /// Set once the match has ended.
    pub outcome: Option<Winner>,
}

impl StepReport {
    pub fn reward(&self, player: PlayerId) -> f32 {
        self.rewards[player.index()]
    }

    pub fn is_final(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Authoritative reducer for a single match.
///
/// Engines share nothing, so independent matches can run on separate threads.
pub struct MatchEngine {
    state: MatchState,
    rewards: Option<Box<dyn RewardHook>>,
    recorder: Option<Box<dyn RecordingHook>>,
    recording: bool,
}

impl MatchEngine {
    /// Creates an engine for a fresh match after validating both profiles.
    pub fn new(
        config: MatchConfig,
        p1: FighterProfile,
        p2: FighterProfile,
    ) -> Result<Self, EngineError> {
        p1.validate()?;
        p2.validate()?;
        Ok(Self::from_state(MatchState::new(config, p1, p2)))
    }

    /// Resumes from an existing snapshot.
    pub fn from_state(state: MatchState) -> Self {
        Self {
            state,
            rewards: None,
            recorder: None,
            recording: false,
        }
    }

    pub fn with_rewards(mut self, hook: impl RewardHook + 'static) -> Self {
        self.rewards = Some(Box::new(hook));
        self
    }

    pub fn with_recorder(mut self, hook: impl RecordingHook + 'static) -> Self {
        self.recorder = Some(Box::new(hook));
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn into_state(self) -> MatchState {
        self.state
    }

    /// Runs one tick.
    ///
    /// Stepping a finished match is a no-op that repeats the outcome.
    pub fn step(
        &mut self,
        p1: &mut dyn DecisionProvider,
        p2: &mut dyn DecisionProvider,
    ) -> StepReport {
        if self.state.finished {
            return StepReport {
                frame: self.state.frame,
                rewards: [0.0; 2],
                events: Vec::new(),
                outcome: self.state.winner,
            };
        }

        if !self.recording {
            if let Some(recorder) = self.recorder.as_mut() {
                recorder.start(&self.state);
            }
            self.recording = true;
        }

        let span = tracing::trace_span!(target: "core::engine", "tick", frame = self.state.frame);
        let _guard = span.enter();

        self.state.events.clear();
        tick::gather_actions(&mut self.state, p1, p2);
        tick::apply_actions(&mut self.state);
        tick::integrate_physics(&mut self.state);
        tick::resolve_combat(&mut self.state);
        tick::advance_frame(&mut self.state);
        let outcome = tick::evaluate_termination(&mut self.state);

        let rewards = match self.rewards.as_mut() {
            Some(hook) => PlayerId::BOTH.map(|player| hook.evaluate(&self.state, player)),
            None => [0.0; 2],
        };

        if let Some(recorder) = self.recorder.as_mut() {
            recorder.record(&self.state, self.state.frame);
            if let Some(winner) = outcome {
                recorder.stop(winner);
            }
        }

        if let Some(winner) = outcome {
            tracing::debug!(
                target: "core::engine",
                frame = self.state.frame,
                %winner,
                p1_health = self.state.combatants[0].health,
                p2_health = self.state.combatants[1].health,
                "match finished"
            );
        }

        StepReport {
            frame: self.state.frame,
            rewards,
            events: self.state.events.clone(),
            outcome,
        }
    }

    /// Restarts the match with the same fighters.
    pub fn reset(&mut self) {
        self.state.reset();
        self.recording = false;
    }

    /// Replaces one seat's fighter and respawns it.
    ///
    /// Accepts a [`PlayerId`] or a raw `u8`; raw ids outside `1..=2` are
    /// rejected.
    pub fn set_combatant<P>(&mut self, player: P, profile: FighterProfile) -> Result<(), EngineError>
    where
        P: TryInto<PlayerId>,
        EngineError: From<P::Error>,
    {
        let player = player.try_into()?;
        profile.validate()?;
        self.state.set_combatant(player, profile);
        Ok(())
    }

    // ===== read-only accessors =====

    pub fn frame(&self) -> u64 {
        self.state.frame
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    pub fn winner(&self) -> Option<Winner> {
        self.state.winner
    }

    pub fn health(&self, player: PlayerId) -> f32 {
        self.state.combatant(player).health
    }

    pub fn position(&self, player: PlayerId) -> (f32, f32) {
        let combatant = self.state.combatant(player);
        (combatant.x, combatant.y)
    }

    pub fn current_state(&self, player: PlayerId) -> CombatState {
        self.state.combatant(player).current_state
    }

    pub fn observation(&self, player: PlayerId) -> Observation {
        self.state.observation(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    fn engine() -> MatchEngine {
        MatchEngine::new(
            MatchConfig::new(),
            FighterProfile::balanced(),
            FighterProfile::balanced(),
        )
        .unwrap()
    }

    #[test]
    fn first_attack_tick_enters_startup() {
        let mut engine = engine();

        let report = engine.step(&mut Action::Attack, &mut Action::Idle);

        assert_eq!(report.frame, 1);
        assert_eq!(engine.current_state(PlayerId::One), CombatState::AttackStartup);
        assert_eq!(engine.state().combatant(PlayerId::One).frames_in_state, 1);
        assert_eq!(engine.current_state(PlayerId::Two), CombatState::Idle);
    }

    #[test]
    fn set_combatant_rejects_bad_ids() {
        let mut engine = engine();

        let err = engine
            .set_combatant(3u8, FighterProfile::balanced())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidPlayer(_)));
        assert!(engine.set_combatant(0u8, FighterProfile::balanced()).is_err());
        assert!(engine.set_combatant(2u8, FighterProfile::balanced()).is_ok());
        assert!(
            engine
                .set_combatant(PlayerId::One, FighterProfile::balanced())
                .is_ok()
        );
    }

    #[test]
    fn finished_match_ignores_further_steps() {
        let mut engine = MatchEngine::new(
            MatchConfig::new().with_max_frames(2),
            FighterProfile::balanced(),
            FighterProfile::balanced(),
        )
        .unwrap();

        engine.step(&mut Action::Idle, &mut Action::Idle);
        let last = engine.step(&mut Action::Idle, &mut Action::Idle);
        assert_eq!(last.outcome, Some(Winner::Draw));

        let after = engine.step(&mut Action::Right, &mut Action::Left);
        assert_eq!(after.frame, 2);
        assert_eq!(after.outcome, Some(Winner::Draw));
        assert_eq!(engine.current_state(PlayerId::One), CombatState::Idle);
    }
}
