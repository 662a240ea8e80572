//! The sub-phases of one tick, in execution order.
//!
//! Every phase visits player one before player two.

use core::cmp::Ordering;

use crate::combat;
use crate::machine::{self, MachineEvent};
use crate::physics;
use crate::state::{MatchState, PlayerId, Winner};

use super::hook::DecisionProvider;

/// Asks each actionable combatant's provider for an action.
pub(super) fn gather_actions(
    state: &mut MatchState,
    p1: &mut dyn DecisionProvider,
    p2: &mut dyn DecisionProvider,
) {
    request_action(state, PlayerId::One, p1);
    request_action(state, PlayerId::Two, p2);
}

fn request_action(state: &mut MatchState, player: PlayerId, provider: &mut dyn DecisionProvider) {
    if !state.combatant(player).current_state.is_actionable() {
        return;
    }
    let observation = state.observation(player);
    let action = provider.decide(player, &observation);
    state.combatant_mut(player).pending_action = Some(action);
}

/// Enters the startup state for every accepted pending action.
pub(super) fn apply_actions(state: &mut MatchState) {
    let frame = state.frame;
    for combatant in &mut state.combatants {
        let Some(action) = combatant.pending_action.take() else {
            continue;
        };

        if combatant.is_on_cooldown(action) {
            tracing::trace!(
                target: "core::engine",
                player = %combatant.id,
                %action,
                remaining = combatant.cooldown_remaining(action),
                "action dropped: cooldown"
            );
            continue;
        }

        let event = MachineEvent::Input(action);
        match machine::resolve(combatant, combatant.current_state, event) {
            Some(transition) => combatant.begin_action(transition, frame),
            None => tracing::trace!(
                target: "core::engine",
                player = %combatant.id,
                %action,
                state = %combatant.current_state,
                "action dropped: not accepted"
            ),
        }
    }
}

pub(super) fn integrate_physics(state: &mut MatchState) {
    for combatant in &mut state.combatants {
        physics::integrate(combatant, &state.config);
    }
}

pub(super) fn resolve_combat(state: &mut MatchState) {
    let [p1, p2] = &mut state.combatants;
    if let Some(event) = combat::resolve_combat(p1, p2) {
        state.events.push(event);
    }
}

/// Advances the clock, counters and automatic transitions.
pub(super) fn advance_frame(state: &mut MatchState) {
    state.frame += 1;

    for combatant in &mut state.combatants {
        combatant.tick_cooldowns();
        combatant.tick_stun();
    }

    for combatant in &mut state.combatants {
        let Some(event) = machine::should_auto_transition(combatant) else {
            continue;
        };
        if let Some(transition) = machine::resolve(combatant, combatant.current_state, event) {
            combatant.enter(transition);
        }
    }

    for combatant in &mut state.combatants {
        combatant.end_tick();
    }
}

/// Marks the match finished on knockout or timeout.
pub(super) fn evaluate_termination(state: &mut MatchState) -> Option<Winner> {
    let winner = knockout(state).or_else(|| {
        (state.frame >= state.config.max_frames).then(|| timeout_winner(state))
    })?;

    state.finished = true;
    state.winner = Some(winner);
    Some(winner)
}

fn knockout(state: &MatchState) -> Option<Winner> {
    let [p1, p2] = &state.combatants;
    match (p1.is_alive(), p2.is_alive()) {
        (true, true) => None,
        (true, false) => Some(Winner::PlayerOne),
        (false, true) => Some(Winner::PlayerTwo),
        (false, false) => Some(Winner::Draw),
    }
}

/// Higher health wins; equal health goes to whoever stands closer to centre.
fn timeout_winner(state: &MatchState) -> Winner {
    let [p1, p2] = &state.combatants;
    let by_health = p1.health.partial_cmp(&p2.health).unwrap_or(Ordering::Equal);

    let ordering = match by_health {
        Ordering::Equal => {
            let center = state.config.center_x();
            let p1_distance = (p1.x - center).abs();
            let p2_distance = (p2.x - center).abs();
            p2_distance
                .partial_cmp(&p1_distance)
                .unwrap_or(Ordering::Equal)
        }
        decided => decided,
    };

    match ordering {
        Ordering::Greater => Winner::PlayerOne,
        Ordering::Less => Winner::PlayerTwo,
        Ordering::Equal => Winner::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::fighter::FighterProfile;

    fn state() -> MatchState {
        MatchState::new(
            MatchConfig::new().with_max_frames(10),
            FighterProfile::balanced(),
            FighterProfile::balanced(),
        )
    }

    #[test]
    fn knockout_beats_timeout() {
        let mut state = state();
        state.frame = 10;
        state.combatants[0].health = 0.0;
        state.combatants[1].health = 5.0;

        assert_eq!(evaluate_termination(&mut state), Some(Winner::PlayerTwo));
        assert!(state.finished);
    }

    #[test]
    fn double_knockout_is_a_draw() {
        let mut state = state();
        state.combatants[0].health = 0.0;
        state.combatants[1].health = 0.0;

        assert_eq!(evaluate_termination(&mut state), Some(Winner::Draw));
    }

    #[test]
    fn timeout_prefers_health_then_center() {
        let mut state = state();
        state.frame = 9;
        assert_eq!(evaluate_termination(&mut state), None);

        state.frame = 10;
        state.combatants[0].health = 40.0;
        state.combatants[1].health = 60.0;
        assert_eq!(timeout_winner(&state), Winner::PlayerTwo);

        state.combatants[0].health = 60.0;
        state.combatants[0].x = 390.0;
        state.combatants[1].x = 420.0;
        assert_eq!(timeout_winner(&state), Winner::PlayerOne);

        state.combatants[1].x = 410.0;
        state.combatants[1].health = 60.0;
        assert_eq!(timeout_winner(&state), Winner::Draw);
    }

    #[test]
    fn cooled_down_action_is_dropped() {
        let mut state = state();
        state.combatants[0].attack_cooldown_remaining = 3;
        state.combatants[0].pending_action = Some(crate::Action::Attack);

        apply_actions(&mut state);

        assert_eq!(state.combatants[0].current_state, crate::CombatState::Idle);
        assert_eq!(state.combatants[0].pending_action, None);
    }
}
