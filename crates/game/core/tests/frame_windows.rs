use std::collections::VecDeque;

use fight_core::{
    Action, CombatState, FighterProfile, FrameDataTable, FrameWindow, MatchConfig, MatchEngine,
    Observation, PlayerId,
};

/// Issues queued actions on successive decisions, then idles.
fn queue<const N: usize>(actions: [Action; N]) -> impl FnMut(PlayerId, &Observation) -> Action {
    let mut pending: VecDeque<Action> = actions.into_iter().collect();
    move |_, _| pending.pop_front().unwrap_or(Action::Idle)
}

fn engine(profile: FighterProfile) -> MatchEngine {
    MatchEngine::new(MatchConfig::new(), profile, FighterProfile::balanced()).unwrap()
}

/// Steps until player one is idle again and run-length encodes its states.
fn trace_action(engine: &mut MatchEngine, action: Action) -> Vec<(CombatState, u32)> {
    let mut provider = queue([action]);
    let mut runs: Vec<(CombatState, u32)> = Vec::new();

    for _ in 0..200 {
        engine.step(&mut provider, &mut Action::Idle);
        let state = engine.current_state(PlayerId::One);
        match runs.last_mut() {
            Some((last, count)) if *last == state => *count += 1,
            _ => runs.push((state, 1)),
        }
        if state == CombatState::Idle {
            break;
        }
    }
    runs
}

#[test]
fn attack_occupies_each_phase_for_its_window() {
    let mut engine = engine(FighterProfile::balanced());

    let runs = trace_action(&mut engine, Action::Attack);

    assert_eq!(
        runs,
        vec![
            (CombatState::AttackStartup, 3),
            (CombatState::AttackActive, 2),
            (CombatState::AttackRecovery, 7),
            (CombatState::Idle, 1),
        ]
    );
    assert_eq!(
        engine.state().combatant(PlayerId::One).attack_cooldown_remaining,
        20
    );
}

#[test]
fn block_occupies_each_phase_for_its_window() {
    let mut engine = engine(FighterProfile::balanced());

    let runs = trace_action(&mut engine, Action::Block);

    assert_eq!(
        runs,
        vec![
            (CombatState::BlockStartup, 2),
            (CombatState::BlockActive, 10),
            (CombatState::BlockRecovery, 3),
            (CombatState::Idle, 1),
        ]
    );
}

#[test]
fn movement_skips_zero_length_phases() {
    let mut engine = engine(FighterProfile::balanced());
    let start_x = engine.position(PlayerId::One).0;

    let runs = trace_action(&mut engine, Action::Right);

    assert_eq!(
        runs,
        vec![(CombatState::RightActive, 1), (CombatState::Idle, 1)]
    );
    assert!(engine.position(PlayerId::One).0 > start_x);
}

#[test]
fn custom_window_is_honoured() {
    let frames =
        FrameDataTable::defaults().with_window(Action::Attack, FrameWindow::new(1, 4, 2));
    let mut engine = engine(FighterProfile::balanced().with_frames(frames));

    let runs = trace_action(&mut engine, Action::Attack);

    assert_eq!(
        runs,
        vec![
            (CombatState::AttackStartup, 1),
            (CombatState::AttackActive, 4),
            (CombatState::AttackRecovery, 2),
            (CombatState::Idle, 1),
        ]
    );
}

#[test]
fn jump_rises_falls_and_lands() {
    let mut engine = engine(FighterProfile::balanced());

    let runs = trace_action(&mut engine, Action::Jump);
    let states: Vec<CombatState> = runs.iter().map(|(state, _)| *state).collect();

    assert_eq!(
        states,
        vec![
            CombatState::JumpStartup,
            CombatState::JumpActive,
            CombatState::JumpRising,
            CombatState::JumpFalling,
            CombatState::JumpRecovery,
            CombatState::Idle,
        ]
    );
    assert_eq!(runs[0].1, 2);
    assert_eq!(runs[1].1, 1);
    assert_eq!(runs[4].1, 3);

    let fighter = engine.state().combatant(PlayerId::One);
    assert!(fighter.is_grounded());
    assert_eq!(fighter.jump_cooldown_remaining, 30);
}

#[test]
fn cooldown_drops_repeat_attack() {
    let mut engine = engine(FighterProfile::balanced());
    let mut provider = queue([Action::Attack; 20]);

    for _ in 0..13 {
        engine.step(&mut provider, &mut Action::Idle);
    }
    assert_eq!(engine.current_state(PlayerId::One), CombatState::Idle);

    engine.step(&mut provider, &mut Action::Idle);
    assert_eq!(engine.current_state(PlayerId::One), CombatState::Idle);
}

#[test]
fn stun_interrupts_and_returns_to_idle() {
    let mut engine = engine(FighterProfile::balanced());
    engine.step(&mut Action::Block, &mut Action::Idle);
    assert_eq!(engine.current_state(PlayerId::One), CombatState::BlockStartup);

    let mut state = engine.into_state();
    state.combatant_mut(PlayerId::One).stun(2);
    let mut engine = MatchEngine::from_state(state);

    engine.step(&mut Action::Idle, &mut Action::Idle);
    assert_eq!(engine.current_state(PlayerId::One), CombatState::Stunned);
    engine.step(&mut Action::Idle, &mut Action::Idle);
    assert_eq!(engine.current_state(PlayerId::One), CombatState::Stunned);
    engine.step(&mut Action::Idle, &mut Action::Idle);
    assert_eq!(engine.current_state(PlayerId::One), CombatState::Idle);

    let fighter = engine.state().combatant(PlayerId::One);
    assert_eq!(fighter.block_cooldown_remaining, 0);
}

/// Idles both players until `done` holds.
fn idle_until(engine: &mut MatchEngine, done: impl Fn(&MatchEngine) -> bool) {
    for _ in 0..120 {
        if done(engine) {
            return;
        }
        engine.step(&mut Action::Idle, &mut Action::Idle);
    }
    panic!("condition not reached within 120 ticks");
}

fn p1_state(engine: &MatchEngine) -> CombatState {
    engine.current_state(PlayerId::One)
}

#[test]
fn aerial_attack_returns_to_falling() {
    let mut engine = engine(FighterProfile::balanced());
    engine.step(&mut Action::Jump, &mut Action::Idle);
    idle_until(&mut engine, |e| p1_state(e) == CombatState::JumpFalling);

    engine.step(&mut Action::Attack, &mut Action::Idle);
    assert_eq!(p1_state(&engine), CombatState::AttackStartup);
    idle_until(&mut engine, |e| !p1_state(e).is_attacking());

    let fighter = engine.state().combatant(PlayerId::One);
    assert_eq!(fighter.current_state, CombatState::JumpFalling);
    assert!(!fighter.is_grounded());
    assert_eq!(fighter.attack_cooldown_remaining, 0);

    idle_until(&mut engine, |e| p1_state(e) == CombatState::Idle);
    let fighter = engine.state().combatant(PlayerId::One);
    assert!(fighter.is_grounded());
    assert_eq!(fighter.jump_cooldown_remaining, 30);
}

#[test]
fn aerial_movement_returns_to_rising() {
    let mut engine = engine(FighterProfile::balanced());
    engine.step(&mut Action::Jump, &mut Action::Idle);
    idle_until(&mut engine, |e| p1_state(e) == CombatState::JumpRising);

    engine.step(&mut Action::Right, &mut Action::Idle);
    assert_eq!(p1_state(&engine), CombatState::RightActive);
    engine.step(&mut Action::Idle, &mut Action::Idle);
    assert_eq!(p1_state(&engine), CombatState::JumpRising);
    assert!(!engine.state().combatant(PlayerId::One).is_grounded());

    // A second jump is only accepted from the floor.
    engine.step(&mut Action::Jump, &mut Action::Idle);
    assert_eq!(p1_state(&engine), CombatState::JumpRising);

    idle_until(&mut engine, |e| p1_state(e) == CombatState::Idle);
    let fighter = engine.state().combatant(PlayerId::One);
    assert!(fighter.is_grounded());
    assert_eq!(fighter.jump_cooldown_remaining, 30);
}
