use fight_core::{
    Action, FighterProfile, MatchConfig, MatchEngine, MatchState, Observation, PlayerId,
};

/// Deterministic action pattern that exercises every action.
fn pattern(offset: usize) -> impl FnMut(PlayerId, &Observation) -> Action {
    let mut calls = offset;
    move |_, observation| {
        calls += 1;
        // Close in when far apart, otherwise cycle through the move set.
        if observation.distance_x() > 0.2 && calls % 3 != 0 {
            return Action::Right;
        }
        Action::ALL[(calls * 7) % Action::COUNT]
    }
}

fn left_pattern() -> impl FnMut(PlayerId, &Observation) -> Action {
    let mut inner = pattern(2);
    move |player, observation| match inner(player, observation) {
        Action::Right => Action::Left,
        other => other,
    }
}

fn run(engine: &mut MatchEngine, ticks: usize) -> Vec<MatchState> {
    let mut p1 = pattern(0);
    let mut p2 = left_pattern();
    let mut trajectory = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        engine.step(&mut p1, &mut p2);
        trajectory.push(engine.state().clone());
    }
    trajectory
}

fn engine() -> MatchEngine {
    MatchEngine::new(
        MatchConfig::new().with_max_frames(600),
        FighterProfile::balanced(),
        FighterProfile {
            move_speed: 6.0,
            ..FighterProfile::balanced()
        },
    )
    .unwrap()
}

#[test]
fn reset_replays_identically() {
    let mut engine = engine();
    let first = run(&mut engine, 400);

    engine.reset();
    assert_eq!(engine.frame(), 0);
    assert!(!engine.is_finished());
    let second = run(&mut engine, 400);

    assert_eq!(first, second);
}

#[test]
fn fresh_engines_agree() {
    let a = run(&mut engine(), 300);
    let b = run(&mut engine(), 300);

    assert_eq!(a.last(), b.last());
}

#[test]
fn health_invariant_holds_every_tick() {
    let trajectory = run(&mut engine(), 600);

    for state in &trajectory {
        for fighter in &state.combatants {
            assert!(fighter.health >= 0.0);
            assert!(fighter.health <= fighter.max_health);
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn digest_matches_after_reset() {
    let mut engine = engine();
    run(&mut engine, 250);
    let first = engine.state().digest().unwrap();

    engine.reset();
    run(&mut engine, 250);
    let second = engine.state().digest().unwrap();

    assert_eq!(hex::encode(first), hex::encode(second));
}
