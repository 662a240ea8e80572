use fight_core::{Action, DecisionProvider, FighterProfile, MatchConfig, Observation, PlayerId};
use fight_runtime::{BatchRunner, FixedActionProvider, RuntimeError};

fn mirror(max_frames: u64) -> BatchRunner {
    BatchRunner::new(
        MatchConfig::new().with_max_frames(max_frames),
        FighterProfile::balanced(),
        FighterProfile::balanced(),
    )
}

/// Player one walks in and swings; player two stands still.
fn rushdown(player: PlayerId, _seed: u64) -> Box<dyn DecisionProvider + Send> {
    match player {
        PlayerId::One => Box::new(|_: PlayerId, observation: &Observation| {
            if observation.distance_x() > 0.12 {
                Action::Right
            } else {
                Action::Attack
            }
        }),
        PlayerId::Two => Box::new(FixedActionProvider(Action::Idle)),
    }
}

#[tokio::test]
async fn batch_is_reproducible_from_its_seed() {
    let runner = mirror(400).with_rewards([("health_advantage", 1.0), ("damage_taken", -1.0)]);

    let first = runner.run(6, 42).await.unwrap();
    let second = runner.run(6, 42).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
    assert_eq!(first.wins[0] + first.wins[1] + first.draws, 6);
}

#[tokio::test]
async fn matches_come_back_in_seed_order() {
    let runner = mirror(300);

    let batch = runner.run(4, 100).await.unwrap();

    for (offset, summary) in batch.matches.iter().enumerate() {
        assert_eq!(summary, &runner.run_one(100 + offset as u64).unwrap());
    }
}

#[tokio::test]
async fn scripted_aggressor_wins_every_match() {
    let runner = mirror(1800).with_providers(rushdown).recording(true);

    let batch = runner.run(3, 0).await.unwrap();

    assert_eq!(batch.wins, [3, 0]);
    assert_eq!(batch.win_rate(PlayerId::One), 1.0);
    for summary in &batch.matches {
        assert_eq!(summary.health[1], 0.0);
        assert!(summary.hits[0] >= 10);
        let replay = summary.replay.as_ref().unwrap();
        assert_eq!(replay.frames.len() as u64, summary.frames);
    }
}

#[tokio::test]
async fn invalid_fighter_fails_before_spawning() {
    let broken = FighterProfile {
        height: -1.0,
        ..FighterProfile::balanced()
    };
    let runner = BatchRunner::new(MatchConfig::new(), broken, FighterProfile::balanced());

    let err = runner.run(4, 0).await.unwrap_err();
    assert!(matches!(err, RuntimeError::Engine(_)));
}

#[tokio::test]
async fn empty_batch_is_empty() {
    let batch = mirror(100).run(0, 0).await.unwrap();

    assert!(batch.is_empty());
    assert_eq!(batch.mean_frames, 0.0);
}
