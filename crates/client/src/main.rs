//! Headless fighting-match simulator.
//!
//! Runs a batch of independent matches between two fighters and logs the
//! aggregate result. Configuration comes from the environment (see
//! [`fight_runtime::RuntimeConfig::from_env`]) and the content data directory.
//!
//! ```bash
//! FIGHT_P1=boxer FIGHT_P2=samurai FIGHT_BATCH_SIZE=64 cargo run -p fight-client
//! ```

use anyhow::Result;
use fight_client::{Simulation, logging};
use fight_core::PlayerId;
use fight_runtime::RuntimeConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = RuntimeConfig::from_env();
    let session = std::env::var("FIGHT_SESSION_ID").ok();
    let _guard = logging::setup_logging(session.as_deref())?;

    tracing::info!("Starting fight simulator");
    tracing::info!("Data directory: {}", config.data_dir.display());
    tracing::info!("Batch size: {}, seed: {}", config.batch_size, config.seed);

    let simulation = Simulation::prepare(&config)?;
    let summary = simulation
        .runner
        .run(simulation.matches, simulation.seed)
        .await?;

    tracing::info!(
        matches = summary.len(),
        p1_wins = summary.wins[0],
        p2_wins = summary.wins[1],
        draws = summary.draws,
        p1_win_rate = summary.win_rate(PlayerId::One),
        mean_frames = summary.mean_frames,
        "Batch complete"
    );

    if config.record {
        let frames: usize = summary
            .matches
            .iter()
            .filter_map(|summary| summary.replay.as_ref())
            .map(|replay| replay.frames.len())
            .sum();
        tracing::info!("Recorded {} replay frames in memory", frames);
    }

    Ok(())
}
