//! Composition root for the headless match simulator.
//!
//! Loads content and runtime settings, then assembles a
//! [`fight_runtime::BatchRunner`] for the binary to drive.

pub mod logging;

use anyhow::{Context, Result};
use fight_content::{ContentFactory, FighterRegistry};
use fight_runtime::{BatchRunner, RuntimeConfig};

/// Everything the binary needs to start a batch.
pub struct Simulation {
    pub runner: BatchRunner,
    pub matches: usize,
    pub seed: u64,
}

impl Simulation {
    /// Resolves fighters and match settings from the data directory.
    pub fn prepare(config: &RuntimeConfig) -> Result<Self> {
        let factory = ContentFactory::new(&config.data_dir);

        let mut match_config = factory
            .load_config()
            .with_context(|| format!("loading config from {}", config.data_dir.display()))?;
        if let Some(max_frames) = config.max_frames {
            match_config.max_frames = max_frames;
        }

        let repository = factory.load_repository(&FighterRegistry::builtin())?;
        let [p1, p2] = &config.fighters;
        let p1 = repository.get(p1)?.clone();
        let p2 = repository.get(p2)?.clone();

        tracing::info!(
            p1 = %p1.name,
            p2 = %p2.name,
            max_frames = match_config.max_frames,
            "fighters resolved"
        );

        let runner = BatchRunner::new(match_config, p1, p2)
            .with_rewards(config.rewards.iter().cloned())
            .recording(config.record);
        runner.validate()?;

        Ok(Self {
            runner,
            matches: config.batch_size,
            seed: config.seed,
        })
    }
}
