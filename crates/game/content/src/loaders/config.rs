//! Match configuration loader.

use std::path::Path;

use fight_core::MatchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for match configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their [`MatchConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<MatchConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MatchConfig> {
        let config: MatchConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse match config TOML: {}", e))?;

        if config.max_frames == 0 {
            anyhow::bail!("Match config max_frames must be positive");
        }
        if config.arena_width <= 0.0 || config.ground_level <= 0.0 {
            anyhow::bail!(
                "Match config arena must be positive, got width {} and ground {}",
                config.arena_width,
                config.ground_level
            );
        }

        Ok(config)
    }
}
