//! Runtime settings read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for a batch run.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub batch_size: usize,
    pub seed: u64,
    pub data_dir: PathBuf,
    pub record: bool,
    /// Overrides the match length from `config.toml`.
    pub max_frames: Option<u64>,
    pub fighters: [String; 2],
    /// `(tag, weight)` pairs for the reward table.
    pub rewards: Vec<(String, f32)>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            batch_size: Self::DEFAULT_BATCH_SIZE,
            seed: 0,
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            record: false,
            max_frames: None,
            fighters: ["balanced".to_owned(), "balanced".to_owned()],
            rewards: Vec::new(),
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_BATCH_SIZE: usize = 16;
    pub const DEFAULT_DATA_DIR: &'static str = "crates/game/content/data";

    /// Construct configuration from process environment variables.
    ///
    /// - `FIGHT_BATCH_SIZE`
    /// - `FIGHT_SEED`
    /// - `FIGHT_DATA_DIR`
    /// - `FIGHT_RECORD` (`1`/`true`/`yes`)
    /// - `FIGHT_MAX_FRAMES`
    /// - `FIGHT_P1` / `FIGHT_P2` (fighter tags)
    /// - `FIGHT_REWARDS` (`tag=weight,tag=weight`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(size) = read_env::<usize>("FIGHT_BATCH_SIZE") {
            config.batch_size = size.max(1);
        }

        if let Some(seed) = read_env::<u64>("FIGHT_SEED") {
            config.seed = seed;
        }

        if let Some(dir) = read_env::<PathBuf>("FIGHT_DATA_DIR") {
            config.data_dir = dir;
        }

        if let Some(record) = read_env_bool("FIGHT_RECORD") {
            config.record = record;
        }

        config.max_frames = read_env::<u64>("FIGHT_MAX_FRAMES").filter(|frames| *frames > 0);

        for (slot, key) in ["FIGHT_P1", "FIGHT_P2"].into_iter().enumerate() {
            if let Some(tag) = read_env::<String>(key) {
                config.fighters[slot] = tag;
            }
        }

        if let Ok(spec) = env::var("FIGHT_REWARDS") {
            config.rewards = parse_rewards(&spec);
        }

        config
    }
}

/// Parses `tag=weight` pairs; malformed entries are skipped with a warning.
pub fn parse_rewards(spec: &str) -> Vec<(String, f32)> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = entry
                .split_once('=')
                .and_then(|(tag, weight)| Some((tag.trim(), weight.trim().parse::<f32>().ok()?)));
            if parsed.is_none() {
                tracing::warn!(target: "runtime::config", %entry, "malformed reward entry skipped");
            }
            parsed.map(|(tag, weight)| (tag.to_owned(), weight))
        })
        .collect()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_spec_parses_pairs() {
        assert_eq!(
            parse_rewards("health_advantage=1.0, damage_taken=-0.5,,broken, match_outcome=x"),
            vec![
                ("health_advantage".to_owned(), 1.0),
                ("damage_taken".to_owned(), -0.5),
            ]
        );
    }

    #[test]
    fn defaults_are_a_balanced_mirror() {
        let config = RuntimeConfig::default();
        assert_eq!(config.fighters, ["balanced".to_owned(), "balanced".to_owned()]);
        assert_eq!(config.batch_size, RuntimeConfig::DEFAULT_BATCH_SIZE);
        assert!(config.rewards.is_empty());
    }
}
