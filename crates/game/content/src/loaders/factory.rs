//! Content factory for building fighter repositories from data files.

use std::path::{Path, PathBuf};

use fight_core::MatchConfig;

use crate::catalog::ItemCatalog;
use crate::loaders::{ConfigLoader, FighterLoader, FighterSpec, ItemLoader, LoadResult};
use crate::registry::FighterRegistry;
use crate::repository::FighterRepository;

/// Content factory that loads all fighter content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── fighters.ron
/// └── items.ron
/// ```
///
/// Every file is optional for [`Self::load_repository`]; the built-in
/// presets are always available.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load match configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<MatchConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load fighter definitions from `fighters.ron`.
    pub fn load_fighters(&self) -> LoadResult<Vec<FighterSpec>> {
        let path = self.data_dir.join("fighters.ron");
        FighterLoader::load(&path)
    }

    /// Load the weapon and armour catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Builds a repository from the built-in presets plus any definitions in
    /// the data directory. Data-file fighters override presets of the same tag.
    pub fn load_repository(&self, registry: &FighterRegistry) -> LoadResult<FighterRepository> {
        let mut repository = FighterRepository::from_registry(registry)?;

        let items = if self.data_dir.join("items.ron").exists() {
            self.load_items()?
        } else {
            ItemCatalog::default()
        };

        if !self.data_dir.join("fighters.ron").exists() {
            tracing::debug!(
                target: "content::factory",
                dir = %self.data_dir.display(),
                "no fighters.ron, using presets only"
            );
            return Ok(repository);
        }

        for spec in self.load_fighters()? {
            let profile = spec.build(registry, &items)?;
            repository.insert(spec.tag.as_str(), profile)?;
        }

        tracing::info!(
            target: "content::factory",
            fighters = repository.len(),
            weapons = items.weapons.len(),
            armours = items.armours.len(),
            "content loaded"
        );
        Ok(repository)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
