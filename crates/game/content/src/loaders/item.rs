//! Item catalog loader.

use std::path::Path;

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for weapon and armour catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_default_to_neutral() {
        let catalog = ItemLoader::parse(
            r#"(
                weapons: [(name: "Dagger", attack_damage_modifier: 2.0, attack_cooldown_modifier: -5)],
                armours: [(name: "Cloth")],
            )"#,
        )
        .unwrap();

        let dagger = catalog.weapon("dagger").unwrap();
        assert_eq!(dagger.gravity_modifier, 1.0);
        assert_eq!(dagger.attack_cooldown_modifier, -5);
        let cloth = catalog.armour("cloth").unwrap();
        assert_eq!(cloth.gravity_modifier, 1.0);
        assert_eq!(cloth.health_modifier, 0.0);
    }
}
