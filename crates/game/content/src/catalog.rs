//! Weapon and armour catalog.

use fight_core::{Armour, Weapon};

use crate::error::ContentError;

/// Equipment available to fighter definitions, looked up by name.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemCatalog {
    pub weapons: Vec<Weapon>,
    pub armours: Vec<Armour>,
}

impl ItemCatalog {
    pub fn new(weapons: Vec<Weapon>, armours: Vec<Armour>) -> Self {
        Self { weapons, armours }
    }

    /// Case-insensitive weapon lookup.
    pub fn weapon(&self, name: &str) -> Result<&Weapon, ContentError> {
        self.weapons
            .iter()
            .find(|weapon| weapon.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ContentError::UnknownWeapon {
                name: name.to_owned(),
            })
    }

    /// Case-insensitive armour lookup.
    pub fn armour(&self, name: &str) -> Result<&Armour, ContentError> {
        self.armours
            .iter()
            .find(|armour| armour.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ContentError::UnknownArmour {
                name: name.to_owned(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty() && self.armours.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ItemCatalog {
        ItemCatalog::new(
            vec![Weapon {
                name: "Katana".into(),
                attack_damage_modifier: 6.0,
                ..Weapon::default()
            }],
            vec![Armour {
                name: "Chainmail".into(),
                damage_reduction_modifier: 0.2,
                ..Armour::default()
            }],
        )
    }

    #[test]
    fn lookup_ignores_case() {
        let catalog = catalog();
        assert_eq!(catalog.weapon("katana").unwrap().attack_damage_modifier, 6.0);
        assert_eq!(catalog.armour("CHAINMAIL").unwrap().name, "Chainmail");
    }

    #[test]
    fn missing_items_are_reported_by_name() {
        let catalog = catalog();
        assert_eq!(
            catalog.weapon("spear"),
            Err(ContentError::UnknownWeapon {
                name: "spear".into()
            })
        );
        assert!(matches!(
            catalog.armour("robe"),
            Err(ContentError::UnknownArmour { .. })
        ));
    }
}
