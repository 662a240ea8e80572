//! Host-owned fighter lookup.

use std::collections::BTreeMap;

use fight_core::{Armour, FighterProfile, Weapon};

use crate::error::ContentError;
use crate::registry::FighterRegistry;

/// Validated fighter profiles keyed by tag.
///
/// Populated from a [`FighterRegistry`], from data files, or both; later
/// inserts replace earlier ones so data files can override presets.
#[derive(Clone, Debug, Default)]
pub struct FighterRepository {
    profiles: BTreeMap<String, FighterProfile>,
}

impl FighterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every fighter in the registry.
    pub fn from_registry(registry: &FighterRegistry) -> Result<Self, ContentError> {
        let mut repository = Self::new();
        for tag in registry.tags() {
            repository.insert(tag, registry.build(tag)?)?;
        }
        Ok(repository)
    }

    /// Validates and stores a profile, returning the one it replaced.
    pub fn insert(
        &mut self,
        tag: impl Into<String>,
        profile: FighterProfile,
    ) -> Result<Option<FighterProfile>, ContentError> {
        let tag = tag.into();
        if let Err(source) = profile.validate() {
            return Err(ContentError::InvalidFighter { tag, source });
        }

        let replaced = self.profiles.insert(tag.clone(), profile);
        if replaced.is_some() {
            tracing::debug!(target: "content::repository", %tag, "fighter overridden");
        }
        Ok(replaced)
    }

    pub fn get(&self, tag: &str) -> Result<&FighterProfile, ContentError> {
        self.profiles
            .get(tag)
            .ok_or_else(|| ContentError::UnknownFighter {
                tag: tag.to_owned(),
            })
    }

    /// Looks up a fighter and applies equipment on top of it.
    pub fn equip(
        &self,
        tag: &str,
        weapon: Option<&Weapon>,
        armour: Option<&Armour>,
    ) -> Result<FighterProfile, ContentError> {
        let derived = self.get(tag)?.derive(weapon, armour);
        derived
            .validate()
            .map_err(|source| ContentError::InvalidFighter {
                tag: tag.to_owned(),
                source,
            })?;
        Ok(derived)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.profiles.contains_key(tag)
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
