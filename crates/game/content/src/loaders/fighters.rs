//! Fighter definition loader.
//!
//! A definition starts from a registered preset, overrides individual stats
//! and frame windows, then applies optional equipment from the item catalog:
//!
//! ```ron
//! (
//!     fighters: [
//!         (
//!             tag: "brawler",
//!             base: "aggressive",
//!             stats: (health: 110.0, attack_cooldown: 18),
//!             frame_data: { "ATTACK": (startup: 2, active: 3, recovery: 6) },
//!             weapon: "Knuckles",
//!         ),
//!     ],
//! )
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use fight_core::{Action, ActionAttributes, ActionFrameData, FighterProfile, FrameWindow};
use serde::{Deserialize, Serialize};

use crate::catalog::ItemCatalog;
use crate::error::ContentError;
use crate::loaders::{LoadResult, read_file};
use crate::registry::FighterRegistry;

/// Fighter catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FighterCatalog {
    pub fighters: Vec<FighterSpec>,
}

/// One fighter definition as written in `fighters.ron`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterSpec {
    pub tag: String,
    /// Display name; the tag when absent.
    pub name: Option<String>,
    pub description: String,
    /// Registered preset the overrides apply to; `balanced` when absent.
    pub base: Option<String>,
    pub stats: StatOverrides,
    /// Keyed by action name (`"ATTACK"`, `"jump"`, ...).
    pub frame_data: BTreeMap<String, FrameSpec>,
    pub weapon: Option<String>,
    pub armour: Option<String>,
}

/// Frame window plus optional attributes for one action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSpec {
    pub startup: u32,
    pub active: u32,
    pub recovery: u32,
    pub damage: Option<f32>,
    pub knockback: Option<f32>,
    pub stun_frames: Option<u32>,
}

impl FrameSpec {
    pub fn to_frame_data(self) -> ActionFrameData {
        ActionFrameData::new(FrameWindow::new(self.startup, self.active, self.recovery))
            .with_attributes(ActionAttributes {
                damage: self.damage,
                knockback: self.knockback,
                stun_frames: self.stun_frames,
            })
    }
}

/// Per-stat overrides; `None` keeps the preset's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatOverrides {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub gravity: Option<f32>,
    pub friction: Option<f32>,
    pub move_speed: Option<f32>,
    pub jump_force: Option<f32>,
    pub x_attack_range: Option<f32>,
    pub y_attack_range: Option<f32>,
    pub attack_damage: Option<f32>,
    pub on_hit_stun: Option<u32>,
    pub block_efficiency: Option<f32>,
    pub on_block_stun: Option<u32>,
    pub damage_reduction: Option<f32>,
    pub health: Option<f32>,
    pub attack_cooldown: Option<u32>,
    pub block_cooldown: Option<u32>,
    pub jump_cooldown: Option<u32>,
}

macro_rules! override_fields {
    ($overrides:expr, $profile:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $overrides.$field {
                $profile.$field = value;
            }
        )+
    };
}

impl StatOverrides {
    pub fn apply(&self, profile: &mut FighterProfile) {
        override_fields!(self, profile;
            width, height, gravity, friction, move_speed, jump_force,
            x_attack_range, y_attack_range, attack_damage, on_hit_stun,
            block_efficiency, on_block_stun, damage_reduction, health,
            attack_cooldown, block_cooldown, jump_cooldown,
        );
    }
}

impl FighterSpec {
    /// Resolves the definition into a validated profile.
    ///
    /// Unknown action names in `frame_data` are logged and skipped.
    pub fn build(
        &self,
        registry: &FighterRegistry,
        items: &ItemCatalog,
    ) -> Result<FighterProfile, ContentError> {
        let base = self.base.as_deref().unwrap_or(FighterProfile::DEFAULT_NAME);
        let mut profile = registry.build(base)?;
        profile.name = self.name.clone().unwrap_or_else(|| self.tag.clone());
        self.stats.apply(&mut profile);

        for (action_name, frame) in &self.frame_data {
            match action_name.parse::<Action>() {
                Ok(action) => profile.frames.set(action, frame.to_frame_data()),
                Err(_) => tracing::warn!(
                    target: "content::fighters",
                    tag = %self.tag,
                    action = %action_name,
                    "unknown action in frame data, skipped"
                ),
            }
        }

        let weapon = self
            .weapon
            .as_deref()
            .map(|name| items.weapon(name))
            .transpose()?;
        let armour = self
            .armour
            .as_deref()
            .map(|name| items.armour(name))
            .transpose()?;
        if weapon.is_some() || armour.is_some() {
            profile = profile.derive(weapon, armour);
        }

        profile
            .validate()
            .map_err(|source| ContentError::InvalidFighter {
                tag: self.tag.clone(),
                source,
            })?;
        Ok(profile)
    }
}

/// Loader for fighter definitions from RON files.
pub struct FighterLoader;

impl FighterLoader {
    /// Load fighter definitions from a RON file.
    ///
    /// Tags must be unique and non-empty within one file.
    pub fn load(path: &Path) -> LoadResult<Vec<FighterSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<FighterSpec>> {
        let catalog: FighterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse fighter catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for spec in &catalog.fighters {
            if spec.tag.is_empty() {
                anyhow::bail!("Fighter definition without a tag");
            }
            if !seen.insert(spec.tag.as_str()) {
                anyhow::bail!("Duplicate fighter tag '{}'", spec.tag);
            }
        }

        Ok(catalog.fighters)
    }
}
