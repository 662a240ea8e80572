//! Built-in fighter roster.
//!
//! The registry maps a tag to a plain constructor. It is built explicitly by
//! the host and holds no global state, so two registries never interfere.

use std::collections::HashMap;

use fight_core::{
    Action, ActionAttributes, ActionFrameData, FighterProfile, FrameDataTable, FrameWindow,
};

use crate::error::ContentError;

/// Builds a fresh profile for a registered tag.
pub type FighterConstructor = fn() -> FighterProfile;

#[derive(Clone, Debug, Default)]
pub struct FighterRegistry {
    constructors: HashMap<&'static str, FighterConstructor>,
}

impl FighterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the shipped fighters.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (tag, constructor) in BUILTIN {
            registry.constructors.insert(tag, constructor);
        }
        registry
    }

    pub fn register(
        &mut self,
        tag: &'static str,
        constructor: FighterConstructor,
    ) -> Result<(), ContentError> {
        if self.constructors.contains_key(tag) {
            return Err(ContentError::DuplicateFighter {
                tag: tag.to_owned(),
            });
        }
        self.constructors.insert(tag, constructor);
        Ok(())
    }

    /// Builds the profile registered under `tag`.
    pub fn build(&self, tag: &str) -> Result<FighterProfile, ContentError> {
        self.constructors
            .get(tag)
            .map(|constructor| constructor())
            .ok_or_else(|| ContentError::UnknownFighter {
                tag: tag.to_owned(),
            })
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.constructors.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

const BUILTIN: [(&str, FighterConstructor); 5] = [
    (FighterProfile::DEFAULT_NAME, FighterProfile::balanced),
    ("aggressive", aggressive),
    ("defensive", defensive),
    ("boxer", boxer),
    ("samurai", samurai),
];

// ===== presets =====

/// Fast pressure: quicker attacks, weaker guard.
fn aggressive() -> FighterProfile {
    let frames =
        FrameDataTable::defaults().with_window(Action::Attack, FrameWindow::new(2, 2, 5));
    FighterProfile {
        move_speed: 7.0,
        attack_damage: 12.0,
        on_hit_stun: 10,
        block_efficiency: 0.6,
        health: 90.0,
        attack_cooldown: 14,
        ..FighterProfile::balanced()
    }
    .named("aggressive")
    .with_frames(frames)
}

/// Slow turtle: long blocks, punishing block stun.
fn defensive() -> FighterProfile {
    let frames = FrameDataTable::defaults().with_window(Action::Block, FrameWindow::new(1, 12, 2));
    FighterProfile {
        move_speed: 4.0,
        attack_damage: 8.0,
        block_efficiency: 0.9,
        on_block_stun: 16,
        damage_reduction: 0.1,
        health: 120.0,
        block_cooldown: 10,
        ..FighterProfile::balanced()
    }
    .named("defensive")
    .with_frames(frames)
}

/// Rushdown with quick jabs and low health.
fn boxer() -> FighterProfile {
    let mut frames = FrameDataTable::defaults();
    frames.set(
        Action::Attack,
        ActionFrameData::new(FrameWindow::new(2, 1, 3)).with_attributes(ActionAttributes {
            damage: Some(8.0),
            knockback: Some(2.0),
            stun_frames: None,
        }),
    );
    frames.set(Action::Jump, ActionFrameData::new(FrameWindow::new(1, 12, 2)));
    frames.set(Action::Block, ActionFrameData::new(FrameWindow::new(1, 8, 2)));

    FighterProfile {
        gravity: 0.95,
        move_speed: 8.0,
        x_attack_range: 40.0,
        y_attack_range: 20.0,
        attack_damage: 8.0,
        attack_cooldown: 15,
        health: 80.0,
        ..FighterProfile::balanced()
    }
    .named("boxer")
    .with_frames(frames)
}

/// Long reach and heavy hits behind slow startup.
fn samurai() -> FighterProfile {
    let mut frames = FrameDataTable::defaults();
    frames.set(
        Action::Attack,
        ActionFrameData::new(FrameWindow::new(5, 3, 8)).with_attributes(ActionAttributes {
            damage: Some(20.0),
            knockback: Some(10.0),
            stun_frames: Some(15),
        }),
    );
    frames.set(Action::Jump, ActionFrameData::new(FrameWindow::new(3, 14, 5)));
    frames.set(Action::Block, ActionFrameData::new(FrameWindow::new(2, 15, 3)));

    FighterProfile {
        gravity: 1.0,
        jump_force: 12.0,
        x_attack_range: 70.0,
        y_attack_range: 30.0,
        attack_damage: 20.0,
        on_hit_stun: 15,
        attack_cooldown: 40,
        health: 120.0,
        ..FighterProfile::balanced()
    }
    .named("samurai")
    .with_frames(frames)
}
