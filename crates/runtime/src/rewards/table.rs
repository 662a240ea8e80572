//! Tag lookup and weighted combination of reward events.
use std::collections::HashMap;

use fight_core::{MatchState, PlayerId, RewardHook};

use super::events::{DamageDealt, DamageTaken, DistanceX, HealthAdvantage, MatchOutcome};
use super::RewardEvent;
use crate::error::{Result, RuntimeError};

pub type RewardConstructor = fn() -> Box<dyn RewardEvent>;

/// Maps reward tags to constructors.
///
/// Built explicitly by the host; there is no process-wide registry.
#[derive(Clone, Debug, Default)]
pub struct RewardRegistry {
    constructors: HashMap<&'static str, RewardConstructor>,
}

impl RewardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in event.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("distance_x", boxed::<DistanceX>);
        registry.register("damage_dealt", boxed::<DamageDealt>);
        registry.register("damage_taken", boxed::<DamageTaken>);
        registry.register("health_advantage", boxed::<HealthAdvantage>);
        registry.register("match_outcome", boxed::<MatchOutcome>);
        registry
    }

    /// Adds or replaces a constructor.
    pub fn register(&mut self, tag: &'static str, constructor: RewardConstructor) {
        self.constructors.insert(tag, constructor);
    }

    pub fn create(&self, tag: &str) -> Result<Box<dyn RewardEvent>> {
        self.constructors
            .get(tag)
            .map(|constructor| constructor())
            .ok_or_else(|| RuntimeError::UnknownReward {
                tag: tag.to_owned(),
            })
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.constructors.keys().copied().collect();
        tags.sort_unstable();
        tags
    }
}

fn boxed<E>() -> Box<dyn RewardEvent>
where
    E: RewardEvent + Default + 'static,
{
    Box::new(E::default())
}

/// Weighted sum of reward events.
#[derive(Default)]
pub struct RewardTable {
    entries: Vec<(Box<dyn RewardEvent>, f32)>,
}

impl RewardTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(tag, weight)` pairs.
    pub fn from_weights<'a>(
        registry: &RewardRegistry,
        weights: impl IntoIterator<Item = (&'a str, f32)>,
    ) -> Result<Self> {
        let mut table = Self::new();
        for (tag, weight) in weights {
            if !weight.is_finite() {
                return Err(RuntimeError::InvalidRewardWeight {
                    tag: tag.to_owned(),
                    weight,
                });
            }
            table.entries.push((registry.create(tag)?, weight));
        }
        Ok(table)
    }

    pub fn with(mut self, event: impl RewardEvent + 'static, weight: f32) -> Self {
        self.entries.push((Box::new(event), weight));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self, state: &MatchState, player: PlayerId) -> f32 {
        self.entries
            .iter()
            .map(|(event, weight)| event.measure(state, player) * weight)
            .sum()
    }
}

impl RewardHook for RewardTable {
    fn evaluate(&mut self, state: &MatchState, player: PlayerId) -> f32 {
        self.total(state, player)
    }
}
