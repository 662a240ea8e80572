//! Frame data: per-action startup/active/recovery timing.
//!
//! Every action chain is split into three consecutive phases measured in
//! ticks. The [`FrameDataTable`] is read-only during a match; each fighter
//! carries its own copy so profiles can tune timing independently.
use crate::action::Action;

/// Phase within an action chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Startup,
    Active,
    Recovery,
}

/// Startup/active/recovery tick counts for one action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameWindow {
    pub startup: u32,
    pub active: u32,
    pub recovery: u32,
}

impl FrameWindow {
    pub const fn new(startup: u32, active: u32, recovery: u32) -> Self {
        Self {
            startup,
            active,
            recovery,
        }
    }

    /// Total length of the chain in ticks.
    pub const fn total(&self) -> u32 {
        self.startup
            .saturating_add(self.active)
            .saturating_add(self.recovery)
    }

    /// Whether the action ever exposes an active window.
    pub const fn has_hitbox(&self) -> bool {
        self.active > 0
    }

    pub const fn phase(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Startup => self.startup,
            Phase::Active => self.active,
            Phase::Recovery => self.recovery,
        }
    }
}

/// Optional per-action tuning carried alongside the window.
///
/// The resolver reads damage and stun from the fighter profile; these
/// attributes are kept for tooling and data files that annotate actions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionAttributes {
    pub damage: Option<f32>,
    pub knockback: Option<f32>,
    pub stun_frames: Option<u32>,
}

/// Frame window plus attributes for one action.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionFrameData {
    pub window: FrameWindow,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: ActionAttributes,
}

impl ActionFrameData {
    pub const fn new(window: FrameWindow) -> Self {
        Self {
            window,
            attributes: ActionAttributes {
                damage: None,
                knockback: None,
                stun_frames: None,
            },
        }
    }

    pub const fn with_attributes(mut self, attributes: ActionAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Built-in timing for each action.
    pub const fn default_for(action: Action) -> Self {
        let window = match action {
            Action::Attack => FrameWindow::new(3, 2, 7),
            Action::Jump => FrameWindow::new(2, 15, 3),
            Action::Block => FrameWindow::new(2, 10, 3),
            Action::Left | Action::Right | Action::Idle => FrameWindow::new(0, 1, 0),
        };
        Self::new(window)
    }
}

/// Complete frame table indexed by [`Action`].
///
/// Every action always has an entry; lookups cannot fail.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameDataTable {
    entries: [ActionFrameData; Action::COUNT],
}

impl FrameDataTable {
    pub fn defaults() -> Self {
        Self {
            entries: Action::ALL.map(ActionFrameData::default_for),
        }
    }

    /// Builds a table from overrides, falling back to defaults for the rest.
    pub fn from_entries(entries: impl IntoIterator<Item = (Action, ActionFrameData)>) -> Self {
        let mut table = Self::defaults();
        for (action, data) in entries {
            table.set(action, data);
        }
        table
    }

    pub fn get(&self, action: Action) -> &ActionFrameData {
        &self.entries[action.index()]
    }

    pub fn window(&self, action: Action) -> FrameWindow {
        self.entries[action.index()].window
    }

    pub fn set(&mut self, action: Action, data: ActionFrameData) {
        self.entries[action.index()] = data;
    }

    pub fn with_window(mut self, action: Action, window: FrameWindow) -> Self {
        self.entries[action.index()].window = window;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Action, &ActionFrameData)> {
        Action::ALL.into_iter().zip(self.entries.iter())
    }
}

impl Default for FrameDataTable {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_reference_timing() {
        let table = FrameDataTable::defaults();

        assert_eq!(table.window(Action::Attack), FrameWindow::new(3, 2, 7));
        assert_eq!(table.window(Action::Jump), FrameWindow::new(2, 15, 3));
        assert_eq!(table.window(Action::Block), FrameWindow::new(2, 10, 3));
        assert_eq!(table.window(Action::Left).total(), 1);
        assert!(table.window(Action::Right).has_hitbox());
    }

    #[test]
    fn overrides_keep_remaining_defaults() {
        let table = FrameDataTable::from_entries([(
            Action::Attack,
            ActionFrameData::new(FrameWindow::new(1, 1, 1)),
        )]);

        assert_eq!(table.window(Action::Attack).total(), 3);
        assert_eq!(table.window(Action::Block), FrameWindow::new(2, 10, 3));
        assert_eq!(table.iter().count(), Action::COUNT);
    }
}
