use crate::state::PlayerId;

/// Arena geometry, match length and observation scaling.
///
/// Y grows downward: the floor sits at `ground_level` and a jump drives the
/// vertical velocity negative.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Y coordinate of the floor surface.
    pub ground_level: f32,
    /// Timeout after which the winner is decided on health.
    pub max_frames: u64,
    /// Fraction of the arena width at which player one spawns; player two mirrors it.
    pub spawn_fraction: f32,
    /// Horizontal speed used to normalise observations.
    pub max_x_velocity: f32,
    /// Vertical speed used to normalise observations.
    pub max_y_velocity: f32,
}

impl MatchConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 400.0;
    /// Distance between the bottom of the arena and the floor.
    pub const DEFAULT_FLOOR_MARGIN: f32 = 50.0;
    /// 30 seconds at 60 FPS.
    pub const DEFAULT_MAX_FRAMES: u64 = 1800;
    pub const DEFAULT_SPAWN_FRACTION: f32 = 0.25;
    pub const DEFAULT_MAX_X_VELOCITY: f32 = 10.0;
    pub const DEFAULT_MAX_Y_VELOCITY: f32 = 20.0;

    pub fn new() -> Self {
        Self {
            arena_width: Self::DEFAULT_ARENA_WIDTH,
            arena_height: Self::DEFAULT_ARENA_HEIGHT,
            ground_level: Self::DEFAULT_ARENA_HEIGHT - Self::DEFAULT_FLOOR_MARGIN,
            max_frames: Self::DEFAULT_MAX_FRAMES,
            spawn_fraction: Self::DEFAULT_SPAWN_FRACTION,
            max_x_velocity: Self::DEFAULT_MAX_X_VELOCITY,
            max_y_velocity: Self::DEFAULT_MAX_Y_VELOCITY,
        }
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn with_arena(mut self, width: f32, height: f32, ground_level: f32) -> Self {
        self.arena_width = width;
        self.arena_height = height;
        self.ground_level = ground_level;
        self
    }

    /// Horizontal centre of the arena, used by the timeout tie-break.
    pub fn center_x(&self) -> f32 {
        self.arena_width / 2.0
    }

    /// Spawn x coordinate for the given player.
    pub fn spawn_x(&self, player: PlayerId) -> f32 {
        match player {
            PlayerId::One => self.arena_width * self.spawn_fraction,
            PlayerId::Two => self.arena_width * (1.0 - self.spawn_fraction),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
