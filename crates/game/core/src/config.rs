/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Score at which the session ends. Reaching or exceeding it wins.
    pub win_score: u32,
    /// Points awarded the first time a collectible is touched.
    pub points_per_collectible: u32,
    /// Number of collectibles laid out at session start.
    pub collectible_count: u32,
    /// Horizontal run speed applied while left/right is held.
    pub run_speed: f32,
    /// Upward speed applied when jumping from the ground.
    pub jump_speed: f32,
    /// Spawn position of the player body.
    pub player_spawn: (f32, f32),
    /// X of the first collectible and the spacing between collectibles.
    pub collectible_origin_x: f32,
    pub collectible_step_x: f32,
}

impl GameConfig {
    // ===== defaults taken from the platformer scene =====
    pub const DEFAULT_WIN_SCORE: u32 = 120;
    pub const DEFAULT_POINTS_PER_COLLECTIBLE: u32 = 10;
    pub const DEFAULT_COLLECTIBLE_COUNT: u32 = 12;
    pub const DEFAULT_RUN_SPEED: f32 = 160.0;
    pub const DEFAULT_JUMP_SPEED: f32 = 360.0;

    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    pub fn new() -> Self {
        Self {
            win_score: Self::DEFAULT_WIN_SCORE,
            points_per_collectible: Self::DEFAULT_POINTS_PER_COLLECTIBLE,
            collectible_count: Self::DEFAULT_COLLECTIBLE_COUNT,
            run_speed: Self::DEFAULT_RUN_SPEED,
            jump_speed: Self::DEFAULT_JUMP_SPEED,
            player_spawn: (100.0, 450.0),
            collectible_origin_x: 12.0,
            collectible_step_x: 70.0,
        }
    }

    pub fn with_points_per_collectible(mut self, points: u32) -> Self {
        self.points_per_collectible = points;
        self
    }

    pub fn with_win_score(mut self, win_score: u32) -> Self {
        self.win_score = win_score;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
