//! Hydration Runner - a side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences for the web front-end
//! - `driver`: Host-side collaborators (spawn timer, autopilot, headless loop)

pub mod driver;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use sim::{GameEngine, GamePhase, GameState};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Nominal animation-frame duration the drivers assume (~60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Scene dimensions; the ground is the bottom edge of the scene
    pub const SCENE_WIDTH: f32 = 800.0;
    pub const SCENE_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 150.0;
    pub const PLAYER_SIZE: f32 = 30.0;

    /// Downward acceleration added to vertical velocity each tick
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity set by a jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: f32 = 5.0;
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HEIGHT: f32 = 50.0;

    /// Scoring
    pub const SCORE_PER_TICK: u64 = 1;
    pub const POINTS_PER_LEVEL: u64 = 1000;

    /// Spawn cadence: max(floor, base - level * decay)
    pub const SPAWN_BASE_INTERVAL_MS: u32 = 2000;
    pub const SPAWN_DECAY_MS: u32 = 200;
    pub const SPAWN_FLOOR_MS: u32 = 600;
}
