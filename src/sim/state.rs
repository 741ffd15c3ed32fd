//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives in [`GameState`].

use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Engine constructed, waiting for the first start command
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended by a collision; state is frozen until the next start
    GameOver,
}

impl GamePhase {
    /// Whether the renderer should show the start/restart overlay
    pub fn awaiting_start(&self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// The player's runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity in scene units per tick (negative is up)
    pub vertical_velocity: f32,
}

impl Player {
    /// Player at its starting position, at rest
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(
                tuning.player_start_x,
                tuning.player_start_y,
                tuning.player_width,
                tuning.player_height,
            ),
            vertical_velocity: 0.0,
        }
    }

    /// Standing on the ground (bottom edge at ground level)
    pub fn is_grounded(&self, ground_level: f32) -> bool {
        self.rect.bottom() >= ground_level
    }
}

/// An obstacle scrolling leftward at the tuning's constant speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Right edge has reached the left boundary of the scene
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.rect.right() <= 0.0
    }
}

/// Level derived from score: `floor(score / points_per_level) + 1`
#[inline]
pub fn level_for_score(score: u64, points_per_level: u64) -> u32 {
    let level = score / points_per_level.max(1) + 1;
    u32::try_from(level).unwrap_or(u32::MAX)
}

/// Complete state of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    /// Oldest first
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    /// Always `level_for_score(score)`; only written alongside `score`
    pub level: u32,
    pub phase: GamePhase,
    /// Successful ticks in the current run
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh state for a run in the given phase
    pub fn new(tuning: &Tuning, phase: GamePhase) -> Self {
        Self {
            player: Player::spawn(tuning),
            obstacles: Vec::new(),
            score: 0,
            level: 1,
            phase,
            time_ticks: 0,
        }
    }

    /// Set the score and recompute the level from it
    pub fn set_score(&mut self, score: u64, tuning: &Tuning) {
        self.score = score;
        self.level = level_for_score(score, tuning.points_per_level);
    }
}
