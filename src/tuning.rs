//! Data-driven game balance
//!
//! Every constant the simulation reads lives here so a host can load a
//! partial JSON override and leave the rest at their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Balance constants for one engine instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub scene_width: f32,
    /// Also the ground level: player and obstacles rest on `y + height == scene_height`
    pub scene_height: f32,

    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,

    pub gravity: f32,
    pub jump_velocity: f32,

    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,

    pub score_per_tick: u64,
    pub points_per_level: u64,

    pub spawn_base_interval_ms: u32,
    pub spawn_decay_ms: u32,
    pub spawn_floor_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,

            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,

            score_per_tick: SCORE_PER_TICK,
            points_per_level: POINTS_PER_LEVEL,

            spawn_base_interval_ms: SPAWN_BASE_INTERVAL_MS,
            spawn_decay_ms: SPAWN_DECAY_MS,
            spawn_floor_ms: SPAWN_FLOOR_MS,
        }
    }
}

impl Tuning {
    /// Ground level in scene units (bottom edge of the scene)
    #[inline]
    pub fn ground_level(&self) -> f32 {
        self.scene_height
    }

    /// Parse and validate a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive("scene_width", self.scene_width)?;
        positive("scene_height", self.scene_height)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("gravity", self.gravity)?;
        positive("obstacle_speed", self.obstacle_speed)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("obstacle_height", self.obstacle_height)?;

        if !(self.jump_velocity.is_finite() && self.jump_velocity < 0.0) {
            return Err(TuningError::Invalid {
                field: "jump_velocity",
                reason: "must be negative (upward)",
            });
        }
        if self.points_per_level == 0 {
            return Err(TuningError::Invalid {
                field: "points_per_level",
                reason: "must be non-zero",
            });
        }
        if self.score_per_tick == 0 {
            return Err(TuningError::Invalid {
                field: "score_per_tick",
                reason: "must be non-zero",
            });
        }
        if self.spawn_floor_ms == 0 {
            return Err(TuningError::Invalid {
                field: "spawn_floor_ms",
                reason: "must be non-zero",
            });
        }
        if self.player_height > self.scene_height || self.obstacle_height > self.scene_height {
            return Err(TuningError::Invalid {
                field: "scene_height",
                reason: "player and obstacles must fit inside the scene",
            });
        }
        if !(self.player_start_x.is_finite() && self.player_start_y.is_finite()) {
            return Err(TuningError::Invalid {
                field: "player_start",
                reason: "must be finite",
            });
        }
        if self.player_start_y + self.player_height > self.ground_level() {
            return Err(TuningError::Invalid {
                field: "player_start_y",
                reason: "player must start at or above the ground",
            });
        }

        Ok(())
    }
}
