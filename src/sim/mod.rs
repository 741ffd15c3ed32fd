//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical tick per `step`, never wall-clock time
//! - Obstacles kept in spawn order (oldest first)
//! - No rendering, timer or platform dependencies

pub mod collision;
pub mod engine;
pub mod geom;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{first_collision, rects_overlap};
pub use engine::GameEngine;
pub use geom::Rect;
pub use spawn::{spawn_interval_ms, spawn_obstacle};
pub use state::{GamePhase, GameState, Obstacle, Player, level_for_score};
pub use tick::{TickInput, tick};
