//! Obstacle spawn placement and cadence policy
//!
//! The simulation only knows how to append an obstacle; when to do it is
//! decided by the host from [`spawn_interval_ms`].

use super::geom::Rect;
use super::state::{GameState, Obstacle};
use crate::tuning::Tuning;

/// Append a new obstacle at the right edge of the scene, resting on the ground
pub fn spawn_obstacle(state: &mut GameState, tuning: &Tuning) {
    let rect = Rect::new(
        tuning.scene_width,
        tuning.ground_level() - tuning.obstacle_height,
        tuning.obstacle_width,
        tuning.obstacle_height,
    );
    state.obstacles.push(Obstacle::new(rect));
    log::debug!(
        "Spawned obstacle at x={} ({} active)",
        rect.x,
        state.obstacles.len()
    );
}

/// Delay before the next spawn at `level`, never below the tuning floor
pub fn spawn_interval_ms(level: u32, tuning: &Tuning) -> u32 {
    tuning
        .spawn_base_interval_ms
        .saturating_sub(level.saturating_mul(tuning.spawn_decay_ms))
        .max(tuning.spawn_floor_ms)
}
