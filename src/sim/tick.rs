//! Fixed logical tick
//!
//! One call advances a running game by exactly one tick, independent of
//! wall-clock time. The tick is atomic: either every effect is committed
//! or, on collision, only the phase changes.

use super::collision::first_collision;
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Apply the jump impulse before gravity
    pub jump: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Player vertical motion
    let mut velocity = state.player.vertical_velocity;
    if input.jump {
        velocity = tuning.jump_velocity;
    }
    velocity += tuning.gravity;
    let mut player_rect = state.player.rect.with_y(state.player.rect.y + velocity);

    // Landing kills residual velocity
    let ground = tuning.ground_level();
    if player_rect.bottom() > ground {
        player_rect = player_rect.with_y(ground - player_rect.height);
        velocity = 0.0;
    }

    // Scroll obstacles, dropping those fully past the left edge
    let before = state.obstacles.len();
    let obstacles: Vec<_> = state
        .obstacles
        .iter()
        .map(|obstacle| {
            let mut moved = *obstacle;
            moved.rect = moved.rect.shifted_x(-tuning.obstacle_speed);
            moved
        })
        .filter(|obstacle| !obstacle.is_off_screen())
        .collect();

    if let Some(index) = first_collision(&player_rect, &obstacles) {
        log::info!(
            "Collision with obstacle at x={:.1}: game over (score {}, level {})",
            obstacles[index].rect.x,
            state.score,
            state.level
        );
        state.phase = GamePhase::GameOver;
        return;
    }

    let removed = before - obstacles.len();
    if removed > 0 {
        log::debug!("Removed {} off-screen obstacle(s)", removed);
    }

    let previous_level = state.level;
    state.player.rect = player_rect;
    state.player.vertical_velocity = velocity;
    state.obstacles = obstacles;
    state.set_score(state.score.saturating_add(tuning.score_per_tick), tuning);
    state.time_ticks += 1;

    if state.level != previous_level {
        log::info!("Level up: {} (score {})", state.level, state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geom::Rect;
    use crate::sim::state::{Obstacle, level_for_score};

    fn running(tuning: &Tuning) -> GameState {
        GameState::new(tuning, GamePhase::Running)
    }

    #[test]
    fn test_not_running_is_untouched() {
        let tuning = Tuning::default();
        for phase in [GamePhase::NotStarted, GamePhase::GameOver] {
            let mut state = GameState::new(&tuning, phase);
            let before = state.clone();
            tick(&mut state, &TickInput { jump: true }, &tuning);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_gravity_accumulates() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.player.vertical_velocity, 0.5);
        assert_eq!(state.player.rect.y, 150.5);

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.player.vertical_velocity, 1.0);
        assert_eq!(state.player.rect.y, 151.5);
    }

    #[test]
    fn test_landing_clamps_and_zeroes_velocity() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.player.rect.y = 368.0;
        state.player.vertical_velocity = 6.0;

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.player.rect.bottom(), 400.0);
        assert_eq!(state.player.vertical_velocity, 0.0);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.player.rect.y = 370.0;

        tick(&mut state, &TickInput { jump: true }, &tuning);
        assert_eq!(state.player.vertical_velocity, -9.5);
        assert_eq!(state.player.rect.y, 360.5);
    }

    #[test]
    fn test_score_and_ticks_advance() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        assert_eq!(state.score, 10);
        assert_eq!(state.time_ticks, 10);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_score_saturates_instead_of_overflowing() {
        let tuning = Tuning {
            score_per_tick: u64::MAX,
            ..Tuning::default()
        };
        let mut state = running(&tuning);
        tick(&mut state, &TickInput::default(), &tuning);
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, u64::MAX);
        assert_eq!(state.level, level_for_score(u64::MAX, tuning.points_per_level));
    }

    #[test]
    fn test_level_up_at_threshold() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.set_score(999, &tuning);
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.score, 1000);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_collision_freezes_previous_frame() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.player.rect.y = 370.0;
        state.set_score(42, &tuning);
        // After moving 5 left spans [70, 90], overlapping the player's [50, 80]
        state
            .obstacles
            .push(Obstacle::new(Rect::new(75.0, 350.0, 20.0, 50.0)));
        let before = state.clone();

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 42);
        assert_eq!(state.level, 1);
        assert_eq!(state.obstacles, before.obstacles);
        assert_eq!(state.player, before.player);
    }

    #[test]
    fn test_touching_edge_does_not_collide() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state.player.rect.y = 370.0;
        // After the tick the obstacle's left edge sits exactly on the player's right edge
        state
            .obstacles
            .push(Obstacle::new(Rect::new(85.0, 350.0, 20.0, 50.0)));
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.obstacles[0].rect.x, 80.0);
    }

    #[test]
    fn test_off_screen_obstacle_removed() {
        let tuning = Tuning::default();
        let mut state = running(&tuning);
        state
            .obstacles
            .push(Obstacle::new(Rect::new(-16.0, 350.0, 20.0, 50.0)));
        state
            .obstacles
            .push(Obstacle::new(Rect::new(400.0, 350.0, 20.0, 50.0)));

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].rect.x, 395.0);
    }
}
