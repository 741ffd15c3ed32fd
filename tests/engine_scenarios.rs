//! End-to-end engine behavior through the public command/query surface

use hydration_runner::sim::{GameEngine, GamePhase, Rect};
use hydration_runner::Tuning;
use proptest::prelude::*;

fn started() -> GameEngine {
    let mut engine = GameEngine::default();
    engine.start();
    engine
}

#[test]
fn fresh_run_rests_on_ground() {
    let mut engine = started();
    for _ in 0..999 {
        engine.step();
    }
    let state = engine.snapshot();
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score, 999);
    assert_eq!(state.level, 1);
    assert_eq!(state.player.rect.bottom(), 400.0);
    assert_eq!(state.player.vertical_velocity, 0.0);
}

#[test]
fn obstacle_removal_tick_is_deterministic() {
    // Player lifted out of reach so the obstacle never collides
    let tuning = Tuning {
        player_start_y: -1000.0,
        gravity: 0.001,
        ..Tuning::default()
    };
    let mut engine = GameEngine::new(tuning);
    engine.start();
    engine.spawn_obstacle();

    for step in 1..=163u32 {
        engine.step();
        let state = engine.snapshot();
        assert_eq!(state.obstacles.len(), 1, "removed early at step {step}");
        assert_eq!(state.obstacles[0].rect.x, 800.0 - 5.0 * step as f32);
    }
    // x = 800 - 163 * 5 = -15, right edge 5
    assert_eq!(engine.snapshot().obstacles[0].rect.x, -15.0);

    engine.step();
    // x = -20, right edge 0: removed
    assert!(engine.snapshot().obstacles.is_empty());
    assert_eq!(engine.phase(), GamePhase::Running);
}

#[test]
fn jump_moves_player_up_on_the_same_tick() {
    let mut engine = started();
    for _ in 0..60 {
        engine.step();
    }
    let before = engine.snapshot();
    assert_eq!(before.player.rect.bottom(), 400.0);

    engine.request_jump();
    engine.step();
    let after = engine.snapshot();
    assert!(after.player.vertical_velocity < 0.0);
    assert_eq!(after.player.vertical_velocity, -10.0 + 0.5);
    assert!(after.player.rect.y < before.player.rect.y);
}

#[test]
fn jump_outside_run_is_ignored() {
    let mut engine = GameEngine::default();
    engine.request_jump();
    assert_eq!(engine.phase(), GamePhase::NotStarted);

    let mut engine = lose(started());
    let frozen = engine.snapshot();
    engine.request_jump();
    engine.step();
    engine.spawn_obstacle();
    assert_eq!(engine.snapshot(), frozen);
}

/// Stand still until the first obstacle hits
fn lose(mut engine: GameEngine) -> GameEngine {
    for _ in 0..100 {
        engine.step();
    }
    engine.spawn_obstacle();
    for _ in 0..1000 {
        engine.step();
        if engine.phase() == GamePhase::GameOver {
            break;
        }
    }
    assert_eq!(engine.phase(), GamePhase::GameOver);
    engine
}

#[test]
fn game_over_freezes_score() {
    let mut engine = lose(started());
    let frozen = engine.snapshot();
    assert!(frozen.score > 100);
    for _ in 0..10 {
        engine.step();
    }
    assert_eq!(engine.snapshot().score, frozen.score);
    assert_eq!(engine.current_level(), frozen.level);
}

#[test]
fn restart_resets_everything() {
    let mut engine = lose(started());
    engine.start();
    let state = engine.snapshot();
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.level, 1);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.player.rect, Rect::new(50.0, 150.0, 30.0, 30.0));
    assert_eq!(state.player.vertical_velocity, 0.0);
    assert_eq!(state.time_ticks, 0);
}

#[test]
fn snapshot_serializes_for_hosts() {
    let mut engine = started();
    engine.spawn_obstacle();
    engine.step();
    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    assert!(json.contains("\"phase\":\"Running\""));
    assert!(json.contains("\"score\":1"));
}

proptest! {
    #[test]
    fn prop_player_never_below_ground(jumps in proptest::collection::vec(any::<bool>(), 1..400)) {
        let mut engine = started();
        for jump in jumps {
            if jump {
                engine.request_jump();
            }
            engine.step();
            prop_assert!(engine.snapshot().player.rect.bottom() <= 400.0);
        }
    }

    #[test]
    fn prop_score_and_level_invariants(
        actions in proptest::collection::vec(0u8..4, 1..600),
    ) {
        let mut engine = started();
        let mut previous_score = 0;
        for action in actions {
            match action {
                0 => engine.request_jump(),
                1 => engine.spawn_obstacle(),
                _ => {}
            }
            let was_running = engine.phase() == GamePhase::Running;
            engine.step();
            let state = engine.snapshot();

            prop_assert_eq!(state.level as u64, state.score / 1000 + 1);
            if was_running && state.phase == GamePhase::Running {
                prop_assert_eq!(state.score, previous_score + 1);
            } else {
                prop_assert_eq!(state.score, previous_score);
            }
            previous_score = state.score;

            for obstacle in &state.obstacles {
                prop_assert!(obstacle.rect.right() > 0.0);
            }
        }
    }
}
