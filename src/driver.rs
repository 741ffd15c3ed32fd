//! Host-side collaborators
//!
//! Nothing here is part of the simulation: these are the timer, input
//! and loop pieces a front-end wires around a [`GameEngine`].

use crate::consts::FRAME_MS;
use crate::sim::{GameEngine, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Level-driven obstacle spawn timer
///
/// Accumulates elapsed time and fires whenever the engine's current spawn
/// interval has passed. The first spawn comes one full interval after a reset.
/// Every spawn lands on the same rectangle, so at most one fires per update.
#[derive(Debug, Clone, Default)]
pub struct SpawnSchedule {
    elapsed_ms: f64,
}

impl SpawnSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the timer (call alongside `GameEngine::start`)
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    /// Add elapsed time and report whether a spawn is due
    pub fn advance(&mut self, dt_ms: f64, interval_ms: u32) -> bool {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }
        let interval = f64::from(interval_ms.max(1));
        if self.elapsed_ms < interval {
            return false;
        }

        self.elapsed_ms -= interval;
        // Drop any backlog left after a long stall
        if self.elapsed_ms >= interval {
            log::warn!("Spawn timer fell behind, dropping {:.0} ms", self.elapsed_ms);
            self.elapsed_ms = 0.0;
        }
        true
    }

    /// Advance the timer and spawn into `engine` at its current cadence
    pub fn pump(&mut self, engine: &mut GameEngine, dt_ms: f64) -> bool {
        let due = self.advance(dt_ms, engine.next_spawn_interval_ms());
        if due {
            engine.spawn_obstacle();
        }
        due
    }
}

/// Demo player that jumps over the next obstacle when the timing is right
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Smallest gap (obstacle left edge to player right edge) a jump still clears
    pub min_gap: f32,
    /// Largest gap a jump still clears
    pub max_gap: f32,
}

impl Autopilot {
    /// Derive the jump window from the tuning by simulating one grounded jump
    ///
    /// Returns `None` when a jump can never clear an obstacle.
    pub fn for_tuning(tuning: &Tuning) -> Option<Self> {
        let ground = tuning.ground_level();
        let obstacle_top = ground - tuning.obstacle_height;

        let mut state = GameState::new(tuning, GamePhase::Running);
        state.player.rect = state.player.rect.with_y(ground - tuning.player_height);

        // Ticks (1-based) during which the player's bottom is at or above the obstacle top
        let mut clear: Option<(u32, u32)> = None;
        let mut t = 0u32;
        loop {
            t += 1;
            tick(&mut state, &TickInput { jump: t == 1 }, tuning);
            if state.player.rect.bottom() <= obstacle_top {
                clear = Some(match clear {
                    Some((first, _)) => (first, t),
                    None => (t, t),
                });
            }
            if state.player.is_grounded(ground) || t > 10_000 {
                break;
            }
        }

        let (first, last) = clear?;
        let speed = tuning.obstacle_speed;
        let span = tuning.obstacle_width + tuning.player_width;
        let min_gap = speed * (first - 1) as f32;
        let max_gap = speed * (last + 1) as f32 - span;
        (min_gap <= max_gap).then_some(Self { min_gap, max_gap })
    }

    /// Whether to request a jump for the upcoming tick
    pub fn should_jump(&self, state: &GameState, tuning: &Tuning) -> bool {
        if state.phase != GamePhase::Running || !state.player.is_grounded(tuning.ground_level()) {
            return false;
        }
        let player = state.player.rect;
        state
            .obstacles
            .iter()
            .find(|obstacle| obstacle.rect.right() > player.left())
            .map(|obstacle| obstacle.rect.left() - player.right())
            .is_some_and(|gap| gap >= self.min_gap && gap <= self.max_gap)
    }
}

/// Fixed-frame loop with no window, used by the native binary and tests
#[derive(Debug, Clone)]
pub struct HeadlessRun {
    engine: GameEngine,
    schedule: SpawnSchedule,
    autopilot: Option<Autopilot>,
    frame_ms: f64,
}

impl HeadlessRun {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            engine: GameEngine::new(tuning),
            schedule: SpawnSchedule::new(),
            autopilot: None,
            frame_ms: FRAME_MS,
        }
    }

    /// Let the autopilot play, if the tuning allows clearing obstacles at all
    pub fn with_autopilot(mut self) -> Self {
        self.autopilot = Autopilot::for_tuning(self.engine.tuning());
        match self.autopilot {
            Some(pilot) => log::info!(
                "Autopilot jump window: {:.1}..{:.1}",
                pilot.min_gap,
                pilot.max_gap
            ),
            None => log::warn!("Jump can never clear an obstacle, autopilot disabled"),
        }
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Start (or restart) a run
    pub fn start(&mut self) {
        self.engine.start();
        self.schedule.reset();
    }

    /// One animation frame: input, tick, then the spawn timer
    pub fn frame(&mut self) {
        if let Some(pilot) = self.autopilot {
            let state = self.engine.snapshot();
            if pilot.should_jump(&state, self.engine.tuning()) {
                self.engine.request_jump();
            }
        }
        self.engine.step();
        if self.engine.phase() == GamePhase::Running {
            self.schedule.pump(&mut self.engine, self.frame_ms);
        }
    }

    /// Start a run and play until game over or `max_frames`, returning the final state
    pub fn run(&mut self, max_frames: u64) -> GameState {
        self.start();
        for _ in 0..max_frames {
            self.frame();
            if self.engine.phase() == GamePhase::GameOver {
                break;
            }
        }
        self.engine.snapshot()
    }
}
