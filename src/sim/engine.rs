//! Game engine: the single owner of a run's state
//!
//! Hosts drive it with two cadences (one `step` per animation frame, and
//! `spawn_obstacle` from a level-dependent timer) and read it back through
//! `snapshot`. The engine owns no timers of its own.

use super::spawn;
use super::state::{GamePhase, GameState};
use super::tick::{TickInput, tick};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    tuning: Tuning,
    /// Set by `request_jump`, consumed by the next `step`
    pending_jump: bool,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameEngine {
    /// Engine in the `NotStarted` phase
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: GameState::new(&tuning, GamePhase::NotStarted),
            tuning,
            pending_jump: false,
        }
    }

    /// Begin a fresh run, discarding everything from the previous one
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::GameOver {
            log::info!(
                "Restarting (previous run: score {}, level {})",
                self.state.score,
                self.state.level
            );
        } else {
            log::info!("Starting run");
        }
        self.state = GameState::new(&self.tuning, GamePhase::Running);
        self.pending_jump = false;
    }

    /// Queue a jump for the next tick; ignored unless running
    pub fn request_jump(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.pending_jump = true;
        }
    }

    /// Advance one logical tick
    pub fn step(&mut self) {
        let input = TickInput {
            jump: std::mem::take(&mut self.pending_jump),
        };
        tick(&mut self.state, &input, &self.tuning);
    }

    /// Append an obstacle at the spawn position; ignored unless running
    pub fn spawn_obstacle(&mut self) {
        if self.state.phase == GamePhase::Running {
            spawn::spawn_obstacle(&mut self.state, &self.tuning);
        }
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn current_level(&self) -> u32 {
        self.state.level
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Delay the host should wait before the next `spawn_obstacle`
    pub fn next_spawn_interval_ms(&self) -> u32 {
        spawn::spawn_interval_ms(self.current_level(), &self.tuning)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
