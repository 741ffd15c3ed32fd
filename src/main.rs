//! Hydration Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use hydration_runner::driver::{Autopilot, SpawnSchedule};
    use hydration_runner::sim::{GameEngine, GamePhase, GameState};
    use hydration_runner::{Settings, Tuning};

    const TUNING_STORAGE_KEY: &str = "hydration_runner_tuning";

    /// Game instance holding all state
    struct Game {
        engine: GameEngine,
        schedule: SpawnSchedule,
        settings: Settings,
        autopilot: Option<Autopilot>,
        ctx: CanvasRenderingContext2d,
        last_time: Option<f64>,
        started: bool,
    }

    impl Game {
        fn new(tuning: Tuning, settings: Settings, ctx: CanvasRenderingContext2d) -> Self {
            let autopilot = if settings.autopilot {
                Autopilot::for_tuning(&tuning)
            } else {
                None
            };
            Self {
                engine: GameEngine::new(tuning),
                schedule: SpawnSchedule::new(),
                settings,
                autopilot,
                ctx,
                last_time: None,
                started: false,
            }
        }

        fn start(&mut self) {
            self.engine.start();
            self.schedule.reset();
            self.started = true;
        }

        /// One animation frame: input, one tick, spawn timer
        fn update(&mut self, time: f64) {
            let dt = self.last_time.map_or(0.0, |last| time - last);
            self.last_time = Some(time);

            if self.engine.phase() != GamePhase::Running {
                return;
            }
            if let Some(pilot) = self.autopilot {
                if pilot.should_jump(&self.engine.snapshot(), self.engine.tuning()) {
                    self.engine.request_jump();
                }
            }
            self.engine.step();
            if self.engine.phase() == GamePhase::Running {
                self.schedule.pump(&mut self.engine, dt);
            }
        }

        /// Render the current frame
        fn render(&self) {
            let state = self.engine.snapshot();
            let tuning = self.engine.tuning();
            let ctx = &self.ctx;
            let (w, h) = (f64::from(tuning.scene_width), f64::from(tuning.scene_height));

            ctx.clear_rect(0.0, 0.0, w, h);

            ctx.set_fill_style_str("#3B82F6");
            let p = state.player.rect;
            ctx.fill_rect(p.x.into(), p.y.into(), p.width.into(), p.height.into());

            ctx.set_fill_style_str("#EF4444");
            for obstacle in &state.obstacles {
                let r = obstacle.rect;
                ctx.fill_rect(r.x.into(), r.y.into(), r.width.into(), r.height.into());
            }

            if self.settings.show_hud {
                ctx.set_fill_style_str("#000000");
                ctx.set_font("20px Arial");
                let _ = ctx.fill_text(&format!("Score: {}", state.score), 10.0, 30.0);
                let _ = ctx.fill_text(&format!("Level: {}", state.level), w - 100.0, 30.0);
            }

            if state.phase.awaiting_start() {
                self.render_overlay(&state, w, h);
            }
        }

        fn render_overlay(&self, state: &GameState, w: f64, h: f64) {
            let ctx = &self.ctx;
            ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
            ctx.fill_rect(0.0, 0.0, w, h);

            ctx.set_fill_style_str("#FFFFFF");
            ctx.set_text_align("center");
            if state.phase == GamePhase::GameOver {
                ctx.set_font("bold 28px Arial");
                let _ = ctx.fill_text("Game Over!", w / 2.0, h / 2.0 - 40.0);
                ctx.set_font("20px Arial");
                let _ = ctx.fill_text(&format!("Score: {}", state.score), w / 2.0, h / 2.0);
                let _ = ctx.fill_text(&format!("Level: {}", state.level), w / 2.0, h / 2.0 + 28.0);
            } else {
                ctx.set_font("20px Arial");
                let _ = ctx.fill_text("Press SPACE to jump", w / 2.0, h / 2.0);
            }
            ctx.set_text_align("start");
        }

        fn start_label(&self) -> &'static str {
            if self.started { "Play Again" } else { "Start Game" }
        }
    }

    fn load_tuning() -> Tuning {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(TUNING_STORAGE_KEY).ok().flatten());

        match stored.map(|json| Tuning::from_json(&json)) {
            Some(Ok(tuning)) => {
                log::info!("Loaded tuning override from LocalStorage");
                tuning
            }
            Some(Err(e)) => {
                log::warn!("Ignoring stored tuning: {}", e);
                Tuning::default()
            }
            None => Tuning::default(),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hydration Runner starting...");

        let window = web_sys::window().expect("No window");
        let document = window.document().expect("No document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("No canvas element")
            .dyn_into()
            .expect("Element is not a canvas");

        let tuning = load_tuning();
        canvas.set_width(tuning.scene_width as u32);
        canvas.set_height(tuning.scene_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("No 2d context")
            .dyn_into()
            .expect("Not a 2d context");

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(tuning, settings, ctx)));

        setup_input_handlers(game.clone());
        setup_start_button(game.clone());
        request_animation_frame(game);

        log::info!("Hydration Runner running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("No window");
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            if g.settings.is_jump_key(&event.code()) {
                event.prevent_default();
                g.engine.request_jump();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("No document");
        let Some(button) = document.get_element_by_id("start-button") else {
            log::warn!("No #start-button element, runs cannot be started");
            return;
        };

        let label_target = button.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            let mut g = game.borrow_mut();
            g.start();
            label_target.set_text_content(Some(g.start_label()));
            let _ = label_target.set_attribute("hidden", "");
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("No window");
        let closure = Closure::once_into_js(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.unchecked_ref());
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            let was_running = g.engine.phase() == GamePhase::Running;
            g.update(time);
            g.render();

            // Bring the button back once the run ends
            if was_running && g.engine.phase() == GamePhase::GameOver {
                if let Some(button) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("start-button"))
                {
                    button.set_text_content(Some(g.start_label()));
                    let _ = button.remove_attribute("hidden");
                }
            }
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hydration_runner::Tuning;
    use hydration_runner::driver::HeadlessRun;

    env_logger::init();
    log::info!("Hydration Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` to play");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::load_file(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                match std::error::Error::source(&e) {
                    Some(source) => log::error!("{}: {}", e, source),
                    None => log::error!("{}", e),
                }
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    const DEMO_FRAMES: u64 = 60 * 60 * 2;
    let mut run = HeadlessRun::new(tuning).with_autopilot();
    let state = run.run(DEMO_FRAMES);

    println!(
        "Run finished: {:?} after {} ticks, score {}, level {}",
        state.phase, state.time_ticks, state.score, state.level
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
