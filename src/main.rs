//! Mini Golf entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use mini_golf::consts::*;
    use mini_golf::platform::{InputEvent, canvas_point};
    use mini_golf::render::{WebCanvas, draw_frame};
    use mini_golf::sim::{GameEvent, GameState, TickInput, tick};
    use mini_golf::{Settings, default_levels};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        canvas: WebCanvas,
        /// Events queued since the last tick
        input: TickInput,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        fn new(settings: Settings, canvas: WebCanvas) -> Self {
            Self {
                state: GameState::new(default_levels(), settings.physics.clone()),
                settings,
                canvas,
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Run as many fixed ticks as the elapsed time covers
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.25);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Queued input is consumed by the first tick only
                self.input.clear();
                self.log_events();
            }

            // Drop time the substep cap couldn't cover
            self.accumulator = self.accumulator.min(MAX_SUBSTEPS as f32 * SIM_DT);
        }

        fn log_events(&self) {
            for event in &self.state.events {
                match event {
                    GameEvent::Won { total_shots } => {
                        log::info!("You win! {} shots", total_shots)
                    }
                    GameEvent::BallReset => log::info!("Out of shots, ball reset"),
                    _ => log::debug!("{:?}", event),
                }
            }
        }

        fn render(&mut self) {
            if self.state.paused {
                return;
            }
            draw_frame(&self.state, &mut self.canvas, self.settings.show_aim_line);
        }
    }

    /// Client coordinates -> logical canvas coordinates
    fn pointer_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        canvas_point(
            Vec2::new(event.client_x() as f32, event.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
            Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
        )
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Mini Golf starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(WORLD_WIDTH as u32);
        canvas.set_height(WORLD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(settings, WebCanvas::new(ctx))));

        setup_input_handlers(&canvas, game.clone())?;
        setup_auto_pause(game.clone())?;

        request_animation_frame(game)?;

        log::info!("Mini Golf running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Press: only counts if it lands on the ball, which the tick checks
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let at = pointer_pos(&canvas, &event);
                game.borrow_mut().input.push(InputEvent::DragStart(at));
            });
            window.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Move: tracked on the window so a drag can leave the canvas
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let at = pointer_pos(&canvas, &event);
                game.borrow_mut().input.push(InputEvent::DragMove(at));
            });
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Release
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.push(InputEvent::DragEnd);
            });
            window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "r" | "R") {
                    game.borrow_mut().input.push(InputEvent::Restart);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        if !game.borrow().settings.auto_pause_on_blur {
            return Ok(());
        }
        let window = web_sys::window().ok_or("no window")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.push(InputEvent::Blur);
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.input.push(InputEvent::Focus);
                // Don't count the time spent away
                g.last_time = 0.0;
                g.accumulator = 0.0;
            });
            window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        if let Err(e) = request_animation_frame(game) {
            log::error!("Game loop stopped: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser enters through wasm_main
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Mini Golf (native) starting...");
    log::info!("Native mode plays the course headlessly - build for wasm32 to play in a browser");

    let levels = match std::env::args().nth(1) {
        Some(path) => match load_levels_file(&path) {
            Ok(levels) => levels,
            Err(e) => {
                log::error!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => mini_golf::default_levels(),
    };

    autoplay(levels, mini_golf::Settings::load());
}

#[cfg(not(target_arch = "wasm32"))]
fn load_levels_file(path: &str) -> Result<Vec<mini_golf::LevelSpec>, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(mini_golf::parse_levels(&json)?)
}

/// Play every level with the scripted putter and report the result
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(levels: Vec<mini_golf::LevelSpec>, settings: mini_golf::Settings) {
    use mini_golf::consts::{SIM_DT, TICK_HZ};
    use mini_golf::platform::putt_input;
    use mini_golf::render::{RecordingCanvas, draw_frame};
    use mini_golf::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    /// Give up after two minutes of game time
    const MAX_TICKS: u64 = 120 * TICK_HZ as u64;

    let mut state = GameState::new(levels, settings.physics.clone());
    let mut canvas = RecordingCanvas::new();

    while state.phase != GamePhase::Won && state.time_ticks < MAX_TICKS {
        let input = if state.phase == GamePhase::Playing && state.level.ball.stopped {
            let hole = state.level.hole;
            putt_input(&state.level.ball, hole.center, hole.radius, &state.config)
        } else {
            TickInput::default()
        };

        tick(&mut state, &input, SIM_DT);
        draw_frame(&state, &mut canvas, settings.show_aim_line);
        canvas.commands.clear();

        for event in &state.events {
            if let GameEvent::Collision { contacts } = event {
                log::debug!("{} contact(s) at tick {}", contacts, state.time_ticks);
            }
        }
    }

    if state.phase == GamePhase::Won {
        log::info!(
            "Course cleared: {} levels, {} shots, {:.1}s of play",
            state.level_count(),
            state.total_shots,
            state.elapsed_secs
        );
    } else {
        log::warn!(
            "Gave up on level {}/{} after {} ticks",
            state.level_index + 1,
            state.level_count(),
            state.time_ticks
        );
    }
}
