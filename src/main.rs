//! Tank Arena entry point
//!
//! Native builds run a headless session with a scripted pilot; web builds
//! attach to a `<canvas id="gameCanvas">` and read the keyboard.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use tank_arena::Game;
    use tank_arena::Tuning;
    use tank_arena::platform::{InputSource, KeyState, PerformanceClock};
    use tank_arena::renderer::CanvasRenderer;
    use tank_arena::sim::{SeededRandom, TickInput};

    /// Key state shared between DOM listeners and the game
    #[derive(Clone, Default)]
    struct SharedKeys(Rc<RefCell<KeyState>>);

    impl InputSource for SharedKeys {
        fn poll(&mut self) -> TickInput {
            self.0.borrow_mut().poll()
        }
    }

    type WebGame = Game<SharedKeys, PerformanceClock, SeededRandom, CanvasRenderer>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Tank Arena starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let tuning = Tuning::default();
        let renderer = CanvasRenderer::new(
            &canvas,
            tuning.arena_width as u32,
            tuning.arena_height as u32,
        )?;
        let clock = PerformanceClock::new().ok_or("no performance clock")?;
        let seed = js_sys::Date::now() as u64;
        let keys = SharedKeys::default();

        setup_input_handlers(&window, keys.clone())?;

        let game = Rc::new(RefCell::new(Game::new(
            tuning,
            keys,
            clock,
            SeededRandom::new(seed),
            renderer,
        )));
        log::info!("Game initialized with seed: {}", seed);

        request_animation_frame(game);
        log::info!("Tank Arena running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, keys: SharedKeys) -> Result<(), JsValue> {
        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if keys.0.borrow_mut().key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                keys.0.borrow_mut().key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        // Keys released while unfocused never send keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                keys.0.borrow_mut().clear();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>) {
        {
            let mut g = game.borrow_mut();
            g.tick();
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::io;
    use std::time::{SystemTime, UNIX_EPOCH};

    use tank_arena::consts::FRAME_MS;
    use tank_arena::platform::{FrameClock, InputSource};
    use tank_arena::renderer::{LogSink, RenderSink};
    use tank_arena::sim::{SeededRandom, TickInput};
    use tank_arena::{Game, Tuning};

    /// Frames between strafe direction changes
    const STRAFE_PERIOD: u64 = 120;

    /// Command line options
    #[derive(Debug, Clone)]
    pub struct Options {
        pub seed: u64,
        pub frames: u64,
        pub tuning: Option<String>,
        pub json: bool,
    }

    impl Options {
        pub fn parse(mut args: impl Iterator<Item = String>) -> Self {
            let mut opts = Self {
                seed: SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0),
                frames: 60 * 60,
                tuning: None,
                json: false,
            };

            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--seed" => match args.next().map(|v| v.parse()) {
                        Some(Ok(seed)) => opts.seed = seed,
                        _ => log::warn!("--seed expects an integer, keeping {}", opts.seed),
                    },
                    "--frames" => match args.next().map(|v| v.parse()) {
                        Some(Ok(frames)) => opts.frames = frames,
                        _ => log::warn!("--frames expects an integer, keeping {}", opts.frames),
                    },
                    "--tuning" => opts.tuning = args.next(),
                    "--json" => opts.json = true,
                    other => log::warn!("Ignoring unknown argument: {}", other),
                }
            }
            opts
        }
    }

    /// Scripted player: sweeps the turret while firing and strafing
    #[derive(Debug, Default)]
    pub struct SweepPilot {
        frame: u64,
    }

    impl InputSource for SweepPilot {
        fn poll(&mut self) -> TickInput {
            let going_up = (self.frame / STRAFE_PERIOD) % 2 == 0;
            self.frame += 1;
            TickInput {
                up: going_up,
                down: !going_up,
                rotate_right: true,
                fire: true,
                ..Default::default()
            }
        }
    }

    fn run_with<S: RenderSink>(opts: &Options, tuning: Tuning, sink: S) -> u64 {
        let mut game = Game::new(
            tuning,
            SweepPilot::default(),
            FrameClock::new(FRAME_MS),
            SeededRandom::new(opts.seed),
            sink,
        );

        for frame in 0..opts.frames {
            game.tick();
            game.render();
            if game.is_game_over() {
                log::info!("Player destroyed on frame {}", frame);
                break;
            }
            game.clock_mut().advance();
        }

        game.state().score
    }

    pub fn run(opts: Options) {
        let tuning = match &opts.tuning {
            Some(path) => Tuning::load(path),
            None => Tuning::default(),
        };
        log::info!("Seed {} for {} frames", opts.seed, opts.frames);

        let score = if opts.json {
            run_with(&opts, tuning, LogSink::with_json(io::stdout()))
        } else {
            run_with(&opts, tuning, LogSink::new())
        };

        if !opts.json {
            println!("Final score: {}", score);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tank Arena (native, headless) starting...");

    let opts = headless::Options::parse(std::env::args().skip(1));
    headless::run(opts);
}
