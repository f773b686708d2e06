//! Bike Jump entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Event, EventTarget, HtmlCanvasElement, KeyboardEvent};

    use bike_jump::Tuning;
    use bike_jump::renderer::CanvasRenderer;
    use bike_jump::sim::{GameState, Key, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
    }

    impl Game {
        /// Update then render, once per animation frame
        fn frame(&mut self) {
            tick(&mut self.state);
            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Bike Jump starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no #game canvas")?
            .dyn_into()?;

        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let tuning = Tuning::from_override(canvas.get_attribute("data-tuning").as_deref());

        let renderer = CanvasRenderer::new(&canvas)?;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(width, height, tuning),
            renderer,
        }));

        log::info!("Canvas {}x{}", width, height);

        setup_input_handlers(&document, game.clone());
        setup_restart_button(&document, &canvas, game.clone());
        setup_auto_pause(&window, &document, game.clone());

        // Start game loop
        request_animation_frame(game)?;

        log::info!("Bike Jump running!");
        Ok(())
    }

    /// Register a listener for the lifetime of the page
    fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to register {} listener: {:?}", kind, e);
        }
        closure.forget();
    }

    fn keyboard_key(event: &Event) -> Option<(&KeyboardEvent, Key)> {
        let event = event.dyn_ref::<KeyboardEvent>()?;
        let key = Key::from_event(&event.key(), &event.code())?;
        Some((event, key))
    }

    fn setup_input_handlers(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            listen(document, "keydown", move |event: Event| {
                if let Some((event, key)) = keyboard_key(&event) {
                    let response = game.borrow_mut().state.key_down(key, event.repeat());
                    if response.prevent_default {
                        event.prevent_default();
                    }
                }
            });
        }

        listen(document, "keyup", move |event: Event| {
            if let Some((event, key)) = keyboard_key(&event) {
                let response = game.borrow_mut().state.key_up(key);
                if response.prevent_default {
                    event.prevent_default();
                }
            }
        });
    }

    fn setup_restart_button(
        document: &web_sys::Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        let canvas = canvas.clone();
        match document.get_element_by_id("btn-restart") {
            Some(btn) => listen(&btn, "click", move |_event: Event| {
                let (width, height) = (canvas.width() as f32, canvas.height() as f32);
                let mut g = game.borrow_mut();
                g.state.resize(width, height);
                g.state.reset();
                log::info!("Game restarted on {}x{} canvas", width, height);
            }),
            None => log::warn!("No #btn-restart element, restart control disabled"),
        }
    }

    fn setup_auto_pause(
        window: &web_sys::Window,
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) {
        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            listen(document, "visibilitychange", move |_event: Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.state.running {
                        g.state.suspend();
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
        }

        // Window blur (click outside)
        listen(window, "blur", move |_event: Event| {
            let mut g = game.borrow_mut();
            if g.state.running {
                g.state.suspend();
                log::info!("Auto-paused (window blur)");
            }
        });
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();

        if let Err(e) = request_animation_frame(game) {
            log::error!("Game loop stopped: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bike Jump (native) starting...");
    log::info!("Native mode runs a headless trace - use `trunk serve` for the web version");

    let state = trace::run();
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

/// Scripted headless run: hold right, jump once, release
#[cfg(not(target_arch = "wasm32"))]
mod trace {
    use bike_jump::Tuning;
    use bike_jump::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
    use bike_jump::sim::{GameState, Key, tick};

    const FRAMES: u32 = 180;
    const RELEASE_FRAME: u32 = 120;
    const JUMP_FRAME: u32 = 10;

    pub fn run() -> GameState {
        let mut state = GameState::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, Tuning::default());
        let mut jumps = 0;
        let mut landings = 0;

        state.key_down(Key::Right, false);
        for frame in 0..FRAMES {
            if frame == JUMP_FRAME && state.key_down(Key::Jump, false).jumped {
                jumps += 1;
            }
            if frame == JUMP_FRAME + 1 {
                state.key_up(Key::Jump);
            }
            if frame == RELEASE_FRAME {
                state.key_up(Key::Right);
            }

            let was_grounded = state.actor.grounded;
            tick(&mut state);
            if state.actor.grounded && !was_grounded {
                landings += 1;
                log::debug!("landed at frame {} x={}", state.frame, state.actor.pos.x);
            }
        }

        log::info!(
            "Trace done: {} frames, {} jumps, {} landings",
            state.frame,
            jumps,
            landings
        );
        state
    }
}
