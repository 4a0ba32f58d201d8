//! Rally Pong entry point
//!
//! In the browser: canvas, pointer input and the animation-frame loop.
//! Natively: a headless match played by the autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use rally_pong::Tuning;
    use rally_pong::platform::web::{
        AnimationFrameScheduler, FrameCallback, GameOverScreen, detect_device_profile,
    };
    use rally_pong::platform::{run_frame, start_match};
    use rally_pong::renderer::CanvasSurface;
    use rally_pong::sim::{PaddleCommand, RoundController, paddle_x_for_pointer};

    /// Game instance holding the controller and its collaborators
    struct Game {
        controller: RoundController,
        surface: CanvasSurface,
        display: GameOverScreen,
        scheduler: AnimationFrameScheduler,
    }

    impl Game {
        fn frame(&mut self) {
            run_frame(
                &mut self.controller,
                &mut self.surface,
                &mut self.display,
                &mut self.scheduler,
            );
        }

        fn restart(&mut self) {
            start_match(&mut self.controller, &mut self.display, &mut self.scheduler);
        }

        fn pointer_moved(&mut self, client_x: f32) {
            let x = paddle_x_for_pointer(client_x, self.surface.field_left());
            self.controller
                .queue_command(PaddleCommand::MoveHumanPaddle { x });
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        log::info!("Rally Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;

        let tuning = Tuning::for_profile(detect_device_profile());
        let surface = CanvasSurface::new(&document, &body)?;
        let display = GameOverScreen::new(&document, surface.canvas().clone())?;

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = AnimationFrameScheduler::new(window.clone(), callback.clone());

        let game = Rc::new(RefCell::new(Game {
            controller: RoundController::new(tuning),
            surface,
            display,
            scheduler,
        }));

        {
            let game = game.clone();
            *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                game.borrow_mut().frame();
            }));
        }

        setup_pointer_handler(game.clone())?;
        setup_restart_button(game.clone())?;

        game.borrow_mut().restart();
        log::info!("Rally Pong running!");
        Ok(())
    }

    fn setup_pointer_handler(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let canvas = game.borrow().surface.canvas().clone();
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            game.borrow_mut().pointer_moved(event.client_x() as f32);
            if let Err(err) = target.style().set_property("cursor", "none") {
                log::warn!("Failed to hide cursor: {:?}", err);
            }
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let button = game.borrow().display.restart_button().clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().restart();
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        web_sys::console::error_1(&err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rally_pong::Tuning;
    use rally_pong::platform::detect_device_profile;
    use rally_pong::platform::headless::{MAX_HEADLESS_FRAMES, play_match};
    use rally_pong::sim::RoundController;

    env_logger::init();
    log::info!("Rally Pong (native) starting...");

    let profile = detect_device_profile();
    let tuning = match std::env::var("PONG_TUNING") {
        Ok(json) => Tuning::from_json(&json).unwrap_or_else(|err| {
            log::warn!("Ignoring PONG_TUNING: {}", err);
            Tuning::for_profile(profile)
        }),
        Err(_) => Tuning::for_profile(profile),
    };
    log::info!("Profile {} with {:?}", profile.as_str(), tuning);

    let mut controller = RoundController::new(tuning);
    let run = play_match(&mut controller, MAX_HEADLESS_FRAMES);

    let state = controller.state();
    match run.winner {
        Some(winner) => println!(
            "{} Wins! {}-{} in {} frames",
            winner.label(),
            state.human_score,
            state.ai_score,
            run.frames
        ),
        None => println!(
            "No winner after {} frames ({}-{})",
            run.frames, state.human_score, state.ai_score
        ),
    }

    match serde_json::to_string(state) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(err) => log::warn!("Could not serialize final state: {}", err),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
