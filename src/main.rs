//! Gem Rush entry point
//!
//! Browser: wires the DOM, runs the frame loop on `requestAnimationFrame` and
//! the countdown on `setInterval`. Native: plays one scripted round headless.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{EventTarget, KeyboardEvent, TouchEvent};

    use gem_rush::GameConfig;
    use gem_rush::consts::COUNTDOWN_PERIOD_MS;
    use gem_rush::platform::{DomPresenter, HapticSink, Joystick, WebVibration, dispatch};
    use gem_rush::render::FrameSnapshot;
    use gem_rush::sim::{GamePhase, GameSession};

    #[wasm_bindgen]
    extern "C" {
        /// Provided by the page's three.js scene
        #[wasm_bindgen(js_namespace = gemScene, js_name = renderFrame)]
        fn render_frame(snapshot: &str);
    }

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        joystick: Joystick,
        presenter: DomPresenter,
        haptics: Option<WebVibration>,
        last_time: f64,
        countdown_fn: Option<js_sys::Function>,
        countdown_handle: Option<i32>,
    }

    impl Game {
        fn new(seed: u64, document: web_sys::Document) -> Self {
            Self {
                session: GameSession::new(GameConfig::default(), seed),
                // Base is measured on the first touch
                joystick: Joystick::for_base(0.0, 0.0, 0.0, 0.0),
                presenter: DomPresenter::new(document),
                haptics: WebVibration::new(),
                last_time: 0.0,
                countdown_fn: None,
                countdown_handle: None,
            }
        }

        /// Push queued session events to the HUD and vibration
        fn flush_events(&mut self) {
            let events = self.session.drain_events();
            if events.is_empty() {
                return;
            }
            let haptics = self.haptics.as_mut().map(|h| h as &mut dyn HapticSink);
            dispatch(&events, &mut self.presenter, haptics);

            if !self.session.countdown_running() {
                self.stop_countdown();
            }
        }

        fn stop_countdown(&mut self) {
            let Some(handle) = self.countdown_handle.take() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }

        /// Frame task: input, simulation, HUD, scene
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            if self.joystick.take_jump() {
                self.session.request_jump();
            }
            self.session.frame(dt, self.joystick.sample());
            self.flush_events();

            let snapshot = FrameSnapshot::capture(&self.session, &self.joystick, (time / 1000.0) as f32);
            match snapshot.to_json() {
                Ok(json) => render_frame(&json),
                Err(e) => log::warn!("Snapshot encode failed: {}", e),
            }
        }

        /// Clear and re-arm the 1 s countdown
        fn restart_countdown(&mut self) -> Result<(), JsValue> {
            self.stop_countdown();
            let window = web_sys::window().ok_or("no window")?;
            if let Some(func) = &self.countdown_fn {
                let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
                    func,
                    COUNTDOWN_PERIOD_MS as i32,
                )?;
                self.countdown_handle = Some(handle);
            }
            Ok(())
        }

        /// Start from the menu or restart from game over
        fn begin_round(&mut self) {
            let started = match self.session.phase() {
                GamePhase::Ended => self.session.restart(),
                _ => self.session.start(),
            };
            if started {
                if let Err(e) = self.restart_countdown() {
                    log::error!("Countdown failed to start: {:?}", e);
                }
            }
            self.flush_events();
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Gem Rush starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, document.clone())));
        log::info!("Session created with seed: {}", seed);

        // Countdown task (armed on every start)
        {
            let game_ref = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game_ref.borrow_mut();
                g.session.tick_second();
                g.flush_events();
            });
            let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
            game.borrow_mut().countdown_fn = Some(func);
            closure.forget();
        }

        setup_joystick(&document, game.clone())?;
        setup_buttons(&document, game.clone())?;
        setup_keyboard(&window, game.clone())?;

        // Keep the page from scrolling under the thumbs
        listen(&document, "touchmove", |event| event.prevent_default())?;

        request_animation_frame(game);

        log::info!("Gem Rush running!");
        Ok(())
    }

    fn listen(
        target: &EventTarget,
        name: &str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn first_touch(event: &web_sys::Event) -> Option<Vec2> {
        let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
        Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
    }

    fn setup_joystick(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let base = document
            .get_element_by_id("joystick-base")
            .ok_or("no joystick base")?;

        // Touch start: measure the base, grab the stick
        {
            let game = game.clone();
            let base_el = base.clone();
            listen(&base, "touchstart", move |event| {
                event.prevent_default();
                let rect = base_el.get_bounding_client_rect();
                let mut g = game.borrow_mut();
                g.joystick.set_base(
                    rect.left() as f32,
                    rect.top() as f32,
                    rect.width() as f32,
                    rect.height() as f32,
                );
                if let Some(point) = first_touch(&event) {
                    g.joystick.press(point);
                }
            })?;
        }

        // Touch move
        {
            let game = game.clone();
            listen(&base, "touchmove", move |event| {
                event.prevent_default();
                if let Some(point) = first_touch(&event) {
                    game.borrow_mut().joystick.drag(point);
                }
            })?;
        }

        // Touch end: recenter
        {
            let game = game.clone();
            listen(&base, "touchend", move |event| {
                event.prevent_default();
                game.borrow_mut().joystick.release();
            })?;
        }

        // Jump button
        if let Some(btn) = document.get_element_by_id("jump-btn") {
            listen(&btn, "touchstart", move |event| {
                event.prevent_default();
                game.borrow_mut().joystick.press_jump();
            })?;
        } else {
            log::warn!("Jump button missing");
        }

        Ok(())
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                listen(&btn, "click", move |_event| game.borrow_mut().begin_round())?;
            }
        }

        if let Some(btn) = document.get_element_by_id("menu-btn") {
            let game = game.clone();
            listen(&btn, "click", move |_event| {
                let mut g = game.borrow_mut();
                g.session.return_to_menu();
                g.flush_events();
            })?;
        }

        if let Some(btn) = document.get_element_by_id("pause-btn") {
            listen(&btn, "click", move |_event| {
                let mut g = game.borrow_mut();
                g.session.toggle_pause();
                g.flush_events();
            })?;
        }

        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        listen(window, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else {
                return;
            };
            let mut g = game.borrow_mut();
            match key.as_str() {
                " " => g.joystick.press_jump(),
                "Escape" | "p" | "P" => {
                    g.session.toggle_pause();
                    g.flush_events();
                }
                "Enter" => g.begin_round(),
                _ => {}
            }
        })
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Gem Rush (native) starting...");
    log::info!("Native mode plays one short headless round - run with `trunk serve` for the web version");

    play_headless_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Steer in a slow circle, hop now and then, pause once, until time runs out
#[cfg(not(target_arch = "wasm32"))]
fn play_headless_round() {
    use gem_rush::GameConfig;
    use gem_rush::platform::{Joystick, LogPresenter, NoHaptics, dispatch};
    use gem_rush::render::FrameSnapshot;
    use gem_rush::sim::{Driver, GamePhase, GameSession, InputVector};
    use glam::Vec2;

    const FRAME: f32 = 1.0 / 60.0;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut driver = Driver::new(GameSession::new(GameConfig::with_duration(10), seed));
    let mut presenter = LogPresenter;
    let mut haptics = NoHaptics;

    driver.start();
    let mut frame = 0u32;
    while driver.session().phase() != GamePhase::Ended {
        let angle = frame as f32 * 0.01;
        let input = InputVector::clamped(Vec2::new(angle.cos(), angle.sin()));

        if frame % 90 == 45 {
            driver.session_mut().request_jump();
        }
        if frame == 240 || frame == 300 {
            driver.session_mut().toggle_pause();
        }

        driver.advance(FRAME, input);
        let events = driver.session_mut().drain_events();
        dispatch(&events, &mut presenter, Some(&mut haptics));
        frame += 1;
    }

    let snapshot = FrameSnapshot::capture(
        driver.session(),
        &Joystick::for_base(0.0, 0.0, 0.0, 0.0),
        frame as f32 * FRAME,
    );
    match snapshot.to_json() {
        Ok(json) => log::debug!("Final frame: {}", json),
        Err(e) => log::warn!("Snapshot encode failed: {}", e),
    }
    println!(
        "Round over after {} frames: score {}",
        frame,
        driver.session().score()
    );
}
