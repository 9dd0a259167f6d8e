//! Egg Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use egg_drop::Settings;
    use egg_drop::consts::*;
    use egg_drop::platform::FixedStep;
    use egg_drop::renderer::{RenderState, SceneOptions, build_scene};
    use egg_drop::sim::{
        GameAction, GamePhase, GameSession, HeldKeys, LoopControl, TickInput, autopilot_keys,
        tick,
    };
    use egg_drop::ui::{self, ClickDebouncer, ControlButton};
    use glam::Vec2;

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        settings: Settings,
        render_state: Option<RenderState>,
        step: FixedStep,
        last_time: f64,
        input: TickInput,
        /// Movement keys currently down
        keys: HeldKeys,
        autopilot: bool,
        debouncer: ClickDebouncer,
        hovered: Option<ControlButton>,
        /// Cleared by Quit; stops the animation loop
        running: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                session: GameSession::new(seed),
                render_state: None,
                step: FixedStep::new(),
                last_time: 0.0,
                input: TickInput::default(),
                keys: HeldKeys::default(),
                autopilot: settings.autopilot,
                debouncer: ClickDebouncer::new(settings.click_debounce_ms),
                hovered: None,
                running: true,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                settings,
            }
        }

        /// Queue an action for the next tick
        fn queue(&mut self, action: GameAction) {
            self.input.actions.push(action);
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            for _ in 0..self.step.advance(dt) {
                self.input.keys = if self.autopilot {
                    autopilot_keys(&self.session)
                } else {
                    self.keys
                };
                let control = tick(&mut self.session, &self.input);

                // Actions are one-shot
                self.input.actions.clear();

                for event in self.session.drain_events() {
                    event.log();
                }

                if control == LoopControl::Exit {
                    self.quit();
                    return;
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Stop the loop and release the GPU surface
        fn quit(&mut self) {
            log::info!(
                "Quit - score {}, misses {}",
                self.session.score,
                self.session.misses
            );
            self.running = false;
            self.render_state = None;

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = document.get_element_by_id("quit-screen") {
                    let _ = el.set_attribute("class", "");
                }
                if let Some(el) = document.get_element_by_id("hud") {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let options = SceneOptions {
                hovered: self.hovered,
                high_contrast: self.settings.high_contrast,
            };
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.session.snapshot(), &options);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snapshot = self.session.snapshot();

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&ui::score_text(&snapshot)));
            }
            if let Some(el) = document.get_element_by_id("hud-misses") {
                el.set_text_content(Some(&ui::misses_text(&snapshot)));
            }
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} FPS", self.fps)));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            for button in ControlButton::ALL {
                if let Some(el) = document.get_element_by_id(button.element_id()) {
                    el.set_text_content(Some(button.label(snapshot.phase)));
                }
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if snapshot.phase == GamePhase::GameOver {
                    el.set_text_content(Some(ui::GAME_OVER_TEXT));
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    /// Convert a mouse event on the canvas into playfield coordinates
    fn event_to_screen(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let w = canvas.client_width().max(1) as f32;
        let h = canvas.client_height().max(1) as f32;
        Vec2::new(
            event.offset_x() as f32 * SCREEN_WIDTH / w,
            event.offset_y() as f32 * SCREEN_HEIGHT / h,
        )
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Egg Drop starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No <canvas id=\"canvas\"> element");
                return;
            }
        };

        // Back the canvas with device pixels at the playfield's aspect ratio
        let dpr = window.device_pixel_ratio();
        let width = (SCREEN_WIDTH as f64 * dpr) as u32;
        let height = (SCREEN_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Egg Drop running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Mouse move - hover highlight
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = event_to_screen(&canvas_clone, &event);
                game.borrow_mut().hovered = ui::button_at(point);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse leave - drop hover
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().hovered = None;
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click - control buttons
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let point = event_to_screen(&canvas_clone, &event);
                let mut g = game.borrow_mut();
                let now = js_sys::Date::now();
                if let Some(action) = ui::click_action(&mut g.debouncer, point, now) {
                    g.queue(action);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => {
                        event.prevent_default();
                        g.keys.left = true;
                    }
                    "ArrowRight" | "d" | "D" => {
                        event.prevent_default();
                        g.keys.right = true;
                    }
                    _ if event.repeat() => {}
                    "Escape" | "p" | "P" => g.queue(GameAction::TogglePause),
                    "r" | "R" => g.queue(GameAction::Restart),
                    "q" | "Q" => g.queue(GameAction::Quit),
                    "i" | "I" => {
                        g.autopilot = !g.autopilot;
                        log::info!("Autopilot: {}", g.autopilot);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.keys.left = false,
                    "ArrowRight" | "d" | "D" => g.keys.right = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - keyup never arrives, so release held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys = HeldKeys::default();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            if !g.running {
                return;
            }
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use egg_drop::Settings;
    use egg_drop::consts::TICK_RATE;
    use egg_drop::demo::run_demo;
    use egg_drop::platform::TickGovernor;
    use egg_drop::sim::GameSession;

    env_logger::init();
    log::info!("Egg Drop (native) starting...");
    log::info!("Native mode has no window - the autopilot plays a headless round");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!("Seed: {}", seed);

    let mut session = GameSession::new(seed);
    let mut governor = TickGovernor::new(TICK_RATE);
    let summary = run_demo(&mut session, settings.demo_tick_limit, || governor.wait());

    match serde_json::to_string(&session.snapshot()) {
        Ok(json) => log::debug!("Final frame: {}", json),
        Err(e) => log::warn!("Could not encode final frame: {}", e),
    }
    log::info!(
        "Finished after {} ticks: score {}, misses {}, eggs {}",
        summary.ticks,
        summary.score,
        summary.misses,
        summary.eggs_spawned
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
