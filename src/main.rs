//! Traffic Racer entry point
//!
//! Browser: wires the DOM, WebGPU and requestAnimationFrame into a session.
//! Native: runs a short headless session and logs what happened.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement};

    use traffic_racer::persistence::{KeyValueStore, LocalStorageStore, NullStore};
    use traffic_racer::platform::web::WebScheduler;
    use traffic_racer::renderer::RenderState;
    use traffic_racer::sim::Viewport;
    use traffic_racer::ui::game_over_summary;
    use traffic_racer::{Collaborators, Command, ControlsState, Hud, Session, Tuning};

    type Game = Session<RenderState, DomHud, Box<dyn KeyValueStore>, WebScheduler>;

    /// HUD backed by the page's score/overlay/button elements
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_display(&self, id: &str, display: &str) {
            let el = self
                .document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(el) = el {
                let _ = el.style().set_property("display", display);
            }
        }
    }

    impl Hud for DomHud {
        fn set_score(&mut self, score: u64) {
            self.set_text("score", &score.to_string());
        }

        fn set_highscore(&mut self, highscore: u64) {
            self.set_text("highscore-val", &highscore.to_string());
        }

        fn show_game_over(&mut self, score: u64, highscore: u64) {
            self.set_text("overlay-score", &game_over_summary(score, highscore));
            self.set_display("overlay", "flex");
        }

        fn hide_overlay(&mut self) {
            self.set_display("overlay", "none");
        }

        fn set_controls(&mut self, controls: ControlsState) {
            let (pause, play) = match controls {
                ControlsState::ShowPause => ("inline-block", "none"),
                ControlsState::ShowPlay => ("none", "inline-block"),
                ControlsState::Hidden => ("none", "none"),
            };
            self.set_display("btnPause", pause);
            self.set_display("btnPlay", play);
        }
    }

    fn js_err(msg: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&msg.to_string())
    }

    fn window_size(window: &web_sys::Window) -> (u32, u32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        (width.max(1.0) as u32, height.max(1.0) as u32)
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Traffic Racer starting...");

        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| js_err("no #gameCanvas"))?
            .dyn_into()?;

        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(js_err)?;

        let store: Box<dyn KeyValueStore> = match LocalStorageStore::open() {
            Some(store) => Box::new(store),
            None => {
                log::warn!("LocalStorage unavailable; highscore will not persist");
                Box::new(NullStore)
            }
        };

        let seed = js_sys::Date::now() as u64;
        let io = Collaborators {
            canvas: render_state,
            hud: DomHud {
                document: document.clone(),
            },
            store,
            scheduler: WebScheduler::new(),
        };
        let game: Rc<RefCell<Game>> = Rc::new(RefCell::new(Session::new(
            io,
            Tuning::default(),
            Viewport::new(width as f32, height as f32),
            seed,
        )));
        log::info!("Game initialized with seed: {}", seed);

        {
            let weak: Weak<RefCell<Game>> = Rc::downgrade(&game);
            game.borrow()
                .collaborators()
                .scheduler
                .set_callback(move |handle| {
                    if let Some(game) = weak.upgrade() {
                        game.borrow_mut().on_frame(handle);
                    }
                });
        }

        setup_keyboard(&window, game.clone());
        setup_buttons(&document, game.clone());
        setup_resize(&window, canvas, game.clone());

        game.borrow_mut().start_game();

        log::info!("Traffic Racer running!");
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().key_down(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().key_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keys released while unfocused never send keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().release_keys();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let buttons = [
            ("btnPause", Command::Pause),
            ("btnPlay", Command::Play),
            ("btnRestart", Command::Restart),
            ("overlayRestartBtn", Command::OverlayRestart),
        ];

        for (id, command) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().handle_command(command);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(window: &web_sys::Window, canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let win = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = window_size(&win);
            canvas.set_width(width);
            canvas.set_height(height);
            game.borrow_mut().resize(width as f32, height as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Traffic Racer failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Traffic Racer (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless::run(1_000);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use traffic_racer::persistence::MemoryStore;
    use traffic_racer::platform::ManualScheduler;
    use traffic_racer::renderer::RecordingCanvas;
    use traffic_racer::sim::Viewport;
    use traffic_racer::ui::MemoryHud;
    use traffic_racer::{Collaborators, Session, SessionPhase, Tuning};

    /// Drive a session with a weaving steering pattern until it crashes or
    /// `max_frames` have fired
    pub fn run(max_frames: u32) {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let io = Collaborators {
            canvas: RecordingCanvas::new(),
            hud: MemoryHud::new(),
            store: MemoryStore::new(),
            scheduler: ManualScheduler::new(),
        };
        let mut session = Session::new(io, Tuning::default(), Viewport::new(1000.0, 700.0), seed);
        session.start_game();

        let mut frames = 0;
        while frames < max_frames {
            // Alternate left and right every 40 frames
            let steer = if (frames / 40) % 2 == 0 {
                "ArrowLeft"
            } else {
                "ArrowRight"
            };
            session.key_up("ArrowLeft");
            session.key_up("ArrowRight");
            session.key_down(steer);

            let Some(handle) = session.collaborators_mut().scheduler.pop_due() else {
                break;
            };
            session.on_frame(handle);
            frames += 1;
        }

        let state = session.state();
        match session.phase() {
            SessionPhase::GameOver => log::info!(
                "Crashed after {} frames with {} cars on the road",
                frames,
                state.enemies.len()
            ),
            phase => log::info!("Stopped after {} frames ({:?})", frames, phase),
        }
        let io = session.collaborators();
        println!(
            "score {} / highscore {} / {} frames drawn",
            io.hud.score, io.hud.highscore, io.canvas.frames
        );
    }
}
