//! Star Dodger entry point
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
    use web_sys::{Document, HtmlAudioElement, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

    use star_dodger::audio::AudioManager;
    use star_dodger::renderer::{RenderState, RendererError, Viewport};
    use star_dodger::{EndScreen, Frame, Renderer, RunSummary, Session, Settings, TickOutcome};

    /// Longest simulated step per frame (tab switches, debugger pauses)
    const MAX_FRAME_MS: f64 = 100.0;

    /// GPU playfield plus the DOM score overlay
    struct CanvasRenderer {
        gpu: Option<RenderState>,
        document: Document,
    }

    impl Renderer for CanvasRenderer {
        fn draw(&mut self, frame: &Frame<'_>) {
            if let Some(gpu) = self.gpu.as_mut() {
                gpu.draw(frame);
            }
            set_text(&self.document, "hud-score", &format!("Score: {}", frame.score));
            set_text(
                &self.document,
                "hud-high-score",
                &format!("High Score: {}", frame.high_score),
            );
        }
    }

    /// Death screen panel
    struct DomEndScreen {
        document: Document,
        audio: Rc<AudioManager>,
    }

    impl EndScreen for DomEndScreen {
        fn show(&mut self, summary: &RunSummary) {
            set_text(&self.document, "score-display", &summary.to_string());
            set_visible(&self.document, "death-screen", true);
            self.audio.play_game_over();
            if summary.is_new_record() {
                self.audio.play_high_score();
            }
        }

        fn hide(&mut self) {
            set_visible(&self.document, "death-screen", false);
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
        last_time: Option<f64>,
        loop_running: bool,
    }

    impl Game {
        /// Map a canvas-local CSS pixel position onto the ship
        fn pointer_at(&mut self, x: f32, y: f32) {
            let play_area = self.session.state().tuning.play_area();
            let viewport = Viewport::new(
                self.canvas.client_width() as f32,
                self.canvas.client_height() as f32,
                play_area,
            );
            let p = viewport.screen_to_play(Vec2::new(x, y));
            self.session.move_ship_to(p.x, p.y);
        }

        /// Advance the clock and run one tick
        fn update(&mut self, time: f64) -> TickOutcome {
            let elapsed = match self.last_time {
                Some(last) => (time - last).clamp(0.0, MAX_FRAME_MS),
                None => 0.0,
            };
            self.last_time = Some(time);
            self.session.frame_elapsed(elapsed, &mut self.renderer)
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    async fn init_gpu(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
        play_area: Vec2,
    ) -> Result<RenderState, RendererError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height, play_area).await
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Star Dodger starting...");

        let settings = Settings::load();
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store in device pixels
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let music = document
            .get_element_by_id("backgroundMusic")
            .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
        let audio = Rc::new(AudioManager::new(music, settings.effective_music_volume()));

        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let play_area = settings.tuning.play_area();
        let session = match Session::new(
            settings.tuning,
            seed,
            Box::new(audio.clone()),
            Box::new(DomEndScreen {
                document: document.clone(),
                audio,
            }),
        ) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Invalid tuning: {}", e);
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game {
            session,
            renderer: CanvasRenderer {
                gpu: None,
                document: document.clone(),
            },
            canvas: canvas.clone(),
            last_time: None,
            loop_running: false,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(&document, game.clone());

        // The render pipeline is the asset that gates the first run
        match init_gpu(canvas, width, height, play_area).await {
            Ok(render_state) => {
                let mut g = game.borrow_mut();
                g.renderer.gpu = Some(render_state);
                if let Err(e) = g.session.assets_ready() {
                    log::error!("{}", e);
                    return;
                }
            }
            Err(e) => {
                game.borrow_mut().session.assets_failed(&e.to_string());
                return;
            }
        }

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        start_loop(game);
        log::info!("Star Dodger running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .pointer_at(event.offset_x() as f32, event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    game.borrow_mut().pointer_at(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restartButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let restarted = game.borrow_mut().session.restart();
                match restarted {
                    Ok(()) => start_loop(game.clone()),
                    Err(e) => log::warn!("{}", e),
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_running {
                return;
            }
            g.loop_running = true;
            g.last_time = None;
        }
        request_animation_frame(game);
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
        let outcome = game.borrow_mut().update(time);
        match outcome {
            TickOutcome::Continue => request_animation_frame(game),
            TickOutcome::Ended(_) | TickOutcome::Stopped => {
                // Not rescheduling is how the driver stops
                game.borrow_mut().loop_running = false;
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use star_dodger::autopilot::Autopilot;
    use star_dodger::consts::FRAME_MS;
    use star_dodger::frontend::{LogEndScreen, Silent, TraceRenderer};
    use star_dodger::{Session, Settings, TickOutcome};

    /// Ten minutes of simulated play at 60 Hz
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Star Dodger (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let seed = settings.seed_or(clock_seed);

    let mut session = match Session::new(
        settings.tuning,
        seed,
        Box::new(Silent),
        Box::new(LogEndScreen),
    ) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            return;
        }
    };
    let mut renderer = TraceRenderer::new(600);
    let pilot = Autopilot::default();

    if let Err(e) = session.assets_ready() {
        log::error!("{}", e);
        return;
    }

    for _ in 0..MAX_FRAMES {
        let target = pilot.steer(session.state());
        session.move_ship_to(target.x, target.y);

        match session.frame_elapsed(FRAME_MS, &mut renderer) {
            TickOutcome::Continue => {}
            TickOutcome::Ended(summary) => {
                println!("\n{}", summary);
                println!(
                    "Survived {:.1}s of simulated time (seed {})",
                    session.now_ms() / 1000.0,
                    seed
                );
                return;
            }
            TickOutcome::Stopped => break,
        }
    }

    println!(
        "\nAutopilot survived all {} frames, score {}",
        renderer.frames(),
        session.score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
