//! WebGPU client for Pong
//!
//! Paces the match at 60 ticks per second from `requestAnimationFrame`
//! timestamps, draws shapes with wgpu and text on a 2D overlay canvas.
//! Only the wasm32 build exports anything; the shape batching, key mapping
//! and dialog logic are plain Rust and tested natively.

pub mod batch;
pub mod camera;
pub mod dialog;
pub mod input;
pub mod mesh;

#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::batch::FrameBatch;
    use crate::dialog::{notify_match_over, BrowserDialog};
    use crate::input::{handle_key_down, handle_key_up, is_primary_button};
    use crate::overlay::TextOverlay;
    use crate::renderer::Renderer;
    use game_core::{Config, DisplayList, FrameClock, InputEvent, MatchLoop, PaddleIntent, Params};
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    /// Main client state
    pub struct Client {
        renderer: Renderer,
        overlay: TextOverlay,
        game: MatchLoop,
        clock: FrameClock,
        keys: PaddleIntent,
        frame: DisplayList,
        last_time_ms: Option<f64>,
        dialog: BrowserDialog,
    }

    impl Client {
        async fn new(canvas: HtmlCanvasElement, overlay: HtmlCanvasElement) -> Result<Self, String> {
            let config = Config::new();
            let (width, height) = (config.screen_width as u32, config.screen_height as u32);
            overlay.set_width(width);
            overlay.set_height(height);

            let overlay = TextOverlay::new(&overlay, config.font_size)?;
            let renderer = Renderer::new(canvas, width, height).await?;

            let seed = js_sys::Date::now() as u64;
            log::info!("Starting match with seed {}", seed);

            Ok(Self {
                renderer,
                overlay,
                game: MatchLoop::new(config, seed),
                clock: FrameClock::new(),
                keys: PaddleIntent::new(),
                frame: DisplayList::new(),
                last_time_ms: None,
                dialog: BrowserDialog,
            })
        }

        /// Run the ticks due since the last call; false once the match loop has stopped
        fn render(&mut self, now_ms: f64) -> Result<bool, String> {
            let elapsed = match self.last_time_ms {
                Some(last) => ((now_ms - last) / 1000.0) as f32,
                None => Params::FIXED_DT,
            };
            self.last_time_ms = Some(now_ms);

            let mut ticks = self.clock.advance(elapsed);
            if ticks == 0 && self.game.input.events.contains(&InputEvent::Quit) {
                ticks = 1;
            }

            for _ in 0..ticks {
                self.frame.clear_commands();
                if !self.game.tick(&mut self.frame) {
                    log::info!("Match loop stopped after {} frames", self.game.state.frame);
                    return Ok(false);
                }
                notify_match_over(&mut self.game, &mut self.dialog);
            }

            if ticks > 0 {
                let batch = FrameBatch::from_display_list(&self.frame);
                self.renderer.draw(&batch)?;
                self.overlay.draw(&batch.texts)?;
            }

            Ok(true)
        }
    }

    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, String>) -> Result<T, JsValue> {
        CLIENT.with(|cell| {
            let mut slot = cell.borrow_mut();
            let client = slot
                .as_mut()
                .ok_or_else(|| JsValue::from_str("Client not initialized"))?;
            f(client).map_err(|e| JsValue::from_str(&e))
        })
    }

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement, overlay: HtmlCanvasElement) -> js_sys::Promise {
        console_error_panic_hook::set_once();
        crate::logger::init(log::LevelFilter::Info);

        wasm_bindgen_futures::future_to_promise(async move {
            let client = Client::new(canvas, overlay)
                .await
                .map_err(|e| JsValue::from_str(&e))?;
            CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Returns true if the key moves the paddle, so the page can suppress scrolling
    #[wasm_bindgen]
    pub fn key_down(key: &str) -> Result<bool, JsValue> {
        with_client(|client| {
            let handled = handle_key_down(key, &mut client.keys);
            client.game.set_keys(client.keys);
            Ok(handled)
        })
    }

    #[wasm_bindgen]
    pub fn key_up(key: &str) -> Result<bool, JsValue> {
        with_client(|client| {
            let handled = handle_key_up(key, &mut client.keys);
            client.game.set_keys(client.keys);
            Ok(handled)
        })
    }

    #[wasm_bindgen]
    pub fn pointer_down(button: i16) -> Result<(), JsValue> {
        with_client(|client| {
            if is_primary_button(button) {
                client.game.push_event(InputEvent::PointerDown);
            }
            Ok(())
        })
    }

    /// Page hide or window close
    #[wasm_bindgen]
    pub fn request_quit() -> Result<(), JsValue> {
        with_client(|client| {
            client.game.push_event(InputEvent::Quit);
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn render_frame(now_ms: f64) -> Result<bool, JsValue> {
        with_client(|client| client.render(now_ms))
    }
}
