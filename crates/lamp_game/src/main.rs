//! Lamplight -- main loop and application entry point.
//!
//! winit drives the event loop via `ApplicationHandler`. Device events are
//! converted to `RawEvent`s as they arrive and queued; each `RedrawRequested`
//! runs one variable-step frame:
//!
//!   1. `begin_frame()` -- measure wall-clock delta since the previous frame
//!   2. drain the queue through `InputMapper` and apply every intent
//!   3. step player, camera and enemy by the full delta
//!   4. rebuild the quad batch and issue a single draw call
//!
//! A quit intent ends the loop before the step, so the last frame is never drawn.

mod atlas;
mod enemy;
mod frame;
mod player;
mod pointer;
mod props;
#[cfg(test)]
mod replay;
mod world;

use std::path::Path;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use lamp_core::input::{InputMapper, Intent, Key, KeyState, MouseBtn, RawEvent};
use lamp_core::time::FrameClock;
use lamp_platform::{PlatformConfig, PlatformError};
use lamp_render::{AtlasImage, GpuContext, RenderError, Renderer};
use world::{FrameOutcome, GameState};

const WINDOW_CONFIG_PATH: &str = "assets/config/window.json";
const ATLAS_PATH: &str = "assets/textures/elements.png";
const FPS_LOG_INTERVAL_FRAMES: u64 = 300;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Everything that needs a live window. Built once in `resumed`.
struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: Renderer,
    game: GameState,
    mapper: InputMapper,
    clock: FrameClock,
    pending: Vec<RawEvent>,
}

impl AppState {
    fn new(window: Arc<Window>, config: &PlatformConfig) -> Result<Self, StartupError> {
        window.set_cursor_visible(false);

        let gpu = GpuContext::new(window.clone())?;
        let atlas_image = AtlasImage::load(Path::new(ATLAS_PATH))?;
        let renderer = Renderer::new(&gpu, &atlas_image)?;
        let (atlas_w, atlas_h) = renderer.atlas_size();
        log::info!("Atlas loaded: {} ({}x{})", ATLAS_PATH, atlas_w, atlas_h);

        let game = GameState::new(config.aspect_ratio());
        log::info!("Enemy patrol loaded: {} stops", game.enemy.route.len());

        let (width, height) = gpu.size;
        Ok(Self {
            window,
            gpu,
            renderer,
            game,
            mapper: InputMapper::new(width, height),
            clock: FrameClock::new(),
            pending: Vec::with_capacity(16),
        })
    }

    fn redraw(&mut self) -> FrameOutcome {
        let dt = self.clock.begin_frame();

        let mapper = &self.mapper;
        let intents: Vec<Intent> = self
            .pending
            .drain(..)
            .filter_map(|event| mapper.translate(&event))
            .collect();

        if self.game.advance(&intents, dt) == FrameOutcome::Quit {
            return FrameOutcome::Quit;
        }

        let batch = self.renderer.begin_frame();
        frame::draw_world(&self.game, batch);
        self.renderer.submit(&self.gpu, &self.game.camera);

        if self.clock.frame_count % FPS_LOG_INTERVAL_FRAMES == 0 {
            log::debug!(
                "{:.1} fps ({:.2} ms/frame)",
                self.clock.smoothed_fps,
                self.clock.smoothed_frame_time_ms
            );
        }
        FrameOutcome::Continue
    }
}

struct App {
    config: PlatformConfig,
    state: Option<AppState>,
    startup_error: Option<StartupError>,
}

impl App {
    fn new(config: PlatformConfig) -> Self {
        Self {
            config,
            state: None,
            startup_error: None,
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<AppState, StartupError> {
        let window = lamp_platform::create_window(event_loop, &self.config)?;
        log::info!(
            "Window created: {}x{}",
            self.config.width,
            self.config.height
        );
        AppState::new(window, &self.config)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.startup_error.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(err) => {
                self.startup_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested.");
                state.pending.push(RawEvent::Quit);
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    state.mapper.set_size(w, h);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        state.pending.push(RawEvent::Key {
                            key,
                            state: key_state(event.state),
                            repeat: event.repeat,
                        });
                    }
                }
            }

            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                if let Some(button) = map_mouse(button) {
                    state.pending.push(RawEvent::MouseButton {
                        button,
                        state: key_state(button_state),
                    });
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.pending.push(RawEvent::PointerMoved {
                    x: position.x,
                    y: position.y,
                });
            }

            WindowEvent::RedrawRequested => {
                if state.redraw() == FrameOutcome::Quit {
                    log::info!("Quit requested, exiting.");
                    event_loop.exit();
                    self.state = None;
                }
            }

            _ => {}
        }
    }
}

fn key_state(state: ElementState) -> KeyState {
    match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    }
}

fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::KeyQ => Some(Key::Q),
        KeyCode::KeyE => Some(Key::E),
        KeyCode::ShiftLeft => Some(Key::LeftShift),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

fn map_mouse(button: MouseButton) -> Option<MouseBtn> {
    match button {
        MouseButton::Left => Some(MouseBtn::Left),
        MouseButton::Right => Some(MouseBtn::Right),
        MouseButton::Middle => Some(MouseBtn::Middle),
        _ => None,
    }
}

fn run() -> Result<(), StartupError> {
    let config = PlatformConfig::load_or_default(Path::new(WINDOW_CONFIG_PATH))?;

    let event_loop = EventLoop::new().map_err(PlatformError::from)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).map_err(PlatformError::from)?;

    match app.startup_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Lamplight starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_keys_cover_every_binding() {
        let codes = [
            KeyCode::KeyW,
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyQ,
            KeyCode::KeyE,
            KeyCode::ShiftLeft,
            KeyCode::Escape,
        ];
        let keys: Vec<Key> = codes.iter().filter_map(|&code| map_key(code)).collect();
        assert_eq!(keys.len(), codes.len());
        assert_eq!(map_key(KeyCode::KeyS), None);
        assert_eq!(map_key(KeyCode::ShiftRight), None);
    }

    #[test]
    fn close_event_translates_to_quit() {
        let mapper = InputMapper::new(1200, 700);
        assert_eq!(mapper.translate(&RawEvent::Quit), Some(Intent::Quit));
        assert_eq!(key_state(ElementState::Released), KeyState::Released);
    }

    #[test]
    fn mouse_buttons_map_without_extras() {
        assert_eq!(map_mouse(MouseButton::Right), Some(MouseBtn::Right));
        assert_eq!(map_mouse(MouseButton::Back), None);
    }
}
