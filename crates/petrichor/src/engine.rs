//! The frame loop and native window.
//!
//! [`Engine`] owns the framebuffer, the window, and the input state,
//! and drives an [`App`] through its lifecycle: open the window, call
//! `on_start`, then update and present every frame until the window
//! closes or the app requests exit, then call `on_exit`.

use std::fmt;
use std::time::{Duration, Instant};

use minifb::{MouseMode, Scale, Window, WindowOptions};
use petrichor_raster::Surface;
use tracing::{debug, info};

use crate::app::App;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::{InputSnapshot, InputState, Key, MouseButton};

/// The engine: framebuffer, window, input, and frame accounting.
///
/// Construct one with [`Engine::new`] or [`Engine::windowed`], then
/// hand it an [`App`] via [`Engine::run`]. The window only exists while
/// `run` is executing; outside of it, drawing still works (the surface
/// is always allocated) and input queries report the idle state.
pub struct Engine {
    config: Config,
    surface: Surface,
    window: Option<Window>,
    input: InputState,
    running: bool,
    fps_timer: f32,
    fps_frames: u32,
}

impl Engine {
    /// Create an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let surface = Surface::new(config.window.width, config.window.height);
        Ok(Self {
            config,
            surface,
            window: None,
            input: InputState::new(),
            running: false,
            fps_timer: 0.0,
            fps_frames: 0,
        })
    }

    /// Create an engine with the default configuration and the given
    /// title and framebuffer size.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid.
    pub fn windowed(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut config = Config::default();
        config.window.title = title.to_string();
        config.window.width = width;
        config.window.height = height;
        Self::new(config)
    }

    /// Run the frame loop until the window closes or [`Engine::exit`]
    /// is called.
    ///
    /// Calls `on_start` exactly once before the first update and
    /// `on_exit` exactly once after the last, even when a frame fails
    /// to present; in every case the engine is idle again (no window,
    /// no input) by the time this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created or a frame
    /// cannot be presented.
    pub fn run(&mut self, app: &mut dyn App) -> Result<()> {
        let title = self.config.window.title.clone();
        let options = WindowOptions {
            resize: self.config.window.resizable,
            scale: backend_scale(self.config.window.scale),
            ..WindowOptions::default()
        };

        let mut window =
            Window::new(&title, self.surface.width(), self.surface.height(), options)
                .map_err(|source| Error::window_create(&title, source))?;

        if self.config.frame.target_fps > 0 {
            let target_fps = usize::try_from(self.config.frame.target_fps).unwrap_or(usize::MAX);
            window.set_target_fps(target_fps);
        }

        info!(
            title,
            width = self.surface.width(),
            height = self.surface.height(),
            target_fps = self.config.frame.target_fps,
            "window opened"
        );

        self.window = Some(window);
        self.running = true;
        self.fps_timer = 0.0;
        self.fps_frames = 0;

        app.on_start(self);

        let mut last = Instant::now();
        let mut result = Ok(());
        while self.running {
            let now = Instant::now();
            let dt = now - last;
            last = now;

            if let Err(err) = self.frame(app, dt) {
                result = Err(err);
                break;
            }
        }

        self.shutdown(app);
        result
    }

    /// Request shutdown. The current frame still completes and
    /// `on_exit` runs before [`Engine::run`] returns.
    pub fn exit(&mut self) {
        self.running = false;
    }

    /// Check if the frame loop is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The framebuffer.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The framebuffer, for drawing. All shape routines live on
    /// [`Surface`].
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    // === Input queries (snapshotted once per frame) ===

    /// Check if the key is currently down.
    #[must_use]
    pub fn key_down(&self, key: Key) -> bool {
        self.input.is_down(key)
    }

    /// Check if the key went down this frame. A held key reports this
    /// only once.
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.input.pressed(key)
    }

    /// Check if the key went up this frame.
    #[must_use]
    pub fn key_released(&self, key: Key) -> bool {
        self.input.released(key)
    }

    /// All keys currently down, in no particular order.
    #[must_use]
    pub fn keys_down(&self) -> Vec<Key> {
        self.input.keys_down()
    }

    /// Mouse position relative to the window, `(0, 0)` top-left.
    #[must_use]
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.input.mouse_pos()
    }

    /// Check if the mouse button is currently down.
    #[must_use]
    pub fn mouse_button_down(&self, button: MouseButton) -> bool {
        self.input.mouse_button_down(button)
    }

    /// Scroll wheel movement this frame, if any.
    #[must_use]
    pub fn scroll_wheel(&self) -> Option<(f32, f32)> {
        self.input.scroll_wheel()
    }

    /// One iteration of the frame loop: snapshot input, update the
    /// app, present, check exit conditions.
    fn frame(&mut self, app: &mut dyn App, dt: Duration) -> Result<()> {
        self.poll_input();
        app.on_update(self, dt);
        self.present(dt)?;
        self.check_exit();
        Ok(())
    }

    fn poll_input(&mut self) {
        let snapshot = match &self.window {
            Some(window) => InputSnapshot {
                keys: window.get_keys(),
                mouse_pos: window.get_mouse_pos(MouseMode::Pass),
                buttons: [
                    window.get_mouse_down(MouseButton::Left),
                    window.get_mouse_down(MouseButton::Middle),
                    window.get_mouse_down(MouseButton::Right),
                ],
                scroll: window.get_scroll_wheel(),
            },
            None => InputSnapshot::default(),
        };
        self.input.begin_frame(snapshot);
    }

    fn present(&mut self, dt: Duration) -> Result<()> {
        if let Some(window) = &mut self.window {
            window
                .update_with_buffer(
                    self.surface.pixels(),
                    self.surface.width(),
                    self.surface.height(),
                )
                .map_err(Error::Present)?;
        }

        self.fps_timer += dt.as_secs_f32();
        self.fps_frames += 1;
        if self.fps_timer >= 1.0 {
            self.fps_timer -= 1.0;
            debug!(fps = self.fps_frames, "frame rate");

            if self.config.frame.fps_in_title {
                if let Some(window) = &mut self.window {
                    let title =
                        format!("{} - {} fps", self.config.window.title, self.fps_frames);
                    window.set_title(&title);
                }
            }
            self.fps_frames = 0;
        }

        Ok(())
    }

    /// Tear down after the frame loop, on both clean exit and frame
    /// failure: `on_exit` runs exactly once, then the window is
    /// dropped and input returns to idle.
    fn shutdown(&mut self, app: &mut dyn App) {
        self.running = false;
        app.on_exit(self);
        self.window = None;
        self.input.clear();
        info!("window closed");
    }

    fn check_exit(&mut self) {
        if let Some(window) = &self.window {
            if !window.is_open() {
                self.running = false;
            }
            if self.config.frame.exit_on_esc && self.input.is_down(Key::Escape) {
                self.running = false;
            }
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("running", &self.running)
            .field("window_open", &self.window.is_some())
            .finish_non_exhaustive()
    }
}

/// Map a validated config scale to the backend's scale enum.
fn backend_scale(scale: u8) -> Scale {
    match scale {
        2 => Scale::X2,
        4 => Scale::X4,
        8 => Scale::X8,
        16 => Scale::X16,
        32 => Scale::X32,
        _ => Scale::X1,
    }
}
