//! The application trait driven by the engine's frame loop.

use std::time::Duration;

use crate::engine::Engine;

/// Lifecycle hooks called by [`Engine::run`].
///
/// All hooks have empty default bodies; implement the ones you need.
/// You almost certainly want [`App::on_update`], or nothing will
/// happen.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
///
/// use petrichor::{App, Engine};
///
/// struct Game;
///
/// impl App for Game {
///     fn on_start(&mut self, engine: &mut Engine) {
///         // setup
///     }
///
///     fn on_update(&mut self, engine: &mut Engine, dt: Duration) {
///         // per-frame state update and drawing
///     }
///
///     fn on_exit(&mut self, engine: &mut Engine) {
///         // cleanup
///     }
/// }
/// ```
#[allow(unused_variables)]
pub trait App {
    /// Called once after the window opens, before the first update.
    fn on_start(&mut self, engine: &mut Engine) {}

    /// Called every frame. `dt` is the wall-clock time since the
    /// previous update.
    fn on_update(&mut self, engine: &mut Engine, dt: Duration) {}

    /// Called once after the frame loop ends, before the window
    /// closes.
    fn on_exit(&mut self, engine: &mut Engine) {}
}
