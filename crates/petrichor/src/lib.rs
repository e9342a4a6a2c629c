//! `petrichor` - a small 2D software-rendering framework
//!
//! Opens a native window, runs an update-and-present loop, and hands
//! your application a CPU-side [`Surface`] with basic shape drawing
//! plus keyboard and mouse input queries.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use petrichor::{color, App, Engine, Key};
//!
//! struct Demo;
//!
//! impl App for Demo {
//!     fn on_update(&mut self, engine: &mut Engine, _dt: Duration) {
//!         if engine.key_pressed(Key::Q) {
//!             engine.exit();
//!         }
//!
//!         let surface = engine.surface_mut();
//!         surface.clear(color::BLACK);
//!         surface.fill_triangle(120, 300, 520, 300, 320, 100, color::WHITE);
//!     }
//! }
//!
//! fn main() -> petrichor::Result<()> {
//!     let mut engine = Engine::windowed("demo", 640, 360)?;
//!     engine.run(&mut Demo)
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;

pub use app::App;
pub use config::Config;
pub use engine::Engine;
pub use error::{Error, Result};
pub use input::{InputState, Key, MouseButton};
pub use logging::init_logging;
pub use petrichor_raster::{color, Color, Surface};
