//! Bouncing-ball demo.
//!
//! Exercises the public API end to end: configuration loading with CLI
//! overrides, logging, drawing, and keyboard/mouse input.
//!
//! Controls: Space pauses, left click repositions the ball, Q or
//! Escape quits.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use petrichor::logging::{init_logging, Verbosity};
use petrichor::{color, App, Config, Engine, Key, MouseButton};

#[derive(Debug, Parser)]
#[command(name = "bounce", about = "Bouncing-ball demo for petrichor")]
struct Args {
    /// Framebuffer width in pixels.
    #[arg(long)]
    width: Option<usize>,

    /// Framebuffer height in pixels.
    #[arg(long)]
    height: Option<usize>,

    /// Path to a config file (defaults to the standard location).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct Bounce {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    radius: i32,
    paused: bool,
}

impl Bounce {
    fn new() -> Self {
        Self {
            x: 100.0,
            y: 80.0,
            vx: 140.0,
            vy: 90.0,
            radius: 12,
            paused: false,
        }
    }
}

impl App for Bounce {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn on_update(&mut self, engine: &mut Engine, dt: Duration) {
        if engine.key_pressed(Key::Space) {
            self.paused = !self.paused;
        }
        if engine.key_pressed(Key::Q) {
            engine.exit();
        }
        if engine.mouse_button_down(MouseButton::Left) {
            if let Some((mx, my)) = engine.mouse_pos() {
                self.x = mx;
                self.y = my;
            }
        }

        let width = engine.surface().width() as f32;
        let height = engine.surface().height() as f32;
        let r = self.radius as f32;

        if !self.paused {
            let dt = dt.as_secs_f32();
            self.x += self.vx * dt;
            self.y += self.vy * dt;

            if self.x - r < 0.0 {
                self.x = r;
                self.vx = self.vx.abs();
            } else if self.x + r > width {
                self.x = width - r;
                self.vx = -self.vx.abs();
            }
            if self.y - r < 0.0 {
                self.y = r;
                self.vy = self.vy.abs();
            } else if self.y + r > height {
                self.y = height - r;
                self.vy = -self.vy.abs();
            }
        }

        let surface = engine.surface_mut();
        surface.clear(color::BLACK);
        surface.fill_circle(self.x as i32, self.y as i32, self.radius, color::CYAN);
        surface.circle(self.x as i32, self.y as i32, self.radius, color::WHITE);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match args.verbose {
        0 => Verbosity::Normal,
        1 => Verbosity::Verbose,
        _ => Verbosity::Trace,
    });

    let mut config = Config::load_from(args.config)?;
    config.window.title = "bounce".to_string();
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }

    let mut engine = Engine::new(config)?;
    engine.run(&mut Bounce::new())?;
    Ok(())
}
