//! Configuration management for petrichor.
//!
//! Settings are loaded with figment from defaults, an optional TOML
//! file, and environment variables, then validated before the engine
//! will accept them.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "petrichor";

/// Pixel scales the presentation backend supports.
const SUPPORTED_SCALES: [u8; 6] = [1, 2, 4, 8, 16, 32];

/// Engine configuration.
///
/// Configuration is loaded from (in order of precedence, highest
/// first):
/// 1. Environment variables (prefixed with `PETRICHOR_`, sections
///    separated with `__`, e.g. `PETRICHOR_WINDOW__WIDTH`)
/// 2. TOML config file at `~/.config/petrichor/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window configuration.
    pub window: WindowConfig,
    /// Frame loop configuration.
    pub frame: FrameConfig,
}

/// Window-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Framebuffer width in pixels.
    pub width: usize,
    /// Framebuffer height in pixels.
    pub height: usize,
    /// Allow the user to resize the window.
    pub resizable: bool,
    /// Integer pixel scale applied by the backend (1, 2, 4, 8, 16, or
    /// 32). The framebuffer keeps its configured size; the window is
    /// `scale` times larger.
    pub scale: u8,
}

/// Frame-loop-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Target frame rate the backend paces presentation to.
    /// Set to 0 for uncapped.
    pub target_fps: u32,
    /// Exit the frame loop when Escape is pressed.
    pub exit_on_esc: bool,
    /// Append the measured frame rate to the window title once per
    /// second.
    pub fps_in_title: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "petrichor".to_string(),
            width: 640,
            height: 360,
            resizable: false,
            scale: 1,
        }
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            exit_on_esc: true,
            fps_in_title: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or parsing fails, or if the merged
    /// configuration is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config file path.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or parsing fails, or if the merged
    /// configuration is invalid.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("PETRICHOR_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::config_validation(format!(
                "window dimensions must be non-zero (got {}x{})",
                self.window.width, self.window.height
            )));
        }

        if !SUPPORTED_SCALES.contains(&self.window.scale) {
            return Err(Error::config_validation(format!(
                "unsupported window scale {} (supported: {SUPPORTED_SCALES:?})",
                self.window.scale
            )));
        }

        Ok(())
    }
}
