//! RGBA color representation.
//!
//! Colors are stored as four 8-bit channels and convert losslessly to
//! and from the packed `0xAARRGGBB` format that presentation backends
//! expect.

use serde::{Deserialize, Serialize};

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

/// Fully transparent black.
pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

/// Opaque white.
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Opaque black.
pub const BLACK: Color = Color::rgb(0, 0, 0);

/// Opaque red.
pub const RED: Color = Color::rgb(255, 0, 0);

/// Opaque green.
pub const GREEN: Color = Color::rgb(0, 255, 0);

/// Opaque blue.
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// Opaque yellow.
pub const YELLOW: Color = Color::rgb(255, 255, 0);

/// Opaque cyan.
pub const CYAN: Color = Color::rgb(0, 255, 255);

/// Opaque magenta.
pub const MAGENTA: Color = Color::rgb(255, 0, 255);

impl Color {
    /// Create an opaque color from red, green, and blue channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from all four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Return this color with a different alpha channel.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<Color> for u32 {
    /// Pack into `0xAARRGGBB`.
    fn from(color: Color) -> Self {
        (Self::from(color.a) << 24)
            | (Self::from(color.r) << 16)
            | (Self::from(color.g) << 8)
            | Self::from(color.b)
    }
}

impl From<u32> for Color {
    /// Unpack from `0xAARRGGBB`.
    #[allow(clippy::cast_possible_truncation)]
    fn from(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }
}
