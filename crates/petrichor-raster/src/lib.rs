//! `petrichor-raster` - window-free software rasterization
//!
//! This crate provides the CPU-side drawing layer of the petrichor
//! framework: RGBA colors, owned pixel surfaces, and basic shape
//! rasterization (lines, rectangles, circles, triangles). It has no
//! windowing dependency and can be used on its own for offscreen
//! rendering.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod color;
mod draw;
pub mod surface;

pub use color::Color;
pub use surface::Surface;
