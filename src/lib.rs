//! Staggered image tiling for pattern previews
//!
//! A tile image is repeated over a 2D surface on a square lattice, with each
//! odd column dropped by half a spacing and every tile optionally rotated
//! about its own anchor. The renderer paints onto any [`surface::Surface`];
//! a software raster surface and a command-recording surface are provided.

#![forbid(unsafe_code)]

/// Asset loading, color parsing, preview session and CLI
pub mod io;
/// Angle, sampling and compositing helpers
pub mod math;
/// Pattern configuration, layout and rendering
pub mod pattern;
/// Drawing surfaces
pub mod surface;

pub use io::error::{PatternError, Result};
pub use pattern::{PatternConfig, PatternParameters, render};
