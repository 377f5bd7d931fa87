//! Pattern configuration, anchor layout and the tiling renderer
//!
//! This module contains:
//! - The per-render configuration value and its validation
//! - The staggered anchor lattice walked by the renderer
//! - The renderer painting background and tiles onto a surface

/// Render configuration and user-facing parameters
pub mod config;
/// Anchor lattice and per-tile placement
pub mod layout;
/// Background fill and tile drawing
pub mod tiler;

pub use config::{PatternConfig, PatternParameters};
pub use layout::TilePlacement;
pub use tiler::render;
