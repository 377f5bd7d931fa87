//! Preview defaults and control ranges

use std::ops::RangeInclusive;

// Initial preview state
/// Default surface width in pixels
pub const DEFAULT_SURFACE_WIDTH: u32 = 300;
/// Default surface height in pixels
pub const DEFAULT_SURFACE_HEIGHT: u32 = 500;
/// Default distance between tile anchors
pub const DEFAULT_SPACING: f64 = 50.0;
/// Default drawn tile edge length
pub const DEFAULT_TILE_SIZE: f64 = 50.0;
/// Default per-tile rotation in degrees
pub const DEFAULT_ROTATION: f64 = 0.0;
/// Default background color, any form accepted by [`crate::io::color::Color`]
pub const DEFAULT_BACKGROUND: &str = "cyan";

// Control ranges, mirroring the slider bounds of the interactive preview
/// Accepted spacing values
pub const SPACING_RANGE: RangeInclusive<f64> = 10.0..=200.0;
/// Accepted tile size values
pub const TILE_SIZE_RANGE: RangeInclusive<f64> = 10.0..=200.0;
/// Accepted rotation values in degrees
pub const ROTATION_RANGE: RangeInclusive<f64> = -180.0..=180.0;

// Surfaces larger than this are refused before allocation
/// Maximum surface edge length in pixels
pub const MAX_SURFACE_DIMENSION: u32 = 16_384;

// Keeps `x += spacing` strictly increasing across the whole lattice walk
/// Maximum number of spacings a surface edge may span
pub const MAX_LATTICE_STEPS: f64 = 1_048_576.0;

// Bundled motif resolutions
/// Edge length of the small bundled motif
pub const SAMPLE_MINI_SIZE: u32 = 16;
/// Edge length of the full bundled motif
pub const SAMPLE_SIZE: u32 = 64;

// Output settings
/// Suffix added to preview filenames
pub const OUTPUT_SUFFIX: &str = "_pattern";
/// Filename used when rendering the bundled motif without a target
pub const BUNDLED_OUTPUT_NAME: &str = "sample_pattern.png";
/// Extensions picked up when a directory is processed
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
