//! Numeric helpers shared by the tiler and the raster surface

/// Degree normalisation and radian conversion
pub mod angle;
/// Source-over alpha compositing
pub mod compositing;
/// Nearest and bilinear image sampling
pub mod sampling;
