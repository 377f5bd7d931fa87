//! Input/output around the renderer
//!
//! Asset decoding, color parsing, the preview session that repaints on
//! change, PNG output and the command-line front end.

/// Tile image sources and the loader that decodes them
pub mod assets;
/// Command-line arguments and batch processing
pub mod cli;
/// Background color parsing
pub mod color;
/// Defaults and control ranges
pub mod configuration;
/// Error type and constructors
pub mod error;
/// PNG output of rendered surfaces
pub mod image;
/// Batch progress display
pub mod progress;
/// Live preview state
pub mod session;
