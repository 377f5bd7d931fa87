//! Error types for asset loading, parameter validation and preview export

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all pattern operations
#[derive(Debug, Error)]
pub enum PatternError {
    /// Failed to load a source image from the filesystem
    #[error("Failed to load image '{}': {source}", path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        #[source]
        source: image::ImageError,
    },

    /// In-memory image data could not be decoded
    #[error("Failed to decode in-memory image ({len} bytes): {source}")]
    ImageDecode {
        /// Size of the encoded buffer
        len: usize,
        /// Underlying decoding error
        #[source]
        source: image::ImageError,
    },

    /// Failed to save the rendered surface
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        #[source]
        source: image::ImageError,
    },

    /// Pattern parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Background color string could not be parsed
    #[error("Invalid color '{input}': {reason}")]
    InvalidColor {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid color error
pub fn invalid_color(input: &str, reason: &'static str) -> PatternError {
    PatternError::InvalidColor {
        input: input.to_string(),
        reason,
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> PatternError {
    let path = path.into();
    move |source| PatternError::FileSystem {
        path,
        operation,
        source,
    }
}
