//! PNG output of rendered surfaces

use crate::io::error::{PatternError, Result, file_system};
use crate::surface::RasterSurface;
use std::path::Path;

/// Write the pixels of `surface` to `output_path` as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_surface_png(surface: &RasterSurface, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    surface
        .image()
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|source| PatternError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;

    log::info!("wrote preview to {}", output_path.display());
    Ok(())
}
