//! Drawing surfaces the tiler paints onto
//!
//! The [`Surface`] trait is the small subset of a 2D canvas context the
//! tiler needs: rectangle clears and fills, translate/rotate of the current transform,
//! and image draws into a destination rectangle. Coordinates are pixels with
//! the origin at the top-left and y increasing downward, so positive angles
//! turn clockwise on screen.

/// Software raster surface backed by an RGBA image buffer
pub mod raster;
/// Surface that records draw commands instead of rasterising them
pub mod recording;

pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface};

use image::{Rgba, RgbaImage};
use kurbo::{Affine, Rect};

/// A 2D drawing target with a canvas-style current transform
///
/// `translate` and `rotate` post-multiply the current transform, so each
/// operation acts in the local frame established by the previous ones.
pub trait Surface {
    /// Surface width in pixels
    fn width(&self) -> f64;

    /// Surface height in pixels
    fn height(&self) -> f64;

    /// Current user-to-device transform
    fn transform(&self) -> Affine;

    /// Reset `rect`, given in the current local frame, to transparent black
    ///
    /// Unlike [`Surface::fill_rect`] this replaces pixels instead of
    /// blending over them.
    fn clear_rect(&mut self, rect: Rect);

    /// Fill `rect`, given in the current local frame, with a solid color
    /// composited source-over
    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>);

    /// Move the local origin by `(dx, dy)`
    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotate the local frame by `radians` about its origin
    fn rotate(&mut self, radians: f64);

    /// Draw `image` scaled to fill `dest`, given in the current local frame
    fn draw_image(&mut self, image: &RgbaImage, dest: Rect);
}
