//! Software rasteriser for the [`Surface`] operations
//!
//! Every primitive is drawn by inverse mapping: the destination rectangle is
//! pushed through the current transform to find a device-space bounding box,
//! and each pixel centre inside it is mapped back into the rectangle's local
//! frame. Pixels whose centre lands inside the rectangle are shaded and
//! composited source-over, except for clears, which overwrite them.

use crate::math::compositing::{source_over, to_unit};
use crate::math::sampling::{Smoothing, sample};
use crate::surface::Surface;
use image::{Rgba, RgbaImage};
use kurbo::{Affine, Point, Rect, Vec2};

// Transforms with a smaller determinant collapse the rectangle to a line
const MIN_DETERMINANT: f64 = 1e-12;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// RGBA pixel buffer with a current transform
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixels: RgbaImage,
    transform: Affine,
    smoothing: Smoothing,
}

impl RasterSurface {
    /// Create a transparent surface with the identity transform
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            transform: Affine::IDENTITY,
            smoothing: Smoothing::default(),
        }
    }

    /// Select the filter used by [`Surface::draw_image`]
    #[must_use]
    pub const fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Filter used by [`Surface::draw_image`]
    pub const fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    /// Reset every pixel to transparent and the transform to identity
    pub fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = TRANSPARENT;
        }
        self.transform = Affine::IDENTITY;
    }

    /// Replace the buffer with a transparent one of the new size
    ///
    /// Like resizing a canvas element, previous content and transform are
    /// discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::new(width, height);
        self.transform = Affine::IDENTITY;
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume the surface, returning its pixels
    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    // Device-space pixel span covered by `rect` under the current transform
    fn device_bounds(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x0, rect.y1),
            Point::new(rect.x1, rect.y1),
        ]
        .map(|corner| self.transform * corner);

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for corner in corners {
            min_x = min_x.min(corner.x);
            min_y = min_y.min(corner.y);
            max_x = max_x.max(corner.x);
            max_y = max_y.max(corner.y);
        }

        let width = f64::from(self.pixels.width());
        let height = f64::from(self.pixels.height());
        let x_start = min_x.floor().clamp(0.0, width);
        let y_start = min_y.floor().clamp(0.0, height);
        let x_end = max_x.ceil().clamp(0.0, width);
        let y_end = max_y.ceil().clamp(0.0, height);

        (x_start < x_end && y_start < y_end).then_some((
            x_start as u32,
            y_start as u32,
            x_end as u32,
            y_end as u32,
        ))
    }

    // Visit every device pixel whose centre maps inside `rect`, passing the
    // pixel and the centre in the rectangle's local frame
    fn cover(&mut self, rect: Rect, mut apply: impl FnMut(&mut Rgba<u8>, Point)) {
        let rect = rect.abs();
        if rect.is_zero_area() || self.transform.determinant().abs() < MIN_DETERMINANT {
            return;
        }
        let Some((x_start, y_start, x_end, y_end)) = self.device_bounds(rect) else {
            return;
        };
        let inverse = self.transform.inverse();

        for y in y_start..y_end {
            for x in x_start..x_end {
                let centre = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let local = inverse * centre;
                if !rect.contains(local) {
                    continue;
                }
                if let Some(pixel) = self.pixels.get_pixel_mut_checked(x, y) {
                    apply(pixel, local);
                }
            }
        }
    }

    fn paint(&mut self, rect: Rect, mut shade: impl FnMut(Point) -> [f32; 4]) {
        self.cover(rect, |pixel, local| source_over(pixel, shade(local)));
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> f64 {
        f64::from(self.pixels.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.pixels.height())
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.cover(rect, |pixel, _| *pixel = TRANSPARENT);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        let unit = to_unit(color);
        self.paint(rect, |_| unit);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform * Affine::translate(Vec2::new(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform * Affine::rotate(radians);
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: Rect) {
        if image.width() == 0 || image.height() == 0 {
            return;
        }
        let dest = dest.abs();
        let scale_x = f64::from(image.width()) / dest.width();
        let scale_y = f64::from(image.height()) / dest.height();
        let smoothing = self.smoothing;

        self.paint(dest, |local| {
            let u = (local.x - dest.x0) * scale_x;
            let v = (local.y - dest.y0) * scale_y;
            sample(image, u, v, smoothing)
        });
    }
}
