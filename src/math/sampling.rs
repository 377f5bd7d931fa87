//! Image sampling at continuous source coordinates
//!
//! Coordinates are in source pixel units with pixel centres at `n + 0.5`.
//! Lookups outside the image clamp to the nearest edge pixel.

use crate::math::compositing::to_unit;
use image::{Rgba, RgbaImage};

/// Filter used when an image is scaled or rotated onto a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Smoothing {
    /// Pick the texel containing the sample point
    Nearest,
    /// Interpolate the four surrounding texels in premultiplied space
    #[default]
    Bilinear,
}

fn texel(image: &RgbaImage, x: i64, y: i64) -> Rgba<u8> {
    let max_x = i64::from(image.width()) - 1;
    let max_y = i64::from(image.height()) - 1;
    let cx = x.clamp(0, max_x.max(0)) as u32;
    let cy = y.clamp(0, max_y.max(0)) as u32;
    image
        .get_pixel_checked(cx, cy)
        .copied()
        .unwrap_or(Rgba([0, 0, 0, 0]))
}

/// Sample `image` at `(u, v)`, returning straight-alpha unit-range channels
pub fn sample(image: &RgbaImage, u: f64, v: f64, smoothing: Smoothing) -> [f32; 4] {
    match smoothing {
        Smoothing::Nearest => to_unit(texel(image, u.floor() as i64, v.floor() as i64)),
        Smoothing::Bilinear => bilinear(image, u, v),
    }
}

fn premultiplied(pixel: Rgba<u8>) -> [f32; 4] {
    let [r, g, b, a] = to_unit(pixel);
    [r * a, g * a, b * a, a]
}

fn bilinear(image: &RgbaImage, u: f64, v: f64) -> [f32; 4] {
    let x = u - 0.5;
    let y = v - 0.5;
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = (x - x0) as f32;
    let fy = (y - y0) as f32;
    let (ix, iy) = (x0 as i64, y0 as i64);

    let corners = [
        (premultiplied(texel(image, ix, iy)), (1.0 - fx) * (1.0 - fy)),
        (premultiplied(texel(image, ix + 1, iy)), fx * (1.0 - fy)),
        (premultiplied(texel(image, ix, iy + 1)), (1.0 - fx) * fy),
        (premultiplied(texel(image, ix + 1, iy + 1)), fx * fy),
    ];

    let mut acc = [0.0_f32; 4];
    for (values, weight) in corners {
        for (sum, channel) in acc.iter_mut().zip(values) {
            *sum = channel.mul_add(weight, *sum);
        }
    }

    let [r, g, b, a] = acc;
    if a <= f32::EPSILON {
        return [0.0; 4];
    }
    [r / a, g / a, b / a, a]
}
