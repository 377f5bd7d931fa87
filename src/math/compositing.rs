//! Straight-alpha source-over blending onto 8-bit RGBA pixels

use image::Rgba;

/// Convert an 8-bit pixel to unit-range channels
pub fn to_unit(pixel: Rgba<u8>) -> [f32; 4] {
    pixel.0.map(|channel| f32::from(channel) / 255.0)
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Blend a unit-range straight-alpha color over `dst`
///
/// Fully opaque sources replace the destination exactly and fully
/// transparent sources leave it untouched.
pub fn source_over(dst: &mut Rgba<u8>, src: [f32; 4]) {
    let [sr, sg, sb, sa] = src;
    if sa <= 0.0 {
        return;
    }
    if sa >= 1.0 {
        *dst = Rgba([to_byte(sr), to_byte(sg), to_byte(sb), 255]);
        return;
    }

    let [dr, dg, db, da] = to_unit(*dst);
    let remaining = da * (1.0 - sa);
    let out_a = sa + remaining;
    let mix = |s: f32, d: f32| s.mul_add(sa, d * remaining) / out_a;

    *dst = Rgba([
        to_byte(mix(sr, dr)),
        to_byte(mix(sg, dg)),
        to_byte(mix(sb, db)),
        to_byte(out_a),
    ]);
}
