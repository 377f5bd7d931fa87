//! Tiling renderer

use crate::math::angle;
use crate::pattern::config::PatternConfig;
use crate::pattern::layout::placements;
use crate::surface::Surface;
use kurbo::{Point, Rect, Size};

/// Paint the background and every tile of `config` onto `surface`
///
/// The whole `surface_width` × `surface_height` rectangle is cleared and then
/// filled with the background first, so each call fully replaces earlier
/// content even when the background is translucent. Tiles are drawn in row-major
/// order. With a rotation that is a whole number of turns, each tile is drawn
/// axis-aligned with its top-left corner at the placement position.
/// Otherwise the surface is translated to the position, rotated, the tile is
/// drawn centred on the new origin, and both steps are undone in reverse so
/// the transform is back where it started before the next tile.
///
/// The image must already be decoded; drawing never waits.
pub fn render<S: Surface + ?Sized>(surface: &mut S, config: &PatternConfig<'_>) {
    debug_assert!(config.spacing() > 0.0, "spacing must be positive");

    let bounds = Rect::new(0.0, 0.0, config.surface_width(), config.surface_height());
    surface.clear_rect(bounds);
    surface.fill_rect(bounds, config.background());

    let image = config.image();
    let size = config.tile_size();
    let tile = Size::new(size, size);
    let angle = angle::to_radians(config.rotation_degrees());
    let rotated = !angle::is_axis_aligned(config.rotation_degrees());
    // Centred on the rotated origin
    let pivoted = Rect::from_origin_size(Point::new(-(size / 2.0), -(size / 2.0)), tile);

    let mut drawn = 0_usize;
    for placement in placements(config) {
        let position = placement.position;
        if rotated {
            surface.translate(position.x, position.y);
            surface.rotate(angle);
            surface.draw_image(image, pivoted);
            surface.rotate(-angle);
            surface.translate(-position.x, -position.y);
        } else {
            surface.draw_image(image, Rect::from_origin_size(position, tile));
        }
        drawn += 1;
    }

    log::debug!(
        "rendered {drawn} tiles on {}x{} surface (spacing {}, size {}, rotation {}°)",
        config.surface_width(),
        config.surface_height(),
        config.spacing(),
        size,
        config.rotation_degrees()
    );
}
