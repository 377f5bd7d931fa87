//! Staggered anchor lattice
//!
//! Anchors start one spacing above and left of the surface and continue one
//! spacing past its far edges, so tiles reach every border without a seam.
//! Coordinates accumulate by repeated addition of the spacing, which keeps
//! positions identical to an incremental walk for fractional spacings.
//!
//! Within a row, odd columns drop by half a spacing. The stagger follows the
//! column index, alternating left to right, and restarts at column zero on
//! every row.

use crate::pattern::config::PatternConfig;
use kurbo::Point;
use std::iter::FusedIterator;

/// Where one tile goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index within the row
    pub column: usize,
    /// Lattice point before centring and stagger
    pub anchor: Point,
    /// Anchor plus offsets: the top-left corner of an unrotated tile and the
    /// pivot of a rotated one
    pub position: Point,
}

/// Iterator over tile placements in paint order (row-major)
#[derive(Debug, Clone)]
pub struct Placements {
    spacing: f64,
    offset_x: f64,
    half_spacing: f64,
    x_limit: f64,
    y_limit: f64,
    x: f64,
    y: f64,
    row: usize,
    column: usize,
}

/// Horizontal offset centring a tile within its spacing cell
pub fn centring_offset(spacing: f64, tile_size: f64) -> f64 {
    (spacing - tile_size) / 2.0
}

/// Vertical offset for a tile in `column`, including the stagger
pub fn vertical_offset(spacing: f64, tile_size: f64, column: usize) -> f64 {
    centring_offset(spacing, tile_size) + ((column % 2) as f64 * (spacing / 2.0))
}

/// Walk the anchor lattice for `config`
pub fn placements(config: &PatternConfig<'_>) -> Placements {
    let spacing = config.spacing();
    Placements {
        spacing,
        offset_x: centring_offset(spacing, config.tile_size()),
        half_spacing: spacing / 2.0,
        x_limit: config.surface_width() + spacing,
        y_limit: config.surface_height() + spacing,
        x: -spacing,
        y: -spacing,
        row: 0,
        column: 0,
    }
}

impl Iterator for Placements {
    type Item = TilePlacement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.y > self.y_limit {
            return None;
        }
        if self.x > self.x_limit {
            self.y += self.spacing;
            self.row += 1;
            self.x = -self.spacing;
            self.column = 0;
            if self.y > self.y_limit {
                return None;
            }
        }

        let anchor = Point::new(self.x, self.y);
        let offset_y = self.offset_x + ((self.column % 2) as f64 * self.half_spacing);
        let placement = TilePlacement {
            row: self.row,
            column: self.column,
            anchor,
            position: Point::new(anchor.x + self.offset_x, anchor.y + offset_y),
        };

        self.x += self.spacing;
        self.column += 1;
        Some(placement)
    }
}

impl FusedIterator for Placements {}

fn steps(limit: f64, spacing: f64) -> usize {
    let mut count = 0;
    let mut coordinate = -spacing;
    while coordinate <= limit {
        count += 1;
        coordinate += spacing;
    }
    count
}

/// Number of (columns, rows) in the lattice for `config`
pub fn grid_extent(config: &PatternConfig<'_>) -> (usize, usize) {
    let spacing = config.spacing();
    (
        steps(config.surface_width() + spacing, spacing),
        steps(config.surface_height() + spacing, spacing),
    )
}

/// Number of tiles a render of `config` draws
pub fn tile_count(config: &PatternConfig<'_>) -> usize {
    let (columns, rows) = grid_extent(config);
    columns * rows
}
