//! Tests for the staggered anchor lattice

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use kurbo::Point;
    use patternize::pattern::layout::{
        centring_offset, grid_extent, placements, tile_count, vertical_offset,
    };
    use patternize::pattern::{PatternConfig, PatternParameters, TilePlacement};
    use std::collections::BTreeSet;

    fn config(
        image: &RgbaImage,
        width: f64,
        height: f64,
        spacing: f64,
        tile_size: f64,
    ) -> PatternConfig<'_> {
        let parameters = PatternParameters {
            spacing,
            tile_size,
            ..PatternParameters::default()
        };
        PatternConfig::new(width, height, parameters, image)
            .unwrap_or_else(|error| unreachable!("test config rejected: {error}"))
    }

    #[test]
    fn test_offsets() {
        assert!((centring_offset(100.0, 60.0) - 20.0).abs() < f64::EPSILON);
        assert!((centring_offset(100.0, 140.0) + 20.0).abs() < f64::EPSILON);
        assert!((vertical_offset(100.0, 60.0, 0) - 20.0).abs() < f64::EPSILON);
        assert!((vertical_offset(100.0, 60.0, 3) - 70.0).abs() < f64::EPSILON);
        assert!((vertical_offset(100.0, 60.0, 4) - 20.0).abs() < f64::EPSILON);
    }

    // Tests lattice bounds for a 300x500 surface at spacing 100
    // Verified by using a strict less-than loop bound
    #[test]
    fn test_grid_extends_one_spacing_past_every_edge() {
        let image = RgbaImage::new(1, 1);
        let config = config(&image, 300.0, 500.0, 100.0, 100.0);

        assert_eq!(grid_extent(&config), (6, 8));
        assert_eq!(tile_count(&config), 48);

        let all: Vec<TilePlacement> = placements(&config).collect();
        assert_eq!(all.len(), 48);

        let xs: BTreeSet<i64> = all.iter().map(|p| p.anchor.x as i64).collect();
        let ys: BTreeSet<i64> = all.iter().map(|p| p.anchor.y as i64).collect();
        assert_eq!(
            xs.into_iter().collect::<Vec<_>>(),
            vec![-100, 0, 100, 200, 300, 400]
        );
        assert_eq!(
            ys.into_iter().collect::<Vec<_>>(),
            vec![-100, 0, 100, 200, 300, 400, 500, 600]
        );
    }

    #[test]
    fn test_first_and_last_placements() {
        let image = RgbaImage::new(1, 1);
        let config = config(&image, 300.0, 500.0, 100.0, 100.0);
        let all: Vec<TilePlacement> = placements(&config).collect();

        let first = all.first().copied();
        assert_eq!(
            first,
            Some(TilePlacement {
                row: 0,
                column: 0,
                anchor: Point::new(-100.0, -100.0),
                position: Point::new(-100.0, -100.0),
            })
        );

        let second = all.get(1).copied();
        assert_eq!(second.map(|p| p.position), Some(Point::new(0.0, -50.0)));

        let last = all.last().copied();
        assert_eq!(
            last,
            Some(TilePlacement {
                row: 7,
                column: 5,
                anchor: Point::new(400.0, 600.0),
                position: Point::new(400.0, 650.0),
            })
        );
    }

    // Tests that the stagger alternates by column within every row
    // Verified by keying the stagger on the row index
    #[test]
    fn test_stagger_alternates_by_column() {
        let image = RgbaImage::new(1, 1);
        let config = config(&image, 220.0, 170.0, 50.0, 30.0);

        for placement in placements(&config) {
            let offset_x = placement.position.x - placement.anchor.x;
            let offset_y = placement.position.y - placement.anchor.y;
            let expected_y = if placement.column % 2 == 0 { 10.0 } else { 35.0 };
            assert!((offset_x - 10.0).abs() < 1e-9, "{placement:?}");
            assert!((offset_y - expected_y).abs() < 1e-9, "{placement:?}");
        }
    }

    #[test]
    fn test_column_index_resets_each_row() {
        let image = RgbaImage::new(1, 1);
        let config = config(&image, 90.0, 90.0, 40.0, 40.0);
        let all: Vec<TilePlacement> = placements(&config).collect();
        let (columns, rows) = grid_extent(&config);

        assert_eq!(all.len(), columns * rows);
        for (index, placement) in all.iter().enumerate() {
            assert_eq!(placement.row, index / columns);
            assert_eq!(placement.column, index % columns);
            if placement.column == 0 {
                assert!((placement.anchor.x + 40.0).abs() < f64::EPSILON);
            }
        }
    }

    // Tests anchors follow repeated addition for fractional spacing
    // Verified by computing anchors as index * spacing
    #[test]
    fn test_anchors_accumulate_spacing() {
        let image = RgbaImage::new(1, 1);
        let spacing = 33.3;
        let config = config(&image, 200.0, 40.0, spacing, 20.0);

        let mut expected_x = -spacing;
        for placement in placements(&config).take_while(|p| p.row == 0) {
            assert_eq!(placement.anchor.x.to_bits(), expected_x.to_bits());
            expected_x += spacing;
        }
        assert!(expected_x > 200.0 + spacing);
    }

    #[test]
    fn test_iterator_is_fused() {
        let image = RgbaImage::new(1, 1);
        let config = config(&image, 10.0, 10.0, 10.0, 10.0);
        let mut walk = placements(&config);
        assert_eq!(walk.by_ref().count(), 16);
        assert!(walk.next().is_none());
        assert!(walk.next().is_none());
    }
}
