//! Tests for preview defaults and control ranges

#[cfg(test)]
mod tests {
    use patternize::io::color::Color;
    use patternize::io::configuration::{
        DEFAULT_BACKGROUND, DEFAULT_ROTATION, DEFAULT_SPACING, DEFAULT_SURFACE_HEIGHT,
        DEFAULT_SURFACE_WIDTH, DEFAULT_TILE_SIZE, MAX_SURFACE_DIMENSION, OUTPUT_SUFFIX,
        ROTATION_RANGE, SAMPLE_MINI_SIZE, SAMPLE_SIZE, SPACING_RANGE, SUPPORTED_EXTENSIONS,
        TILE_SIZE_RANGE,
    };

    // Tests that every default lies inside its control range
    // Verified by setting the default spacing to 5
    #[test]
    fn test_defaults_within_control_ranges() {
        assert!(SPACING_RANGE.contains(&DEFAULT_SPACING));
        assert!(TILE_SIZE_RANGE.contains(&DEFAULT_TILE_SIZE));
        assert!(ROTATION_RANGE.contains(&DEFAULT_ROTATION));
        assert!(DEFAULT_SURFACE_WIDTH <= MAX_SURFACE_DIMENSION);
        assert!(DEFAULT_SURFACE_HEIGHT <= MAX_SURFACE_DIMENSION);
    }

    #[test]
    fn test_default_background_parses_to_cyan() {
        let parsed = DEFAULT_BACKGROUND.parse::<Color>().ok();
        assert_eq!(parsed, Some(Color::rgb(0, 255, 255)));
    }

    #[test]
    fn test_output_and_asset_settings() {
        assert!(SAMPLE_MINI_SIZE < SAMPLE_SIZE);
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        assert!(SUPPORTED_EXTENSIONS.contains(&"png"));
        assert!(
            SUPPORTED_EXTENSIONS
                .iter()
                .all(|ext| ext.chars().all(|c| c.is_ascii_lowercase()))
        );
    }
}
