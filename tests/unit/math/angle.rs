//! Tests for degree normalisation and the axis-aligned shortcut

#[cfg(test)]
mod tests {
    use patternize::math::angle::{TO_RADIANS, is_axis_aligned, normalize_degrees, to_radians};
    use std::f64::consts::PI;

    // Tests that the remainder keeps the sign of the input
    // Verified by switching to rem_euclid
    #[test]
    fn test_normalize_degrees_preserves_sign() {
        assert!((normalize_degrees(450.0) - 90.0).abs() < 1e-12);
        assert!((normalize_degrees(-450.0) + 90.0).abs() < 1e-12);
        assert!((normalize_degrees(-90.0) + 90.0).abs() < 1e-12);
        assert!(normalize_degrees(720.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_radians_half_turn() {
        assert!((to_radians(180.0) - PI).abs() < 1e-12);
        assert!((to_radians(-180.0) + PI).abs() < 1e-12);
        assert!((to_radians(540.0) - PI).abs() < 1e-12);
        assert!((TO_RADIANS * 90.0 - PI / 2.0).abs() < 1e-12);
    }

    // Tests which rotations skip the transform path
    // Verified by comparing degrees without normalisation
    #[test]
    fn test_is_axis_aligned_only_for_whole_turns() {
        assert!(is_axis_aligned(0.0));
        assert!(is_axis_aligned(360.0));
        assert!(is_axis_aligned(-720.0));
        assert!(!is_axis_aligned(45.0));
        assert!(!is_axis_aligned(180.0));
        assert!(!is_axis_aligned(-1.0));
        assert!(!is_axis_aligned(0.001));
    }
}
