//! Rotation angle handling
//!
//! Angles arrive in degrees from the parameter source and are reduced with a
//! sign-preserving remainder, so `-90` stays `-90` and `450` becomes `90`.

use std::f64::consts::PI;

/// Multiplier converting degrees to radians
pub const TO_RADIANS: f64 = PI / 180.0;

/// Reduce an angle into the open interval (-360, 360), keeping its sign
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees % 360.0
}

/// Convert a rotation in degrees to radians after normalisation
pub fn to_radians(degrees: f64) -> f64 {
    normalize_degrees(degrees) * TO_RADIANS
}

/// Whether a rotation leaves tiles axis-aligned (a whole number of turns)
// Only an exact zero remainder selects the untransformed path
#[allow(clippy::float_cmp)]
pub fn is_axis_aligned(degrees: f64) -> bool {
    to_radians(degrees) == 0.0
}
