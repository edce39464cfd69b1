//! Ecliptic longitude helpers.
//!
//! Every orb check in the crate goes through [`angular_separation`], and every
//! house or angle comparison normalizes its inputs with [`normalize`] first.

/// Full circle in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

/// Width of one zodiac sign in degrees.
pub const SIGN_WIDTH: f64 = 30.0;

/// Normalize a longitude into `[0, 360)`.
///
/// Negative and oversized inputs wrap. `NaN` passes through unchanged so that
/// callers can treat it as "no position".
pub fn normalize(longitude: f64) -> f64 {
    let wrapped = longitude.rem_euclid(FULL_CIRCLE);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= FULL_CIRCLE {
        0.0
    } else {
        wrapped
    }
}

/// Shortest arc between two longitudes, in `[0, 180]`.
///
/// Uses `|((a - b + 540) mod 360) - 180|`, which handles the 0°/360° seam
/// without normalizing either input first.
pub fn angular_separation(a: f64, b: f64) -> f64 {
    ((a - b + 540.0).rem_euclid(FULL_CIRCLE) - 180.0).abs()
}

/// Sign index (0 = Aries .. 11 = Pisces) for a longitude.
pub fn sign_index(longitude: f64) -> usize {
    ((normalize(longitude) / SIGN_WIDTH) as usize) % 12
}
