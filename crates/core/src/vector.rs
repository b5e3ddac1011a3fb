//! Polar/cartesian conversions and the logical-to-screen mapping.
//!
//! Logical offsets use the math convention (y up, angles counter-clockwise
//! from +x, in degrees). Pixel space has y increasing downward. The flip
//! between the two lives in [`to_screen`] and [`from_screen`] only;
//! [`from_polar`] never applies it.

use glam::DVec2;

/// Cartesian vector from a radius and an angle in degrees.
pub fn from_polar(radius: f64, angle_degrees: f64) -> DVec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    DVec2::new(radius * cos, radius * sin)
}

/// `(radius, angle_degrees)` of a cartesian vector. The angle lies in
/// (-180, 180] as returned by `atan2`.
pub fn to_polar(v: DVec2) -> (f64, f64) {
    (v.length(), v.y.atan2(v.x).to_degrees())
}

/// Absolute pixel position of a logical offset around `center`.
pub fn to_screen(offset: DVec2, center: DVec2) -> DVec2 {
    DVec2::new(center.x + offset.x, center.y - offset.y)
}

/// Logical offset of a pixel position relative to `center`. Inverse of [`to_screen`].
pub fn from_screen(position: DVec2, center: DVec2) -> DVec2 {
    DVec2::new(position.x - center.x, center.y - position.y)
}

/// Wraps an angle in degrees into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
