//! Angle conversions, heading vectors and arc sampling
//!
//! Headings follow the turtle convention: degrees measured counterclockwise
//! from the positive x axis, with the y axis pointing up.

use num_traits::Float;

/// Unit vector pointing along a heading given in degrees
pub fn heading_vector(degrees: f64) -> [f64; 2] {
    let radians = degrees.to_radians();
    [radians.cos(), radians.sin()]
}

/// Normalise a heading into the `[0, 360)` range
pub fn normalise_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Linear interpolation between two values
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Number of chord segments needed to approximate an arc smoothly
///
/// Segment count grows with arc length so large arcs stay round while tiny
/// decorative curls do not waste work. Clamped to keep degenerate radii sane.
pub fn arc_segments(radius: f64, extent_degrees: f64) -> usize {
    let arc_length = radius.abs() * extent_degrees.abs().to_radians();
    let segments = (arc_length / 3.0).ceil() as usize;
    segments.clamp(4, 96)
}

/// Squared distance between two points
pub fn distance_squared(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    dx.mul_add(dx, dy * dy)
}
