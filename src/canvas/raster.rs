//! Line, disc and polygon rasterisation
//!
//! Aliased scanline rendering in turtle coordinates. Polygon filling uses the
//! even-odd rule, which matches how overlapping pen paths fill.

use crate::canvas::palette::Colour;
use crate::canvas::surface::Surface;
use crate::math::geometry::{distance_squared, lerp};

/// Paint a filled disc centred on a turtle coordinate
pub fn fill_disc(surface: &mut Surface, centre: [f64; 2], radius: f64, colour: Colour) {
    let r = radius.max(0.5);
    let r_squared = r * r;
    let mut y = (centre[1] - r).floor() + 0.5;
    let y_end = centre[1] + r;
    while y <= y_end {
        let mut x = (centre[0] - r).floor() + 0.5;
        let x_end = centre[0] + r;
        while x <= x_end {
            if distance_squared([x, y], centre) <= r_squared {
                surface.set(x, y, colour);
            }
            x += 1.0;
        }
        y += 1.0;
    }
}

/// Stroke a straight line of the given width between two turtle coordinates
pub fn stroke_line(surface: &mut Surface, from: [f64; 2], to: [f64; 2], width: f64, colour: Colour) {
    let length = distance_squared(from, to).sqrt();
    if length < f64::EPSILON {
        fill_disc(surface, from, width / 2.0, colour);
        return;
    }

    // Stamp along the segment at sub-pixel spacing so no gaps open up
    let steps = (length / 0.5).ceil() as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let point = [lerp(from[0], to[0], t), lerp(from[1], to[1], t)];
        if width <= 1.5 {
            surface.set(point[0], point[1], colour);
        } else {
            fill_disc(surface, point, width / 2.0, colour);
        }
    }
}

/// Fill a closed polygon using the even-odd rule
///
/// The polygon is implicitly closed between the last and first vertices.
/// Degenerate inputs with fewer than three vertices paint nothing.
pub fn fill_polygon(surface: &mut Surface, points: &[[f64; 2]], colour: Colour) {
    if points.len() < 3 {
        return;
    }

    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for point in points {
        min_y = min_y.min(point[1]);
        max_y = max_y.max(point[1]);
    }
    if !min_y.is_finite() || !max_y.is_finite() {
        return;
    }

    let mut crossings = Vec::new();
    let mut y = min_y.floor() + 0.5;
    while y <= max_y {
        crossings.clear();
        for (index, point) in points.iter().enumerate() {
            let next = points.get(index + 1).unwrap_or_else(|| {
                // Implicit closing edge back to the first vertex
                points.first().unwrap_or(point)
            });
            let (a, b) = (*point, *next);
            let spans = (a[1] <= y && y < b[1]) || (b[1] <= y && y < a[1]);
            if spans {
                let t = (y - a[1]) / (b[1] - a[1]);
                crossings.push(a[0] + t * (b[0] - a[0]));
            }
        }
        crossings.sort_by(f64::total_cmp);

        let mut pairs = crossings.chunks_exact(2);
        for pair in &mut pairs {
            if let [start, end] = pair {
                let mut x = start.floor() + 0.5;
                while x <= *end {
                    surface.set(x, y, colour);
                    x += 1.0;
                }
            }
        }
        y += 1.0;
    }
}
