//! Turtle-style pen over a surface
//!
//! The pen keeps position, heading, stroke state and an optional fill path.
//! While a fill is open every position change extends the fill polygon;
//! stroking is deferred until the fill is painted so outlines stay on top.

use crate::canvas::palette::{self, Colour};
use crate::canvas::raster;
use crate::canvas::surface::Surface;
use crate::math::geometry::{arc_segments, heading_vector, normalise_degrees};

/// Drawing cursor with turtle semantics
pub struct Pen<'a> {
    surface: &'a mut Surface,
    position: [f64; 2],
    heading: f64,
    down: bool,
    width: f64,
    stroke: Colour,
    fill: Colour,
    fill_path: Option<Vec<[f64; 2]>>,
    deferred_strokes: Vec<[[f64; 2]; 2]>,
}

impl<'a> Pen<'a> {
    /// Create a pen at the origin, facing east, pen up
    pub fn new(surface: &'a mut Surface) -> Self {
        Self {
            surface,
            position: [0.0, 0.0],
            heading: 0.0,
            down: false,
            width: 1.0,
            stroke: palette::BLACK,
            fill: palette::WHITE,
            fill_path: None,
            deferred_strokes: Vec::new(),
        }
    }

    /// Current position in turtle coordinates
    pub const fn position(&self) -> [f64; 2] {
        self.position
    }

    /// Current heading in degrees
    pub const fn heading(&self) -> f64 {
        self.heading
    }

    /// Lift the pen; subsequent moves stop stroking
    pub const fn pen_up(&mut self) {
        self.down = false;
    }

    /// Lower the pen; subsequent moves stroke
    pub const fn pen_down(&mut self) {
        self.down = true;
    }

    /// Set the stroke width in pixels
    pub const fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Set the stroke colour
    pub const fn set_stroke(&mut self, colour: Colour) {
        self.stroke = colour;
    }

    /// Set the fill colour used by the next `end_fill`
    pub const fn set_fill(&mut self, colour: Colour) {
        self.fill = colour;
    }

    /// Face an absolute heading in degrees
    pub fn set_heading(&mut self, degrees: f64) {
        self.heading = normalise_degrees(degrees);
    }

    /// Turn left by the given degrees
    pub fn left(&mut self, degrees: f64) {
        self.set_heading(self.heading + degrees);
    }

    /// Turn right by the given degrees
    pub fn right(&mut self, degrees: f64) {
        self.set_heading(self.heading - degrees);
    }

    /// Move to an absolute position, stroking if the pen is down
    pub fn goto(&mut self, target: [f64; 2]) {
        if self.down {
            if self.fill_path.is_some() {
                self.deferred_strokes.push([self.position, target]);
            } else {
                raster::stroke_line(self.surface, self.position, target, self.width, self.stroke);
            }
        }
        if let Some(path) = self.fill_path.as_mut() {
            path.push(target);
        }
        self.position = target;
    }

    /// Move forward along the current heading
    pub fn forward(&mut self, distance: f64) {
        let [dx, dy] = heading_vector(self.heading);
        let target = [
            distance.mul_add(dx, self.position[0]),
            distance.mul_add(dy, self.position[1]),
        ];
        self.goto(target);
    }

    /// Move backward along the current heading without turning
    pub fn backward(&mut self, distance: f64) {
        self.forward(-distance);
    }

    /// Trace a circular arc
    ///
    /// The centre lies 90° to the left of the heading for positive radii and
    /// to the right for negative radii. A positive radius turns the pen left
    /// by `extent` degrees, a negative radius right; a negative extent traces
    /// the arc backwards. `circle(r, 360.0)` draws a full circle and returns
    /// to the start.
    pub fn circle(&mut self, radius: f64, extent: f64) {
        let side = if radius >= 0.0 { 1.0 } else { -1.0 };
        let magnitude = radius.abs();
        let [cx, cy] = heading_vector(self.heading + side * 90.0);
        let centre = [
            magnitude.mul_add(cx, self.position[0]),
            magnitude.mul_add(cy, self.position[1]),
        ];
        let start_angle = self.heading - side * 90.0;
        let sweep = side * extent;

        let segments = arc_segments(radius, extent);
        for segment in 1..=segments {
            let angle = start_angle + sweep * segment as f64 / segments as f64;
            let [ax, ay] = heading_vector(angle);
            self.goto([
                magnitude.mul_add(ax, centre[0]),
                magnitude.mul_add(ay, centre[1]),
            ]);
        }
        self.set_heading(self.heading + side * extent);
    }

    /// Paint a filled dot of the given diameter in the stroke colour
    pub fn dot(&mut self, diameter: f64) {
        raster::fill_disc(self.surface, self.position, diameter / 2.0, self.stroke);
    }

    /// Begin recording a fill polygon at the current position
    pub fn begin_fill(&mut self) {
        self.fill_path = Some(vec![self.position]);
        self.deferred_strokes.clear();
    }

    /// Close the fill polygon, paint it, then stroke the recorded outline
    pub fn end_fill(&mut self) {
        if let Some(path) = self.fill_path.take() {
            raster::fill_polygon(self.surface, &path, self.fill);
        }
        for [from, to] in std::mem::take(&mut self.deferred_strokes) {
            raster::stroke_line(self.surface, from, to, self.width, self.stroke);
        }
    }

    /// Borrow the surface being drawn on
    pub const fn surface(&self) -> &Surface {
        self.surface
    }
}
