//! Leaving-home scene: night sky, tree and nest
//!
//! Variant A. A crescent moon and three stars over a tree holding a nest
//! with two eggs, and the bird in a sleep hat.

use crate::canvas::palette;
use crate::canvas::turtle::Pen;
use crate::scene::{backdrop, begin, bird, end};

/// Draw the scene into a cell of the given size at the pen's position
pub fn render(pen: &mut Pen<'_>, size: f64) {
    let anchor = pen.position();
    pen.set_heading(0.0);

    backdrop(pen, size, palette::MEDIUM_BLUE);

    let branch = size / 2.0;

    // Up to the moon
    pen.forward(size * 0.8);
    pen.left(90.0);
    pen.forward(size * 0.75);

    let moon = size / 8.0;
    let star = moon / 4.0;

    // Crescent: a yellow disc partially covered by a sky-coloured one
    pen.set_fill(palette::YELLOW);
    pen.begin_fill();
    pen.right(90.0);
    pen.circle(moon, 360.0);
    pen.end_fill();

    pen.backward(moon / 3.0);
    pen.set_fill(palette::MEDIUM_BLUE);
    pen.begin_fill();
    pen.circle(moon, 360.0);
    pen.end_fill();

    pen.backward(size / 3.0);

    // Three five-point stars, each point a thin filled triangle
    for _ in 0..3 {
        for _ in 0..5 {
            pen.set_fill(palette::YELLOW);
            pen.begin_fill();
            pen.forward(star);
            pen.right(144.0);
            pen.forward(star);
            pen.end_fill();
        }
        pen.right(135.0);
        pen.backward(moon * 2.0);
    }

    // Tree trunk
    pen.set_heading(0.0);
    pen.goto(anchor);
    pen.set_fill(palette::SIENNA);
    begin(pen);
    pen.forward(size / 6.0);
    pen.left(90.0);
    pen.forward(size);
    pen.left(90.0);
    pen.forward(size / 6.0);
    end(pen);

    // Canopy quarter-circle
    pen.left(90.0);
    pen.forward(size / 3.0);
    pen.left(90.0);
    pen.set_fill(palette::GREEN);
    begin(pen);
    pen.circle(size / 3.0, 90.0);
    for _ in 0..2 {
        pen.left(90.0);
        pen.forward(size / 3.0);
    }
    end(pen);

    // Tree hole
    pen.forward(size / 6.0);
    pen.left(90.0);
    pen.forward(size / 10.0);
    pen.set_fill(palette::SADDLE_BROWN);
    begin(pen);
    for _ in 0..2 {
        pen.circle(branch / 12.0, 180.0);
        pen.forward(branch / 12.0);
    }
    end(pen);

    // Branch
    pen.right(90.0);
    pen.forward(size / 3.0);
    pen.left(90.0);
    pen.forward(branch / 12.0);
    begin(pen);
    pen.left(10.0);
    pen.forward(branch);
    pen.right(90.0);
    pen.forward(branch / 8.0);
    pen.right(90.0);
    pen.forward(branch);
    end(pen);

    pen.right(180.0);
    pen.forward(branch);
    pen.right(45.0);

    // Nest, two stacked discs
    begin(pen);
    pen.circle(branch / 6.0, 360.0);
    end(pen);

    pen.left(90.0);
    pen.forward(branch / 12.0);
    pen.right(90.0);
    begin(pen);
    pen.circle(branch / 12.0, 360.0);
    end(pen);

    // Two eggs, each from two half-ovals
    for _ in 0..2 {
        for _ in 0..2 {
            begin(pen);
            pen.set_fill(palette::KHAKI);
            pen.circle(branch / 24.0, 180.0);
            pen.forward(branch / 12.0);
            end(pen);
        }
        pen.right(90.0);
    }

    bird::render(pen, anchor, size);

    // Sleep hat on the bird's head
    pen.goto(anchor);
    pen.set_heading(0.0);
    pen.forward(size * (2.0 / 5.0));
    pen.left(90.0);
    pen.forward(size / 3.0);
    pen.set_heading(290.0);
    pen.circle(size / 7.0, 210.0);

    let hat = size / 10.0;
    pen.set_fill(palette::MEDIUM_VIOLET_RED);
    begin(pen);
    pen.left(25.0);
    for _ in 0..2 {
        pen.forward(hat);
        pen.circle(hat / 4.0, 180.0);
    }
    for _ in 0..2 {
        pen.forward(hat);
        pen.right(120.0);
    }
    end(pen);

    pen.right(180.0);
    pen.set_fill(palette::VIOLET);
    begin(pen);
    pen.circle(hat / 5.0, 360.0);
    end(pen);

    pen.set_heading(0.0);
    pen.goto(anchor);
}
