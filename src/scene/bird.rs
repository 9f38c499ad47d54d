//! Shared bird figure drawn into every scene
//!
//! The bird is built from circular arcs: a crested body with tail feathers,
//! a triangular beak, a three-ring eye, a swept-back wing and two feet.

use crate::canvas::palette;
use crate::canvas::turtle::Pen;
use crate::scene::{begin, end};

/// Draw the bird for a cell anchored at `anchor` with side length `size`
pub fn render(pen: &mut Pen<'_>, anchor: [f64; 2], size: f64) {
    pen.set_heading(0.0);
    pen.goto(anchor);
    let bird = size / 6.0;

    // Perch point a third of the way into the cell
    pen.forward(size / 3.0);
    pen.left(90.0);
    pen.forward(size / 3.0);

    pen.set_heading(290.0);
    let body_start = pen.position();
    pen.circle(bird, 15.0);
    let tail_join = pen.position();

    begin(pen);
    pen.set_fill(palette::DODGER_BLUE);

    // Body outline with three head tufts
    pen.circle(bird, 175.0);
    pen.circle(bird / 2.0, 45.0);
    pen.right(135.0);
    for _ in 0..3 {
        pen.forward(bird / 10.0);
        pen.circle(bird / 25.0, 180.0);
        pen.forward(bird / 10.0);
        pen.right(150.0);
    }
    pen.left(70.0);
    pen.circle(bird, 45.0);
    pen.goto(body_start);

    // Tail feathers
    pen.right(60.0);
    pen.forward(bird / 2.0);
    for _ in 0..2 {
        pen.circle(bird / 10.0, 180.0);
        pen.forward(bird / 4.0);
        pen.right(160.0);
        pen.forward(bird / 6.0);
    }
    pen.circle(bird / 10.0, 180.0);
    pen.goto(tail_join);
    end(pen);

    // Beak
    pen.goto(body_start);
    pen.set_heading(290.0);
    pen.circle(bird, 160.0);
    pen.set_heading(45.0);
    begin(pen);
    pen.set_fill(palette::TOMATO);
    for _ in 0..3 {
        pen.forward(bird / 3.0);
        pen.left(120.0);
    }
    end(pen);

    // Eye, three concentric rings
    pen.left(90.0);
    pen.forward(bird / 2.0);
    begin(pen);
    pen.set_fill(palette::WHITE);
    pen.circle(bird / 6.0, 360.0);
    end(pen);

    pen.left(90.0);
    pen.forward(bird / 6.0 + bird / 12.0);
    pen.right(270.0);
    begin(pen);
    pen.set_fill(palette::BLACK);
    pen.circle(bird / 12.0, 360.0);
    end(pen);

    pen.circle(bird / 12.0, 270.0);
    begin(pen);
    pen.set_fill(palette::WHITE);
    pen.circle(bird / 16.0, 360.0);
    end(pen);

    // Wing
    pen.forward(bird / 3.0);
    pen.right(230.0);
    let wing_start = pen.position();
    begin(pen);
    pen.set_fill(palette::DEEP_SKY_BLUE);
    pen.circle(bird * 1.5, -45.0);
    pen.right(180.0);
    pen.circle(bird / 2.0, 45.0);
    pen.left(90.0);
    pen.circle(bird, 45.0);
    pen.circle(bird * 2.0, 30.0);
    pen.circle(bird / 3.0, 170.0);
    pen.goto(wing_start);
    end(pen);

    let leg = bird / 4.0;
    let foot = leg / 2.0;

    pen.goto(body_start);
    pen.set_heading(290.0);
    pen.circle(bird, 45.0);
    pen.right(90.0);

    // Two three-toed feet
    for _ in 0..2 {
        pen.set_fill(palette::TOMATO);
        begin(pen);
        pen.forward(leg);
        pen.right(90.0);
        pen.forward(foot);
        pen.left(90.0);
        pen.forward(foot / 2.0);
        pen.left(90.0);
        pen.forward(foot);
        pen.right(45.0);
        pen.forward(foot);
        pen.left(90.0);
        pen.forward(foot / 2.0);
        pen.left(90.0);
        pen.forward(foot);
        pen.right(135.0);
        pen.forward(foot);
        pen.left(90.0);
        pen.forward(foot / 2.0);
        pen.left(90.0);
        pen.forward(foot);
        pen.right(90.0);
        pen.forward(leg);
        end(pen);

        pen.forward(-foot);
        pen.goto(body_start);
        pen.set_heading(290.0);
        pen.circle(bird, 60.0);
        pen.right(90.0);
    }
}
