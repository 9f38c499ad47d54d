//! Beach trip scene: sun, palm, fish and boat
//!
//! Variant C. Water meets a sand spit under a radiant sun, with a leaning
//! coconut palm, a fish, a flagged boat and the bird.

use crate::canvas::palette;
use crate::canvas::turtle::Pen;
use crate::scene::{backdrop, begin, bird, end};

/// Draw the scene into a cell of the given size at the pen's position
pub fn render(pen: &mut Pen<'_>, size: f64) {
    let anchor = pen.position();
    pen.set_heading(0.0);

    backdrop(pen, size, palette::LIGHT_CYAN);

    // Water band
    pen.left(90.0);
    pen.set_fill(palette::DEEP_SKY_BLUE);
    begin(pen);
    for _ in 0..2 {
        pen.forward(size / 3.0);
        pen.right(90.0);
        pen.forward(size);
        pen.right(90.0);
    }
    end(pen);

    // Sand spit curling into the water
    pen.set_fill(palette::NAVAJO_WHITE);
    begin(pen);
    pen.forward(size / 3.0);
    pen.right(90.0);
    pen.forward(size / 2.0);
    pen.right(135.0);
    pen.circle(size / 12.0, 90.0);
    pen.right(180.0);
    pen.circle(size / 12.0, -90.0);
    pen.right(180.0);
    pen.circle(size / 12.0, 70.0);
    pen.goto([anchor[0] + size / 2.0, anchor[1]]);
    end(pen);

    // Sun with six rays
    pen.set_heading(0.0);
    pen.forward(size / 4.0);
    pen.left(90.0);
    pen.forward(size * (2.0 / 3.0));
    pen.right(90.0);

    let sun = size / 8.0;
    let sun_inner = size / 12.0;

    begin(pen);
    pen.set_fill(palette::ORANGE);
    pen.circle(sun, 360.0);
    end(pen);

    for _ in 0..6 {
        pen.set_fill(palette::GOLD);
        begin(pen);
        for _ in 0..3 {
            pen.forward(sun / 2.0);
            pen.right(120.0);
        }
        end(pen);
        pen.circle(sun, 60.0);
    }

    pen.left(90.0);
    pen.forward(sun_inner / 2.0);
    pen.right(90.0);
    pen.set_fill(palette::DARK_ORANGE);
    begin(pen);
    pen.circle(sun_inner, 360.0);
    end(pen);

    // Coconut palm leaning over the sand
    pen.goto(anchor);
    pen.set_heading(0.0);
    pen.forward(size / 8.0);

    let palm = size;
    let palm_tip = palm / 24.0;

    pen.set_fill(palette::PERU);
    begin(pen);
    pen.left(270.0);
    pen.circle(palm, -30.0);
    pen.left(180.0);
    pen.circle(palm_tip, 90.0);
    let crown = pen.position();
    pen.circle(palm_tip, 90.0);
    pen.circle(palm, 30.0);
    pen.goto([pen.position()[0], anchor[1]]);
    end(pen);

    // Three pairs of leaves from the crown
    let leaf = palm_tip * 2.5;
    pen.goto(crown);
    pen.right(180.0);
    pen.backward(palm_tip / 2.0);
    for _ in 0..3 {
        for _ in 0..2 {
            let leaf_start = pen.position();
            pen.set_fill(palette::FOREST_GREEN);
            begin(pen);
            pen.circle(leaf, 180.0);
            pen.right(45.0);
            pen.circle(leaf * 1.5, -60.0);
            pen.goto(leaf_start);
            end(pen);
            pen.right(135.0);
        }
        pen.backward(palm_tip / 3.0);
    }

    bird::render(pen, anchor, size);

    // Fish below the bird
    let fish = size / 20.0;
    pen.right(90.0);
    begin(pen);
    for _ in 0..2 {
        pen.circle(fish, 180.0);
        pen.forward(fish / 2.0);
    }
    end(pen);

    pen.circle(fish, 90.0);
    pen.right(120.0);
    begin(pen);
    for _ in 0..3 {
        pen.forward(fish);
        pen.left(120.0);
    }
    end(pen);

    pen.right(150.0);
    pen.forward(fish * 2.0);

    let eye = fish / 4.0;
    pen.set_fill(palette::WHITE);
    begin(pen);
    pen.circle(eye, 360.0);
    end(pen);

    pen.left(90.0);
    pen.forward(eye / 2.0);
    pen.set_fill(palette::BLACK);
    begin(pen);
    pen.circle(eye / 2.0, 360.0);
    end(pen);

    // Boat on the horizon
    pen.goto([anchor[0] + size * 0.9, anchor[1] + size / 3.0]);
    pen.set_heading(45.0);

    let boat = size / 6.0;
    let keel = size / 20.0;

    pen.set_fill(palette::GREY);
    begin(pen);
    pen.forward(boat / 2.0);
    pen.left(135.0);
    pen.forward(boat);
    pen.left(135.0);
    pen.forward(boat / 2.0);
    pen.left(45.0);
    pen.forward(keel);
    end(pen);

    // Flag pole
    pen.backward(keel / 2.0);
    pen.left(90.0);
    pen.forward(size / 17.0);

    let pole = boat / 4.0;
    pen.set_fill(palette::BROWN);
    begin(pen);
    for _ in 0..2 {
        pen.forward(pole);
        pen.left(90.0);
        pen.forward(pole / 2.0);
        pen.left(90.0);
    }
    end(pen);

    pen.forward(pole);
    pen.set_fill(palette::RED);
    begin(pen);
    pen.forward(pole);
    pen.left(135.0);
    pen.forward(pole * 1.4);
    pen.left(135.0);
    pen.forward(pole);
    end(pen);

    pen.set_heading(0.0);
    pen.goto(anchor);
}
