//! Mountain trip scene: peaks, lake and pines
//!
//! Variant B. Two small peaks flank a snow-capped summit above a lake, with
//! two rows of pines and the bird in a striped scarf.

use crate::canvas::palette;
use crate::canvas::turtle::Pen;
use crate::scene::{backdrop, begin, bird, end};

/// Draw the scene into a cell of the given size at the pen's position
pub fn render(pen: &mut Pen<'_>, size: f64) {
    let anchor = pen.position();
    pen.set_heading(0.0);

    backdrop(pen, size, palette::DEEP_SKY_BLUE);

    // Ground band along the bottom third
    pen.set_fill(palette::LIME_GREEN);
    begin(pen);
    for _ in 0..2 {
        pen.forward(size);
        pen.left(90.0);
        pen.forward(size / 3.0);
        pen.left(90.0);
    }
    end(pen);

    let mountain = size / 3.0;

    pen.left(90.0);
    pen.forward(size / 3.0);
    pen.right(90.0);

    // Two side peaks
    pen.set_fill(palette::GAINSBORO);
    for _ in 0..2 {
        begin(pen);
        for _ in 0..3 {
            pen.forward(mountain);
            pen.left(120.0);
        }
        end(pen);
        pen.forward(mountain * 2.0);
    }

    // Central summit, twice the side peak size
    pen.backward(mountain * 3.5);
    begin(pen);
    for _ in 0..3 {
        pen.forward(mountain * 2.0);
        pen.left(120.0);
    }
    end(pen);

    // Snow cap
    pen.left(60.0);
    pen.forward(mountain * 2.0);
    let summit = pen.position();
    pen.backward(mountain * 0.5);
    pen.right(35.0);

    pen.set_fill(palette::WHITE);
    begin(pen);
    pen.forward(mountain * 0.2);
    pen.right(90.0);
    pen.forward(mountain * 0.1);
    pen.left(100.0);
    pen.forward(mountain * 0.15);
    pen.right(85.0);
    pen.forward(mountain * 0.2);
    pen.left(130.0);
    pen.forward(mountain * 0.1);
    pen.goto(summit);
    pen.set_heading(240.0);
    pen.forward(mountain * 0.5);
    end(pen);

    // Lake in the ground band
    pen.left(30.0);
    pen.forward(mountain * 1.3);
    let lake_start = pen.position();

    pen.set_fill(palette::DEEP_SKY_BLUE);
    begin(pen);
    let lake = mountain * 0.75;
    pen.circle(lake, 90.0);
    pen.forward(lake * 1.3);
    pen.left(90.0);
    pen.forward(lake / 3.0);
    pen.left(90.0);
    pen.forward(lake);
    pen.left(180.0);
    pen.circle(lake - lake / 3.0, -90.0);
    pen.right(90.0);
    pen.goto(lake_start);
    end(pen);

    // Two rows of three pines
    pen.goto(anchor);
    pen.set_heading(0.0);
    pen.forward(size / 15.0);
    for _ in 0..2 {
        for _ in 0..3 {
            pine(pen, size);
            pen.forward(size / 10.0);
        }
        pen.goto(anchor);
        pen.forward(size / 5.0);
    }

    bird::render(pen, anchor, size);

    // Scarf around the bird's neck
    pen.set_heading(0.0);
    pen.goto(anchor);
    pen.forward(size / 3.0);
    pen.left(90.0);
    pen.forward(size / 3.0);
    pen.right(45.0);
    pen.forward(size / 8.0);
    pen.right(80.0);

    let scarf = size / 4.0;
    begin(pen);
    for _ in 0..2 {
        pen.forward(scarf);
        pen.circle(scarf / 10.0, 180.0);
    }
    end(pen);

    // Stripes across the scarf
    pen.left(90.0);
    for _ in 0..4 {
        pen.set_fill(palette::GREEN);
        begin(pen);
        for _ in 0..4 {
            pen.forward(scarf / 5.0);
            pen.right(90.0);
            pen.forward(scarf / 8.0);
            pen.right(90.0);
        }
        end(pen);
        pen.right(90.0);
        pen.forward(scarf / 4.0);
        pen.left(90.0);
    }

    pen.set_heading(0.0);
    pen.goto(anchor);
}

// One pine: rectangular trunk below a triangular canopy
fn pine(pen: &mut Pen<'_>, size: f64) {
    let trunk = size / 6.0;
    pen.left(90.0);

    pen.set_fill(palette::BROWN);
    begin(pen);
    for _ in 0..2 {
        pen.forward(trunk);
        pen.right(90.0);
        pen.forward(trunk / 4.0);
        pen.right(90.0);
    }
    end(pen);

    let top = trunk * (2.0 / 3.0);
    pen.forward(top);
    pen.left(90.0);
    pen.forward(top / 3.0);
    pen.left(180.0);

    pen.set_fill(palette::DARK_GREEN);
    begin(pen);
    for _ in 0..3 {
        pen.forward(top);
        pen.left(120.0);
    }
    end(pen);
}
