//! Ocean trip scene: rain, waves and thunder clouds
//!
//! Variant D. The only scene that consumes randomness: rain drops land on a
//! lattice with one-in-three probability, clouds pick a grey tone at random
//! and each has a one-in-three chance of a lightning bolt.

use crate::canvas::palette::{self, Colour};
use crate::canvas::turtle::Pen;
use crate::scene::{backdrop, begin, bird, end};
use rand::Rng;
use rand::rngs::StdRng;

/// Draw the scene into a cell of the given size at the pen's position
pub fn render(pen: &mut Pen<'_>, size: f64, rng: &mut StdRng) {
    let anchor = pen.position();
    pen.set_heading(0.0);

    backdrop(pen, size, palette::SLATE_GREY);

    // Rain drops on a 10x10 lattice, each present with probability 1/3
    pen.left(90.0);
    pen.forward(size / 5.0);
    pen.right(90.0);
    pen.forward(size / 20.0);
    let mut lattice_row = pen.position();
    for _ in 0..10 {
        for _ in 0..10 {
            if rng.random_range(1..=3) == 1 {
                rain_drop(pen, size);
            }
            pen.set_heading(0.0);
            pen.forward(size / 10.0);
        }
        lattice_row[1] += size / 20.0;
        pen.goto(lattice_row);
    }

    // Two bands of waves, darker behind lighter
    pen.goto(anchor);
    pen.left(90.0);
    pen.forward(size / 6.0);
    pen.right(90.0);

    let wave = size / 8.0;
    pen.set_fill(palette::DARK_BLUE);
    begin(pen);
    for _ in 0..4 {
        pen.circle(wave, 90.0);
        pen.left(90.0);
        pen.circle(wave, -90.0);
        pen.right(90.0);
    }
    pen.right(90.0);
    pen.forward(size / 12.0);
    pen.right(90.0);
    pen.forward(size);
    end(pen);

    pen.left(180.0);
    pen.set_fill(palette::BLUE);
    begin(pen);
    for _ in 0..4 {
        pen.circle(wave, 90.0);
        pen.left(90.0);
        pen.circle(wave, -90.0);
        pen.right(90.0);
    }
    pen.right(90.0);
    pen.forward(size / 12.0);
    pen.right(90.0);
    pen.forward(size);
    end(pen);

    // Four clouds across the top
    pen.set_heading(0.0);
    let mut cloud_position = [anchor[0] + size / 9.0, anchor[1] + size * 0.75];
    pen.goto(cloud_position);
    for _ in 0..4 {
        let bolt = rng.random_range(1..=3);
        thunder_cloud(pen, size / 6.0, bolt == 1, rng);
        cloud_position[0] += size / 4.5;
        pen.goto(cloud_position);
    }

    bird::render(pen, anchor, size);

    // Rain jacket
    pen.goto([anchor[0] + size / 3.0, anchor[1] + size / 3.0]);
    pen.set_heading(290.0);
    pen.circle(size / 6.0, 160.0);
    pen.left(90.0);
    let jacket_start = pen.position();

    let jacket = size / 8.0;
    pen.set_fill(palette::YELLOW);
    begin(pen);
    pen.forward(jacket);
    pen.right(30.0);
    pen.forward(jacket);
    pen.circle(jacket / 2.0, -170.0);
    pen.right(90.0);
    pen.forward(jacket / 3.0);
    pen.left(45.0);
    pen.circle(jacket * 1.25, 165.0);
    end(pen);

    // Pocket
    pen.left(135.0);
    pen.forward(jacket);
    pen.right(135.0);
    let pocket_start = pen.position();
    pen.set_fill(palette::GOLD);
    begin(pen);
    for _ in 0..2 {
        pen.circle(jacket / 4.0, -90.0);
        pen.backward(jacket / 4.0);
    }
    pen.goto(pocket_start);
    end(pen);

    // Rain hat
    pen.goto(jacket_start);
    pen.set_heading(90.0);
    pen.forward(size / 12.0);
    pen.left(90.0);
    pen.forward(jacket / 5.0);

    let hat = jacket * 1.5;
    pen.set_fill(palette::YELLOW);
    begin(pen);
    for _ in 0..3 {
        pen.forward(hat);
        pen.right(120.0);
    }
    end(pen);
    pen.backward(hat * 0.1);

    begin(pen);
    for _ in 0..2 {
        pen.forward(hat * 1.2);
        pen.right(90.0);
        pen.forward(hat / 4.0);
        pen.right(90.0);
    }
    end(pen);

    // Tiny umbrella
    pen.forward(hat * 1.7);
    pen.right(45.0);
    pen.backward(hat / 2.0);

    let umbrella = hat * 0.75;
    pen.set_fill(palette::RED);
    begin(pen);
    pen.forward(umbrella);
    pen.right(90.0);
    pen.forward(umbrella * 0.9);
    pen.left(90.0);
    pen.circle(umbrella, 180.0);
    pen.left(90.0);
    pen.forward(umbrella * 0.9);
    pen.right(90.0);
    pen.forward(umbrella);
    pen.left(90.0);
    pen.forward(umbrella / 5.0);
    end(pen);

    pen.left(90.0);
    pen.forward(umbrella);
    pen.set_fill(palette::GREEN);
    begin(pen);
    for _ in 0..2 {
        pen.forward(umbrella);
        pen.left(90.0);
        pen.forward(umbrella / 5.0);
        pen.left(90.0);
    }
    end(pen);

    pen.set_heading(0.0);
    pen.goto(anchor);
}

// One tear-shaped drop: half circle capped by two straight edges
fn rain_drop(pen: &mut Pen<'_>, size: f64) {
    let drop = size / 50.0;
    pen.set_heading(315.0);
    pen.set_fill(palette::SKY_BLUE);
    begin(pen);
    pen.circle(drop, 180.0);
    pen.left(30.0);
    pen.forward(drop * 2.0);
    pen.left(120.0);
    pen.forward(drop * 2.0);
    end(pen);
}

// Lumpy five-arc cloud in a randomly chosen grey, optionally with lightning
fn thunder_cloud(pen: &mut Pen<'_>, cloud_size: f64, lightning: bool, rng: &mut StdRng) {
    let tone: Colour = match rng.random_range(1..=5) {
        1 => palette::WHITE,
        2 => palette::WHITE_SMOKE,
        3 => palette::GAINSBORO,
        _ => palette::DIM_GREY,
    };
    pen.set_fill(tone);

    let curve = cloud_size / 3.0;
    pen.forward(cloud_size);

    begin(pen);
    let cloud_start = pen.position();
    pen.circle(curve, 170.0);
    pen.right(90.0);
    pen.circle(curve * 2.0, 190.0);
    pen.right(90.0);
    pen.circle(curve, 170.0);
    pen.right(90.0);
    pen.circle(curve, 180.0);
    pen.right(180.0);
    pen.circle(curve, 180.0);
    pen.goto(cloud_start);
    end(pen);

    if lightning {
        pen.circle(curve, 180.0);
        pen.forward(curve * 0.66);
        pen.right(30.0);
        let bolt_start = pen.position();

        pen.set_fill(palette::YELLOW);
        begin(pen);
        pen.forward(cloud_size);
        pen.left(135.0);
        pen.forward(cloud_size / 4.0);
        pen.right(135.0);
        pen.forward(cloud_size / 2.0);
        pen.left(160.0);
        pen.forward(cloud_size * 0.75);
        pen.left(135.0);
        pen.forward(cloud_size / 3.0);
        pen.right(115.0);
        pen.forward(cloud_size * 0.7);
        pen.goto(bolt_start);
        end(pen);
    }
    pen.set_heading(0.0);
}
