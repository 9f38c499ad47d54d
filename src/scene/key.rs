//! Scene key and final-variant side panels
//!
//! The key stacks the four scenes with their letters down the right margin
//! under a title; the final-variant panel repeats the last active scene in
//! the left margin after the walk completes.

use crate::canvas::font::{self, Alignment};
use crate::canvas::grid::GridLayout;
use crate::canvas::palette;
use crate::canvas::surface::Surface;
use crate::canvas::turtle::Pen;
use crate::scene::Variant;
use rand::rngs::StdRng;

/// Title shown above the scene key
pub const KEY_TITLE: &str = "A BIRDS ADVENTURE";

/// Caption shown above the final-variant panel
pub const FINAL_CAPTION: &str = "FINAL VARIANT:";

// Text sizes as fractions of the cell size, in font units
fn title_scale(layout: &GridLayout) -> f64 {
    layout.cell() * 0.18 / font::GLYPH_HEIGHT
}

fn caption_scale(layout: &GridLayout) -> f64 {
    layout.cell() * 0.12 / font::GLYPH_HEIGHT
}

/// Draw the titled scene key down the right margin
pub fn render(surface: &mut Surface, layout: &GridLayout, rng: &mut StdRng) {
    let cell = layout.cell();
    let x = layout.left_edge() + layout.columns() as f64 * cell + cell / 2.0;
    let mut y = layout.bottom_edge() + layout.rows() as f64 * cell - cell / 2.0;

    font::draw_text(
        surface,
        [x, y],
        KEY_TITLE,
        title_scale(layout),
        palette::BLACK,
        Alignment::Left,
    );
    y -= cell * 1.25;

    for variant in Variant::ALL {
        {
            let mut pen = Pen::new(surface);
            pen.goto([x, y]);
            variant.render(&mut pen, cell, rng);
        }
        y -= cell * 0.25;
        font::draw_text(
            surface,
            [x, y],
            &format!("{}. {}", variant.letter(), variant.caption()),
            caption_scale(layout),
            palette::BLACK,
            Alignment::Left,
        );
        y -= cell * 1.25;
    }
}

/// Draw the final active variant in the left margin with its caption
pub fn final_panel(surface: &mut Surface, layout: &GridLayout, variant: Variant, rng: &mut StdRng) {
    let cell = layout.cell();
    let anchor = [layout.left_edge() - 1.5 * cell, -cell / 2.0];

    {
        let mut pen = Pen::new(surface);
        pen.goto(anchor);
        variant.render(&mut pen, cell, rng);
    }
    font::draw_text(
        surface,
        [anchor[0], anchor[1] + cell * 1.25],
        FINAL_CAPTION,
        caption_scale(layout),
        palette::BLACK,
        Alignment::Left,
    );
}
