//! Compact 5x7 bitmap glyphs for labels and captions
//!
//! Covers digits, uppercase letters and minimal punctuation; lowercase input
//! is rendered with the uppercase shapes. Unknown characters advance the pen
//! without painting.

use crate::canvas::palette::Colour;
use crate::canvas::surface::Surface;

/// Glyph cell width in font units
pub const GLYPH_WIDTH: f64 = 5.0;
/// Glyph cell height in font units
pub const GLYPH_HEIGHT: f64 = 7.0;
/// Horizontal advance between glyph cells in font units
pub const GLYPH_ADVANCE: f64 = 6.0;

/// Horizontal placement of a text run relative to its anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Anchor at the left edge of the run
    Left,
    /// Anchor at the run centre
    Centre,
    /// Anchor at the right edge of the run
    Right,
}

/// Row bitmaps for a single glyph, top row first, bit 4 leftmost
const fn glyph(character: char) -> Option<[u8; 7]> {
    let rows = match character.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b01010, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// Pixel width of a rendered run at the given scale
pub fn text_width(text: &str, scale: f64) -> f64 {
    let glyphs = text.chars().count() as f64;
    if glyphs == 0.0 {
        return 0.0;
    }
    (glyphs * GLYPH_ADVANCE - 1.0) * scale
}

/// Render a text run with its baseline anchor at a turtle coordinate
///
/// The anchor sits at the bottom of the glyph cells; `scale` is the pixel
/// size of one font unit.
pub fn draw_text(
    surface: &mut Surface,
    anchor: [f64; 2],
    text: &str,
    scale: f64,
    colour: Colour,
    alignment: Alignment,
) {
    let width = text_width(text, scale);
    let left = match alignment {
        Alignment::Left => anchor[0],
        Alignment::Centre => anchor[0] - width / 2.0,
        Alignment::Right => anchor[0] - width,
    };

    for (index, character) in text.chars().enumerate() {
        let Some(rows) = glyph(character) else {
            continue;
        };
        let glyph_left = left + index as f64 * GLYPH_ADVANCE * scale;
        for (row_index, row) in rows.iter().enumerate() {
            let top = anchor[1] + (GLYPH_HEIGHT - row_index as f64) * scale;
            for bit in 0..5u8 {
                if row & (0b10000 >> bit) != 0 {
                    fill_unit(
                        surface,
                        glyph_left + f64::from(bit) * scale,
                        top,
                        scale,
                        colour,
                    );
                }
            }
        }
    }
}

// One font unit as a scale x scale pixel block; top-left anchored
fn fill_unit(surface: &mut Surface, left: f64, top: f64, scale: f64, colour: Colour) {
    let mut y = top - scale + 0.5;
    while y <= top {
        let mut x = left + 0.5;
        while x < left + scale {
            surface.set(x, y, colour);
            x += 1.0;
        }
        y += 1.0;
    }
}
