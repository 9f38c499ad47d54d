//! Colour constants and specification parsing
//!
//! Scene code uses the constants directly; the parser backs the configurable
//! background and grid line colours on the command line.

use crate::io::error::{Result, WalkError};

/// RGBA colour with straight alpha
pub type Colour = [u8; 4];

/// Opaque black
pub const BLACK: Colour = [0, 0, 0, 255];
/// Opaque white
pub const WHITE: Colour = [255, 255, 255, 255];
/// Canvas default background
pub const LIGHT_GREY: Colour = [211, 211, 211, 255];
/// Grid line and storm backdrop colour
pub const SLATE_GREY: Colour = [112, 128, 144, 255];
/// Mid grey used for the boat hull
pub const GREY: Colour = [128, 128, 128, 255];
/// Pale grey cloud tone
pub const WHITE_SMOKE: Colour = [245, 245, 245, 255];
/// Light grey cloud tone and mountain rock
pub const GAINSBORO: Colour = [220, 220, 220, 255];
/// Dark grey cloud tone
pub const DIM_GREY: Colour = [105, 105, 105, 255];

/// Moon, star and lightning yellow
pub const YELLOW: Colour = [255, 255, 0, 255];
/// Sun ray gold
pub const GOLD: Colour = [255, 215, 0, 255];
/// Outer sun orange
pub const ORANGE: Colour = [255, 165, 0, 255];
/// Inner sun orange
pub const DARK_ORANGE: Colour = [255, 140, 0, 255];

/// Flag and umbrella red
pub const RED: Colour = [255, 0, 0, 255];
/// Scarf stripe green
pub const GREEN: Colour = [0, 128, 0, 255];
/// Pine canopy green
pub const DARK_GREEN: Colour = [0, 100, 0, 255];
/// Ground band green
pub const LIME_GREEN: Colour = [50, 205, 50, 255];
/// Palm leaf green
pub const FOREST_GREEN: Colour = [34, 139, 34, 255];

/// Bird body blue
pub const DODGER_BLUE: Colour = [30, 144, 255, 255];
/// Bird wing blue
pub const DEEP_SKY_BLUE: Colour = [0, 191, 255, 255];
/// Night sky blue
pub const MEDIUM_BLUE: Colour = [0, 0, 205, 255];
/// Deep water blue
pub const DARK_BLUE: Colour = [0, 0, 139, 255];
/// Lower wave blue
pub const BLUE: Colour = [0, 0, 255, 255];
/// Rain drop blue
pub const SKY_BLUE: Colour = [135, 206, 235, 255];
/// Beach sky cyan
pub const LIGHT_CYAN: Colour = [224, 255, 255, 255];

/// Beak and feet red-orange
pub const TOMATO: Colour = [255, 99, 71, 255];
/// Tree trunk brown
pub const SIENNA: Colour = [160, 82, 45, 255];
/// Tree hole brown
pub const SADDLE_BROWN: Colour = [139, 69, 19, 255];
/// Pine trunk and flag pole brown
pub const BROWN: Colour = [165, 42, 42, 255];
/// Palm trunk tan
pub const PERU: Colour = [205, 133, 63, 255];
/// Egg shell yellow
pub const KHAKI: Colour = [240, 230, 140, 255];
/// Sand tan
pub const NAVAJO_WHITE: Colour = [255, 222, 173, 255];

/// Sleep hat magenta
pub const MEDIUM_VIOLET_RED: Colour = [199, 21, 133, 255];
/// Sleep hat pompom violet
pub const VIOLET: Colour = [238, 130, 238, 255];

/// Look up a colour by its conventional name
pub fn named(name: &str) -> Option<Colour> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "light grey" | "light gray" => Some(LIGHT_GREY),
        "slate grey" | "slate gray" => Some(SLATE_GREY),
        "grey" | "gray" => Some(GREY),
        "dim grey" | "dim gray" => Some(DIM_GREY),
        "yellow" => Some(YELLOW),
        "gold" => Some(GOLD),
        "orange" => Some(ORANGE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "dark green" => Some(DARK_GREEN),
        "blue" => Some(BLUE),
        "dark blue" => Some(DARK_BLUE),
        "sky blue" => Some(SKY_BLUE),
        "brown" => Some(BROWN),
        _ => None,
    }
}

/// Parse a colour specification, either a known name or `#RRGGBB`
///
/// # Errors
///
/// Returns [`WalkError::UnknownColour`] when the specification is neither a
/// known name nor a six-digit hex triplet.
pub fn parse(spec: &str) -> Result<Colour> {
    let trimmed = spec.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(hex.get(0..2).unwrap_or_default(), 16),
                u8::from_str_radix(hex.get(2..4).unwrap_or_default(), 16),
                u8::from_str_radix(hex.get(4..6).unwrap_or_default(), 16),
            ) {
                return Ok([r, g, b, 255]);
            }
        }
        return Err(WalkError::UnknownColour {
            value: spec.to_string(),
        });
    }

    named(trimmed).ok_or_else(|| WalkError::UnknownColour {
        value: spec.to_string(),
    })
}
