//! The four vignette scenes and their shared bird figure
//!
//! Every scene draws into one grid cell, anchored at the cell's bottom-left
//! corner, and restores the pen to that anchor when it finishes. Scenes are
//! pure pen choreography; only the ocean scene consumes randomness.

/// Beach trip scene: sun, palm, fish and boat
pub mod beach;
/// Shared bird figure drawn into every scene
pub mod bird;
/// Leaving-home scene: night sky, tree and nest
pub mod home;
/// Scene key and final-variant side panels
pub mod key;
/// Mountain trip scene: peaks, lake and pines
pub mod mountain;
/// Ocean trip scene: rain, waves and thunder clouds
pub mod ocean;

use crate::canvas::palette::Colour;
use crate::canvas::turtle::Pen;
use crate::io::error::WalkError;
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;

/// One of the four vignette scenes, keyed by its letter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Variant A: the bird leaves its nest at night
    LeavingHome,
    /// Variant B: the bird visits the mountains
    MountainTrip,
    /// Variant C: the bird visits the beach
    BeachTrip,
    /// Variant D: the bird braves a storm at sea
    OceanTrip,
}

impl Variant {
    /// All variants in letter order
    pub const ALL: [Self; 4] = [
        Self::LeavingHome,
        Self::MountainTrip,
        Self::BeachTrip,
        Self::OceanTrip,
    ];

    /// The variant's letter, `A` through `D`
    pub const fn letter(self) -> char {
        match self {
            Self::LeavingHome => 'A',
            Self::MountainTrip => 'B',
            Self::BeachTrip => 'C',
            Self::OceanTrip => 'D',
        }
    }

    /// Caption shown beside the variant in the scene key
    pub const fn caption(self) -> &'static str {
        match self {
            Self::LeavingHome => "LEAVING HOME",
            Self::MountainTrip => "MOUNTAIN TRIP",
            Self::BeachTrip => "BEACH TRIP",
            Self::OceanTrip => "OCEAN TRIP",
        }
    }

    /// Look up a variant by its letter, in either case
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Self::LeavingHome),
            'B' => Some(Self::MountainTrip),
            'C' => Some(Self::BeachTrip),
            'D' => Some(Self::OceanTrip),
            _ => None,
        }
    }

    /// Draw the scene into a cell of the given size at the pen's position
    pub fn render(self, pen: &mut Pen<'_>, size: f64, rng: &mut StdRng) {
        match self {
            Self::LeavingHome => home::render(pen, size),
            Self::MountainTrip => mountain::render(pen, size),
            Self::BeachTrip => beach::render(pen, size),
            Self::OceanTrip => ocean::render(pen, size, rng),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Variant {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.chars();
        match (characters.next(), characters.next()) {
            (Some(letter), None) => Self::from_letter(letter).ok_or(()),
            _ => Err(()),
        }
        .map_err(|()| WalkError::InvalidDataset {
            reason: format!("unknown variant '{s}' (expected A, B, C or D)"),
        })
    }
}

// Lower the pen and open a fill, mirroring how the scenes pair the two
pub(crate) fn begin(pen: &mut Pen<'_>) {
    pen.pen_down();
    pen.begin_fill();
}

// Close the fill and lift the pen
pub(crate) fn end(pen: &mut Pen<'_>) {
    pen.end_fill();
    pen.pen_up();
}

// Filled square backdrop covering the whole cell
pub(crate) fn backdrop(pen: &mut Pen<'_>, size: f64, colour: Colour) {
    pen.set_fill(colour);
    begin(pen);
    for _ in 0..4 {
        pen.forward(size);
        pen.left(90.0);
    }
    end(pen);
}
