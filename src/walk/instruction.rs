//! Tagged instruction records and compass directions
//!
//! One instruction per line in the dataset text format: a `start` line fixes
//! the cell and variant, `change` swaps the variant, and a direction line
//! moves the cursor a number of whole cells.

use crate::canvas::grid::column_label;
use crate::io::error::WalkError;
use crate::scene::Variant;
use std::fmt;
use std::str::FromStr;

/// Compass direction of a move across the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up one row per step
    North,
    /// Down one row per step
    South,
    /// Right one column per step
    East,
    /// Left one column per step
    West,
}

impl Direction {
    /// All directions in naming order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Per-step cell offset as `[column delta, row delta]`
    pub const fn offset(self) -> [i64; 2] {
        match self {
            Self::North => [0, 1],
            Self::South => [0, -1],
            Self::East => [1, 0],
            Self::West => [-1, 0],
        }
    }

    /// The direction's conventional name
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Ok(Self::North),
            "south" => Ok(Self::South),
            "east" => Ok(Self::East),
            "west" => Ok(Self::West),
            _ => Err(WalkError::InvalidDataset {
                reason: format!("unknown direction '{s}'"),
            }),
        }
    }
}

/// One unit of the generated move/variant-change sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Fix the starting cell and the first variant
    Start {
        /// Zero-based column index
        column: usize,
        /// Zero-based row index
        row: usize,
        /// First active variant
        variant: Variant,
    },
    /// Swap the active variant and redraw in place
    Change {
        /// New active variant
        variant: Variant,
    },
    /// Move the cursor, redrawing the active scene at every step
    Move {
        /// Compass direction of travel
        direction: Direction,
        /// Number of whole-cell steps; zero redraws in place
        steps: usize,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start {
                column,
                row,
                variant,
            } => {
                let label = column_label(*column).to_ascii_lowercase();
                write!(f, "start {label} {} {variant}", row + 1)
            }
            Self::Change { variant } => write!(f, "change {variant}"),
            Self::Move { direction, steps } => {
                write!(f, "{} {steps}", direction.name().to_ascii_lowercase())
            }
        }
    }
}

impl FromStr for Instruction {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let invalid = |reason: String| WalkError::InvalidDataset { reason };
        let keyword = tokens
            .first()
            .map(|token| token.to_ascii_lowercase())
            .unwrap_or_default();

        match (keyword.as_str(), tokens.as_slice()) {
            ("start", [_, column, row, variant]) => {
                let column = parse_column(column)?;
                let row: usize = row
                    .parse()
                    .map_err(|_| invalid(format!("invalid row number '{row}'")))?;
                if row == 0 {
                    return Err(invalid("row numbers are one-based".to_string()));
                }
                Ok(Self::Start {
                    column,
                    row: row - 1,
                    variant: variant.parse()?,
                })
            }
            ("change", [_, variant]) => Ok(Self::Change {
                variant: variant.parse()?,
            }),
            (_, [direction, steps]) => Ok(Self::Move {
                direction: direction.parse()?,
                steps: steps
                    .parse()
                    .map_err(|_| invalid(format!("invalid step count '{steps}'")))?,
            }),
            (_, []) => Err(invalid("empty instruction".to_string())),
            _ => Err(invalid(format!("unrecognised instruction '{s}'"))),
        }
    }
}

// Single-letter column reference, accepted in either case
fn parse_column(token: &str) -> Result<usize, WalkError> {
    let mut characters = token.chars();
    match (characters.next(), characters.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => {
            Ok(usize::from(letter.to_ascii_lowercase() as u8 - b'a'))
        }
        _ => Err(WalkError::InvalidDataset {
            reason: format!("invalid column letter '{token}'"),
        }),
    }
}
