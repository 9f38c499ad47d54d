//! Seeded random walk generation within grid bounds
//!
//! Reproduces the dataset contract: a start cell and variant, then up to one
//! hundred items where each is either a variant mutation (fixed probability,
//! always to a different variant) or a move whose step count is bounded by
//! the distance to the nearest wall in the chosen direction.

use crate::canvas::grid::GridLayout;
use crate::io::configuration::{MAX_GENERATED_ITEMS, MUTATION_PERCENT};
use crate::scene::Variant;
use crate::walk::instruction::{Direction, Instruction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a bounded random walk over the layout's grid
///
/// `items` overrides the number of instructions after the start; when `None`
/// the count is drawn uniformly from `0..=100`. The returned sequence always
/// begins with a `Start` and never moves the cursor off the grid.
pub fn generate_walk(layout: &GridLayout, seed: u64, items: Option<usize>) -> Vec<Instruction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let columns = layout.columns();
    let rows = layout.rows();

    let item_count = items.unwrap_or_else(|| rng.random_range(0..=MAX_GENERATED_ITEMS));

    let mut column = rng.random_range(0..columns);
    let mut row = rng.random_range(0..rows);
    let mut variant = pick(&mut rng, &Variant::ALL).unwrap_or(Variant::LeavingHome);

    let mut instructions = Vec::with_capacity(item_count + 1);
    instructions.push(Instruction::Start {
        column,
        row,
        variant,
    });

    for _ in 0..item_count {
        if rng.random_range(1..=100) <= MUTATION_PERCENT {
            let others: Vec<Variant> = Variant::ALL
                .iter()
                .copied()
                .filter(|candidate| *candidate != variant)
                .collect();
            variant = pick(&mut rng, &others).unwrap_or(variant);
            instructions.push(Instruction::Change { variant });
        } else {
            let direction = pick(&mut rng, &Direction::ALL).unwrap_or(Direction::North);
            // Step count bounded by the distance to the wall being approached
            let bound = match direction {
                Direction::North => rows - row - 1,
                Direction::South => row,
                Direction::East => columns - column - 1,
                Direction::West => column,
            };
            let steps = rng.random_range(0..=bound);
            match direction {
                Direction::North => row += steps,
                Direction::South => row -= steps,
                Direction::East => column += steps,
                Direction::West => column -= steps,
            }
            instructions.push(Instruction::Move { direction, steps });
        }
    }

    instructions
}

// Uniform choice from a non-empty slice
fn pick<T: Copy>(rng: &mut StdRng, choices: &[T]) -> Option<T> {
    if choices.is_empty() {
        return None;
    }
    choices.get(rng.random_range(0..choices.len())).copied()
}
