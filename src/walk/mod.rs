//! Instruction model, random walk generation and interpretation

/// Seeded random walk generation within grid bounds
pub mod generator;
/// Tagged instruction records and compass directions
pub mod instruction;
/// Instruction interpretation onto the canvas
pub mod interpreter;

pub use generator::generate_walk;
pub use instruction::{Direction, Instruction};
pub use interpreter::{CanvasOptions, Walker};
