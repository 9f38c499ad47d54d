//! Procedural vignette illustrations along a random grid walk
//!
//! A seeded random walk produces a sequence of move and variant-change
//! instructions over a labelled grid. A turtle-style pen replays the walk,
//! re-rendering the active scene into the current cell at every step, and the
//! result is exported as a PNG image and optionally as an animated GIF.

#![forbid(unsafe_code)]

/// Raster surface, turtle pen, grid layout, palette and bitmap font
pub mod canvas;
/// Input/output operations, configuration and error handling
pub mod io;
/// Angle and interpolation helpers for path construction
pub mod math;
/// The four vignette scenes and their shared bird figure
pub mod scene;
/// Instruction model, random walk generation and interpretation
pub mod walk;

pub use io::error::{Result, WalkError};
