//! Instruction interpretation onto the canvas
//!
//! The walker holds the cursor, the active variant and the drawing surface,
//! applying one instruction at a time. Moves redraw the active scene at the
//! current cell before every step so the trail stays visible, and each draw
//! is recorded when visualization capture is enabled.

use crate::canvas::grid::GridLayout;
use crate::canvas::palette::Colour;
use crate::canvas::surface::Surface;
use crate::canvas::turtle::Pen;
use crate::io::error::{Result, WalkError};
use crate::io::visualization::SceneCapture;
use crate::scene::{self, Variant};
use crate::walk::instruction::Instruction;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Canvas appearance options for a walk rendering
#[derive(Debug, Clone, Copy)]
pub struct CanvasOptions {
    /// Canvas background colour
    pub background: Colour,
    /// Grid line and label colour
    pub line_colour: Colour,
    /// Whether to draw the grid lines and axis labels
    pub draw_grid: bool,
    /// Whether to draw the scene key in the right margin
    pub draw_key: bool,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            background: crate::canvas::palette::LIGHT_GREY,
            line_colour: crate::canvas::palette::SLATE_GREY,
            draw_grid: true,
            draw_key: true,
        }
    }
}

/// Interprets instructions by drawing scenes onto a grid canvas
pub struct Walker {
    layout: GridLayout,
    surface: Surface,
    rng: StdRng,
    variant: Option<Variant>,
    position: Option<[usize; 2]>,
    visits: Array2<u32>,
    capture: Option<SceneCapture>,
    iteration: usize,
}

impl Walker {
    /// Create a walker with a freshly painted canvas
    ///
    /// The background, grid backdrop and scene key are drawn immediately so
    /// later scene draws layer on top of them.
    pub fn new(layout: GridLayout, seed: u64, options: &CanvasOptions) -> Self {
        let mut surface = Surface::new(
            layout.window_width(),
            layout.window_height(),
            options.background,
        );
        let mut rng = StdRng::seed_from_u64(seed);

        layout.draw_backdrop(&mut surface, options.line_colour, options.draw_grid);
        if options.draw_key {
            scene::key::render(&mut surface, &layout, &mut rng);
        }

        Self {
            layout,
            surface,
            rng,
            variant: None,
            position: None,
            visits: Array2::zeros((layout.rows(), layout.columns())),
            capture: None,
            iteration: 0,
        }
    }

    /// Start recording scene placements for GIF export
    pub fn enable_visualization(&mut self, expected_placements: usize) {
        self.capture = Some(SceneCapture::new(
            self.layout.columns(),
            self.layout.rows(),
            expected_placements,
        ));
    }

    /// Apply one instruction, drawing any scenes it implies
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::MissingStart`] when a change or move arrives
    /// before any start, and [`WalkError::OutOfBounds`] when a start or move
    /// would leave the grid.
    pub fn apply(&mut self, instruction: &Instruction) -> Result<()> {
        self.iteration += 1;
        match *instruction {
            Instruction::Start {
                column,
                row,
                variant,
            } => {
                if !self.layout.contains(column as i64, row as i64) {
                    return Err(self.out_of_bounds(column as i64, row as i64));
                }
                self.variant = Some(variant);
                self.position = Some([column, row]);
                self.draw_scene(column, row, variant);
            }
            Instruction::Change { variant } => {
                let [column, row] = self.require_position()?;
                self.variant = Some(variant);
                self.draw_scene(column, row, variant);
            }
            Instruction::Move { direction, steps } => {
                let [mut column, mut row] = self.require_position()?;
                let variant = self.variant.ok_or(WalkError::MissingStart {
                    iteration: self.iteration,
                })?;
                let [dc, dr] = direction.offset();

                if steps == 0 {
                    self.draw_scene(column, row, variant);
                }
                for _ in 0..steps {
                    self.draw_scene(column, row, variant);
                    let next_column = column as i64 + dc;
                    let next_row = row as i64 + dr;
                    if !self.layout.contains(next_column, next_row) {
                        return Err(self.out_of_bounds(next_column, next_row));
                    }
                    column = next_column as usize;
                    row = next_row as usize;
                }
                self.position = Some([column, row]);
            }
        }
        Ok(())
    }

    /// Draw the final-variant panel after the last instruction
    ///
    /// An empty walk has no final variant; the panel is skipped and the
    /// canvas keeps just the backdrop and key.
    pub fn finish(&mut self) {
        if let Some(variant) = self.variant {
            scene::key::final_panel(&mut self.surface, &self.layout, variant, &mut self.rng);
        }
    }

    /// The rendered canvas
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Per-cell scene draw counts, indexed `[row, column]`
    pub const fn visits(&self) -> &Array2<u32> {
        &self.visits
    }

    /// The recorded placements, when visualization is enabled
    pub const fn capture(&self) -> Option<&SceneCapture> {
        self.capture.as_ref()
    }

    /// The current cursor cell, if a start has been applied
    pub const fn position(&self) -> Option<[usize; 2]> {
        self.position
    }

    /// The active variant, if a start has been applied
    pub const fn variant(&self) -> Option<Variant> {
        self.variant
    }

    fn draw_scene(&mut self, column: usize, row: usize, variant: Variant) {
        let anchor = self.layout.cell_origin(column, row);
        {
            let mut pen = Pen::new(&mut self.surface);
            pen.goto(anchor);
            variant.render(&mut pen, self.layout.cell(), &mut self.rng);
        }
        if let Some(count) = self.visits.get_mut((row, column)) {
            *count += 1;
        }
        if let Some(capture) = self.capture.as_mut() {
            capture.record(column, row, variant, self.iteration);
        }
    }

    fn require_position(&self) -> Result<[usize; 2]> {
        self.position.ok_or(WalkError::MissingStart {
            iteration: self.iteration,
        })
    }

    const fn out_of_bounds(&self, column: i64, row: i64) -> WalkError {
        WalkError::OutOfBounds {
            column,
            row,
            iteration: self.iteration,
            grid: (self.layout.columns(), self.layout.rows()),
        }
    }
}
