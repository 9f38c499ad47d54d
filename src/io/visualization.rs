//! Scene placement capture and animated GIF export
//!
//! Records scene placements during the walk and replays them on a
//! reduced-scale grid canvas, one frame per placement. Frames are skipped
//! when the requested delay is faster than viewers honour, and the final
//! frame is held longer for visibility.

use crate::canvas::palette;
use crate::canvas::surface::Surface;
use crate::canvas::turtle::Pen;
use crate::io::configuration::{
    GIF_CELL_SIZE, GIF_FINAL_FRAME_HOLD, GIF_REPLAY_SEED, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{Result, WalkError};
use crate::scene::Variant;
use image::{Delay, Frame};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One scene drawn into a cell during the walk
#[derive(Debug, Clone, Copy)]
pub struct ScenePlacement {
    /// Zero-based column coordinate
    pub column: usize,
    /// Zero-based row coordinate
    pub row: usize,
    /// Variant drawn at the cell
    pub variant: Variant,
    /// Draw counter when the placement happened
    pub iteration: usize,
}

/// Captures scene placements for visualization
///
/// Recording placement events rather than full frames keeps memory use
/// proportional to the walk length; frames are rendered at export time.
pub struct SceneCapture {
    placements: Vec<ScenePlacement>,
    columns: usize,
    rows: usize,
}

impl SceneCapture {
    /// Create a capture for a grid of the given dimensions
    pub fn new(columns: usize, rows: usize, expected_placements: usize) -> Self {
        Self {
            placements: Vec::with_capacity(expected_placements),
            columns,
            rows,
        }
    }

    /// Record a scene drawn at the given cell
    pub fn record(&mut self, column: usize, row: usize, variant: Variant, iteration: usize) {
        self.placements.push(ScenePlacement {
            column,
            row,
            variant,
            iteration,
        });
    }

    /// Returns all recorded placement events
    pub fn placements(&self) -> &[ScenePlacement] {
        &self.placements
    }

    /// Returns the total number of placement events
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Export the captured walk as a GIF with automatic frame skipping
    ///
    /// If the requested frame rate exceeds what viewers support, frames are
    /// kept at the viewer rate so the apparent animation speed is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No scene placements were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(WalkError::InvalidDataset {
                reason: "No scene placements captured for visualization".to_string(),
            });
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor)?;

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| WalkError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| WalkError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| WalkError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Result<Vec<Frame>> {
        let cell = GIF_CELL_SIZE;
        let width = (self.columns as f64 * cell) as u32;
        let height = (self.rows as f64 * cell) as u32;
        let left = -(self.columns as f64 * cell) / 2.0;
        let bottom = -(self.rows as f64 * cell) / 2.0;

        let mut surface = Surface::new(width, height, palette::LIGHT_GREY);
        draw_grid_lines(&mut surface, self.columns, self.rows, cell);

        // Replay randomness is reseeded; scene placement stays identical
        let mut rng = StdRng::seed_from_u64(GIF_REPLAY_SEED);

        let mut frames = Vec::new();
        frames.push(frame_from(&surface, delay_ms));

        let mut frame_count = 0;
        for placement in &self.placements {
            let anchor = [
                (placement.column as f64).mul_add(cell, left),
                (placement.row as f64).mul_add(cell, bottom),
            ];
            {
                let mut pen = Pen::new(&mut surface);
                pen.goto(anchor);
                placement.variant.render(&mut pen, cell, &mut rng);
            }

            frame_count += 1;
            if frame_count % skip_factor == 0 {
                frames.push(frame_from(&surface, delay_ms));
            }
        }

        if frame_count % skip_factor != 0 {
            frames.push(frame_from(&surface, delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(frame_from(&surface, delay_ms.saturating_mul(GIF_FINAL_FRAME_HOLD)));

        Ok(frames)
    }
}

fn frame_from(surface: &Surface, delay_ms: u32) -> Frame {
    Frame::from_parts(
        surface.image().clone(),
        0,
        0,
        Delay::from_numer_denom_ms(delay_ms, 1),
    )
}

fn draw_grid_lines(surface: &mut Surface, columns: usize, rows: usize, cell: f64) {
    let left = -(columns as f64 * cell) / 2.0;
    let bottom = -(rows as f64 * cell) / 2.0;
    let mut pen = Pen::new(surface);
    pen.set_stroke(palette::SLATE_GREY);
    for line in 0..=rows {
        let y = (line as f64).mul_add(cell, bottom);
        pen.goto([left, y]);
        pen.pen_down();
        pen.goto([left + columns as f64 * cell, y]);
        pen.pen_up();
    }
    for line in 0..=columns {
        let x = (line as f64).mul_add(cell, left);
        pen.goto([x, bottom]);
        pen.pen_down();
        pen.goto([x, bottom + rows as f64 * cell]);
        pen.pen_up();
    }
}
