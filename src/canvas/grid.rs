//! Grid geometry, validation and backdrop drawing
//!
//! The grid sits centred on the canvas with a wide margin either side for the
//! scene key and the final-variant panel, and a half-cell margin above and
//! below. Columns are labelled with letters, rows with one-based numbers.

use crate::canvas::font::{self, Alignment};
use crate::canvas::palette::Colour;
use crate::canvas::surface::Surface;
use crate::canvas::turtle::Pen;
use crate::io::configuration::{
    MAX_GRID_WIDTH, MIN_CELL_SIZE, MIN_GRID_HEIGHT, MIN_GRID_WIDTH, X_MARGIN_CELLS,
    Y_MARGIN_CELLS,
};
use crate::io::error::{Result, invalid_parameter};

/// Validated grid geometry
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    cell_size: u32,
    columns: usize,
    rows: usize,
}

impl GridLayout {
    /// Create a layout, enforcing the minimum cell and grid dimensions
    ///
    /// # Errors
    ///
    /// Returns [`crate::WalkError::InvalidParameter`] when the cell size or
    /// either grid dimension is below its minimum, or the width exceeds the
    /// single-letter label range.
    pub fn new(cell_size: u32, columns: usize, rows: usize) -> Result<Self> {
        if cell_size < MIN_CELL_SIZE {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("cells must be at least {MIN_CELL_SIZE}x{MIN_CELL_SIZE} pixels"),
            ));
        }
        if columns < MIN_GRID_WIDTH {
            return Err(invalid_parameter(
                "width",
                &columns,
                &format!("grid must be at least {MIN_GRID_WIDTH} squares wide"),
            ));
        }
        if columns > MAX_GRID_WIDTH {
            return Err(invalid_parameter(
                "width",
                &columns,
                &format!("grid can be at most {MAX_GRID_WIDTH} squares wide"),
            ));
        }
        if rows < MIN_GRID_HEIGHT {
            return Err(invalid_parameter(
                "height",
                &rows,
                &format!("grid must be at least {MIN_GRID_HEIGHT} squares high"),
            ));
        }
        Ok(Self {
            cell_size,
            columns,
            rows,
        })
    }

    /// Cell size in pixels
    pub const fn cell(&self) -> f64 {
        self.cell_size as f64
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Horizontal margin either side of the grid, in pixels
    pub fn x_margin(&self) -> f64 {
        self.cell() * X_MARGIN_CELLS
    }

    /// Vertical margin above and below the grid, in pixels
    pub fn y_margin(&self) -> f64 {
        self.cell() * Y_MARGIN_CELLS
    }

    /// Full canvas width in pixels
    pub fn window_width(&self) -> u32 {
        (self.columns as f64).mul_add(self.cell(), 2.0 * self.x_margin()) as u32
    }

    /// Full canvas height in pixels
    pub fn window_height(&self) -> u32 {
        (self.rows as f64).mul_add(self.cell(), 2.0 * self.y_margin()) as u32
    }

    /// Turtle x coordinate of the grid's left edge
    pub fn left_edge(&self) -> f64 {
        -(self.columns as f64 * self.cell()) / 2.0
    }

    /// Turtle y coordinate of the grid's bottom edge
    pub fn bottom_edge(&self) -> f64 {
        -(self.rows as f64 * self.cell()) / 2.0
    }

    /// Whether a zero-based cell coordinate lies on the grid
    pub const fn contains(&self, column: i64, row: i64) -> bool {
        column >= 0 && row >= 0 && (column as usize) < self.columns && (row as usize) < self.rows
    }

    /// Turtle coordinate of a cell's bottom-left corner
    pub fn cell_origin(&self, column: usize, row: usize) -> [f64; 2] {
        [
            (column as f64).mul_add(self.cell(), self.left_edge()),
            (row as f64).mul_add(self.cell(), self.bottom_edge()),
        ]
    }

    /// Label scale for axis text, in pixels per font unit
    pub fn label_scale(&self) -> f64 {
        self.cell() / 5.0 / font::GLYPH_HEIGHT
    }

    /// Draw the grid lines, axis labels and centre marker
    pub fn draw_backdrop(&self, surface: &mut Surface, line_colour: Colour, draw_grid: bool) {
        if !draw_grid {
            return;
        }

        let cell = self.cell();
        let left = self.left_edge();
        let bottom = self.bottom_edge();

        {
            let mut pen = Pen::new(surface);
            pen.set_stroke(line_colour);
            pen.set_width(2.0);

            // Horizontal then vertical grid lines
            for line in 0..=self.rows {
                let y = (line as f64).mul_add(cell, bottom);
                pen.goto([left, y]);
                pen.pen_down();
                pen.goto([left + self.columns as f64 * cell, y]);
                pen.pen_up();
            }
            for line in 0..=self.columns {
                let x = (line as f64).mul_add(cell, left);
                pen.goto([x, bottom]);
                pen.pen_down();
                pen.goto([x, bottom + self.rows as f64 * cell]);
                pen.pen_up();
            }

            // Centre marker at the origin
            pen.goto([0.0, 0.0]);
            pen.dot(cell / 6.0);
        }

        let scale = self.label_scale();
        for column in 0..self.columns {
            let x = (column as f64).mul_add(cell, left) + cell / 2.0;
            let y = bottom - cell / 3.0;
            font::draw_text(
                surface,
                [x, y],
                &column_label(column),
                scale,
                line_colour,
                Alignment::Centre,
            );
        }
        for row in 0..self.rows {
            let x = left - cell / 10.0;
            let y = (row as f64).mul_add(cell, bottom) + cell / 2.0 - cell / 10.0;
            font::draw_text(
                surface,
                [x, y],
                &format!("{}", row + 1),
                scale,
                line_colour,
                Alignment::Right,
            );
        }
    }
}

/// Single-letter label for a zero-based column index
pub fn column_label(column: usize) -> String {
    u8::try_from(column)
        .ok()
        .and_then(|index| index.checked_add(b'A'))
        .map_or_else(|| "?".to_string(), |byte| char::from(byte).to_string())
}
