//! Default values and limits for grid, walk and export settings

// Grid geometry. Cells must stay large enough for the scene detail to read.
/// Default cell size in pixels
pub const DEFAULT_CELL_SIZE: u32 = 100;
/// Minimum cell size in pixels
pub const MIN_CELL_SIZE: u32 = 80;

/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 9;
/// Minimum grid width in cells
pub const MIN_GRID_WIDTH: usize = 8;

/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 7;
/// Minimum grid height in cells
pub const MIN_GRID_HEIGHT: usize = 6;

/// Column labels are single letters, which caps the usable grid width
pub const MAX_GRID_WIDTH: usize = 26;

// The side margins hold the scene key and the final-variant panel.
/// Horizontal margin either side of the grid, in cells
pub const X_MARGIN_CELLS: f64 = 2.75;
/// Vertical margin above and below the grid, in cells
pub const Y_MARGIN_CELLS: f64 = 0.5;

// Walk generation settings, matching the dataset contract.
/// Likelihood of a variant mutation per generated item, in percent
pub const MUTATION_PERCENT: u32 = 20;
/// Upper bound on the number of generated items after the start instruction
pub const MAX_GENERATED_ITEMS: usize = 100;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Dataset file probed by existence when none is given explicitly
pub const DEFAULT_DATASET_PATH: &str = "walk.txt";

// Output settings
/// Default output path for the rendered canvas
pub const DEFAULT_OUTPUT_PATH: &str = "birdwalk.png";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Cell size used when replaying the walk into GIF frames
pub const GIF_CELL_SIZE: f64 = 40.0;
/// Multiplier applied to the final GIF frame so it is held longer
pub const GIF_FINAL_FRAME_HOLD: u32 = 25;
/// Seed for scene randomness during GIF replay
pub const GIF_REPLAY_SEED: u64 = 7;

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
