//! Command-line interface for rendering bird adventure walks

use crate::canvas::grid::GridLayout;
use crate::canvas::palette;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_DATASET_PATH, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_OUTPUT_PATH, DEFAULT_SEED, GIF_FRAME_DELAY_MS,
};
use crate::io::dataset::{load_dataset, write_dataset};
use crate::io::error::Result;
use crate::io::image::export_surface_as_png;
use crate::io::progress::ProgressManager;
use crate::walk::generator::generate_walk;
use crate::walk::instruction::Instruction;
use crate::walk::interpreter::{CanvasOptions, Walker};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "birdwalk")]
#[command(
    author,
    version,
    about = "Draw a bird's adventure as a random walk of scenes on a grid"
)]
/// Command-line arguments for the walk rendering tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Cell size in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Number of generated items after the start (random when omitted)
    #[arg(short, long)]
    pub items: Option<usize>,

    /// Output path for the rendered canvas
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Delay between GIF frames in milliseconds
    #[arg(short, long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Dataset file to interpret instead of generating a walk
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Write the interpreted instruction sequence to a dataset file
    #[arg(short, long)]
    pub emit_dataset: Option<PathBuf>,

    /// Omit the grid lines and axis labels
    #[arg(long)]
    pub no_grid: bool,

    /// Omit the scene key in the right margin
    #[arg(long)]
    pub no_key: bool,

    /// Canvas background colour (name or #RRGGBB)
    #[arg(short, long, default_value = "light grey")]
    pub background: String,

    /// Grid line and label colour (name or #RRGGBB)
    #[arg(short, long, default_value = "slate grey")]
    pub line_colour: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates walk generation, interpretation and export
pub struct Runner {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl Runner {
    /// Create a runner from the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);

        Self { cli, progress }
    }

    /// Render the walk according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, dataset handling,
    /// interpretation or export fails
    pub fn run(&mut self) -> Result<()> {
        let layout = GridLayout::new(self.cli.cell_size, self.cli.width, self.cli.height)?;
        let options = CanvasOptions {
            background: palette::parse(&self.cli.background)?,
            line_colour: palette::parse(&self.cli.line_colour)?,
            draw_grid: !self.cli.no_grid,
            draw_key: !self.cli.no_key,
        };

        let instructions = self.resolve_dataset(&layout)?;

        if let Some(ref path) = self.cli.emit_dataset {
            write_dataset(&instructions, path)?;
        }

        let mut walker = Walker::new(layout, self.cli.seed, &options);
        if self.cli.visualize {
            walker.enable_visualization(instructions.len());
        }

        if let Some(ref mut pm) = self.progress {
            pm.start(instructions.len(), "Drawing");
        }
        for instruction in &instructions {
            walker.apply(instruction)?;
            if let Some(ref pm) = self.progress {
                pm.advance();
            }
        }
        walker.finish();
        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        export_surface_as_png(walker.surface(), &self.cli.output.to_string_lossy())?;

        if self.cli.visualize {
            if let Some(capture) = walker.capture() {
                let gif_path = visualization_path(&self.cli.output);
                capture.export_gif(&gif_path.to_string_lossy(), self.cli.frame_delay)?;
            }
        }

        Ok(())
    }

    // Allow print for user feedback on which dataset source was chosen
    #[allow(clippy::print_stderr)]
    fn resolve_dataset(&self, layout: &GridLayout) -> Result<Vec<Instruction>> {
        if let Some(ref path) = self.cli.dataset {
            return load_dataset(path);
        }

        // Without an explicit dataset, a file at the well-known path wins
        // over generation
        let default_path = Path::new(DEFAULT_DATASET_PATH);
        if default_path.is_file() {
            if !self.cli.quiet {
                eprintln!("Using dataset: {}", default_path.display());
            }
            return load_dataset(default_path);
        }

        if !self.cli.quiet {
            eprintln!("No dataset found, generating walk (seed {})", self.cli.seed);
        }
        Ok(generate_walk(layout, self.cli.seed, self.cli.items))
    }
}

// Derives the GIF path from the output path stem
fn visualization_path(output_path: &Path) -> PathBuf {
    let stem = output_path.file_stem().unwrap_or_default();
    let viz_name = format!("{}_visualization.gif", stem.to_string_lossy());

    output_path.parent().map_or_else(
        || PathBuf::from(viz_name.clone()),
        |parent| parent.join(&viz_name),
    )
}
