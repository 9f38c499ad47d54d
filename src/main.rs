//! CLI entry point for the grid-walk vignette renderer

use birdwalk::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> birdwalk::Result<()> {
    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    runner.run()
}
