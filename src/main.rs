//! CLI entry point for the brickwork re-tiling tool

use brickwork::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> brickwork::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
