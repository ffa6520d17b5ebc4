//! CLI entry point for the noise mosaic renderer

use clap::Parser;
use noisemosaic::io::cli::{Cli, FileProcessor};

fn main() -> noisemosaic::Result<()> {
    let cli = Cli::parse();
    noisemosaic::io::logging::init(cli.verbose, cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
