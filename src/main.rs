//! CLI entry point for the tile pattern preview renderer

use clap::Parser;
use patternize::io::cli::{Cli, FileProcessor};

fn main() -> patternize::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    let mut processor = FileProcessor::new(cli);
    let written = processor.process()?;
    log::info!("{} preview(s) written", written.len());
    Ok(())
}
