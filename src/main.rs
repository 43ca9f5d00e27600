//! CLI entry point for the photomosaic assembler

use clap::Parser;
use tilemosaic::io::cli::Cli;

fn main() -> tilemosaic::Result<()> {
    let cli = Cli::parse();
    cli.run()
}
