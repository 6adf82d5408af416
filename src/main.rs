//! CLI entry point for the depth-first maze generator

use clap::Parser;
use mazecarve::io::cli::{Cli, MazeRunner};

fn main() -> mazecarve::Result<()> {
    let cli = Cli::parse();
    let mut runner = MazeRunner::new(cli)?;
    runner.run()
}
