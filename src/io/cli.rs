//! Command-line interface for generating, checking and exporting mazes

use crate::algorithm::carver::CarveReport;
use crate::algorithm::generator::{MazeConfig, MazeGenerator};
use crate::algorithm::random::SeededRandom;
use crate::analysis::MazeTopology;
use crate::io::configuration::{
    BATCH_FILE_PREFIX, DEFAULT_CELL_PIXELS, DEFAULT_MAZE_COUNT, DEFAULT_MAZE_HEIGHT,
    DEFAULT_MAZE_WIDTH, DEFAULT_START_X, DEFAULT_START_Y, IMAGE_EXTENSION,
    MIN_BATCH_FOR_PROGRESS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_maze_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::render_text;
use crate::spatial::Grid;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazecarve")]
#[command(
    author,
    version,
    about = "Generate perfect mazes by randomized depth-first carving"
)]
/// Command-line arguments for the maze generator
pub struct Cli {
    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_MAZE_WIDTH)]
    pub width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAZE_HEIGHT)]
    pub height: usize,

    /// Start column (out of range falls back to 0 with a warning)
    #[arg(short = 'x', long, default_value_t = DEFAULT_START_X, allow_negative_numbers = true)]
    pub start_x: i32,

    /// Start row (out of range falls back to 0 with a warning)
    #[arg(short = 'y', long, default_value_t = DEFAULT_START_Y, allow_negative_numbers = true)]
    pub start_y: i32,

    /// Random seed for reproducible mazes (fresh entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of mazes to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAZE_COUNT)]
    pub count: usize,

    /// PNG file to write, or a directory when generating several mazes
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Side length of one cell in the PNG, in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Print each maze as ASCII art
    #[arg(short, long)]
    pub text: bool,

    /// Suppress warnings and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Maze parameters requested on the command line
    pub const fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            start_x: self.start_x,
            start_y: self.start_y,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count >= MIN_BATCH_FOR_PROGRESS
    }

    /// Where the maze at `index` is written, if anywhere
    ///
    /// A single maze goes to `--output` as given. A batch treats `--output`
    /// as a directory and numbers the files inside it.
    pub fn output_path(&self, index: usize) -> Option<PathBuf> {
        let output = self.output.as_deref()?;
        if self.count <= 1 {
            return Some(output.to_path_buf());
        }
        Some(batch_file_path(output, index, self.count))
    }
}

fn batch_file_path(directory: &Path, index: usize, count: usize) -> PathBuf {
    let digits = count.saturating_sub(1).max(1).to_string().len();
    directory.join(format!(
        "{BATCH_FILE_PREFIX}{index:0digits$}.{IMAGE_EXTENSION}"
    ))
}

/// Drives one command-line run: generate, check, print and export
pub struct MazeRunner {
    cli: Cli,
    generator: MazeGenerator,
    random: SeededRandom,
    progress_manager: Option<ProgressManager>,
}

impl MazeRunner {
    /// Validate the arguments and prepare the generator
    ///
    /// # Errors
    ///
    /// Returns an error if the maze dimensions or the maze count are invalid
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &cli.count,
                &"at least one maze must be requested",
            ));
        }

        let generator = MazeGenerator::new(cli.maze_config())?;
        let random = cli
            .seed
            .map_or_else(SeededRandom::from_entropy, SeededRandom::new);
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Ok(Self {
            cli,
            generator,
            random,
            progress_manager,
        })
    }

    /// Generate every requested maze
    ///
    /// # Errors
    ///
    /// Returns an error if a maze fails the spanning tree check or cannot be
    /// exported
    pub fn run(&mut self) -> Result<()> {
        for index in 0..self.cli.count {
            self.generator.clear_maze();
            let grid = self.generator.get_maze(&mut self.random);
            MazeTopology::from_grid(grid).verify()?;

            if let Some(report) = self.generator.last_report() {
                self.report_warnings(report);
                if let Some(ref pm) = self.progress_manager {
                    pm.complete_maze(report.walls_broken);
                }
            }

            if let Some(grid) = self.generator.maze() {
                self.emit(grid, index)?;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// The generator holding the most recent maze
    pub const fn generator(&self) -> &MazeGenerator {
        &self.generator
    }

    // Allow print for user feedback on recovered conditions
    #[allow(clippy::print_stderr)]
    fn report_warnings(&self, report: &CarveReport) {
        if self.cli.quiet {
            return;
        }
        for warning in &report.warnings {
            eprintln!("warning: {warning}");
        }
    }

    // Allow print for the ASCII rendering the user asked for
    #[allow(clippy::print_stdout)]
    fn emit(&self, grid: &Grid, index: usize) -> Result<()> {
        if self.cli.text {
            print!("{}", render_text(grid));
        }

        if let Some(path) = self.cli.output_path(index) {
            export_maze_as_png(grid, self.cli.cell_pixels, &path)?;
        }

        Ok(())
    }
}
