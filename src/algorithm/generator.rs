//! Maze request entry points
//!
//! [`get_maze`] is the one-shot form: allocate a grid, carve it, hand it back.
//! [`MazeGenerator`] keeps a validated configuration and the most recent maze
//! for callers that regenerate repeatedly, such as an interactive "new maze"
//! action. Each request builds a brand new grid; nothing carries over.

use crate::algorithm::carver::{CarveReport, MazeCarver};
use crate::algorithm::random::RandomSource;
use crate::io::configuration::{
    DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH, DEFAULT_START_X, DEFAULT_START_Y,
    MAX_MAZE_DIMENSION, MIN_MAZE_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Grid;

/// Parameters of a maze request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Requested start column, clamped with a warning when out of range
    pub start_x: i32,
    /// Requested start row, clamped with a warning when out of range
    pub start_y: i32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAZE_WIDTH,
            height: DEFAULT_MAZE_HEIGHT,
            start_x: DEFAULT_START_X,
            start_y: DEFAULT_START_Y,
        }
    }
}

impl MazeConfig {
    /// Check the dimensions against the supported range
    ///
    /// Start coordinates are not validated here; the carver recovers from
    /// an out-of-range start on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is outside
    /// `MIN_MAZE_DIMENSION..=MAX_MAZE_DIMENSION`
    pub fn validate(&self) -> Result<()> {
        let range = MIN_MAZE_DIMENSION..=MAX_MAZE_DIMENSION;
        let reason = format!("must be between {MIN_MAZE_DIMENSION} and {MAX_MAZE_DIMENSION}");

        if !range.contains(&self.width) {
            return Err(invalid_parameter("width", &self.width, &reason));
        }
        if !range.contains(&self.height) {
            return Err(invalid_parameter("height", &self.height, &reason));
        }
        Ok(())
    }
}

/// Allocate a fresh grid and carve a perfect maze into it
///
/// The carve report, including any start-position warning, is discarded; use
/// [`get_maze_with_report`] to keep it.
///
/// # Panics
///
/// Panics if `width` or `height` exceeds `i32::MAX`. [`MazeConfig::validate`]
/// rejects such sizes up front.
pub fn get_maze<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    start_x: i32,
    start_y: i32,
    random: &mut R,
) -> Grid {
    get_maze_with_report(width, height, start_x, start_y, random).0
}

/// Allocate a fresh grid, carve it, and return it with the carve report
///
/// # Panics
///
/// Panics if `width` or `height` exceeds `i32::MAX`.
pub fn get_maze_with_report<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    start_x: i32,
    start_y: i32,
    random: &mut R,
) -> (Grid, CarveReport) {
    let mut grid = Grid::new(width, height);
    let report = MazeCarver::new(&mut grid, random).carve(start_x, start_y);
    (grid, report)
}

/// Reusable maze source holding the latest generated maze
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    config: MazeConfig,
    maze: Option<Grid>,
    last_report: Option<CarveReport>,
}

impl MazeGenerator {
    /// Create a generator for a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`MazeConfig::validate`]
    pub fn new(config: MazeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            maze: None,
            last_report: None,
        })
    }

    /// The configuration every request uses
    pub const fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Generate a new maze, replacing any previous one
    pub fn get_maze<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> &Grid {
        let MazeConfig {
            width,
            height,
            start_x,
            start_y,
        } = self.config;
        let (grid, report) = get_maze_with_report(width, height, start_x, start_y, random);
        self.last_report = Some(report);
        self.maze.insert(grid)
    }

    /// Drop the current maze
    pub fn clear_maze(&mut self) {
        self.maze = None;
        self.last_report = None;
    }

    /// Most recently generated maze, if any
    pub const fn maze(&self) -> Option<&Grid> {
        self.maze.as_ref()
    }

    /// Report of the most recent carve, if any
    pub const fn last_report(&self) -> Option<&CarveReport> {
        self.last_report.as_ref()
    }
}
