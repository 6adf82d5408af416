//! Randomized depth-first maze carving
//!
//! The carver walks from the start cell into a random unvisited neighbour,
//! knocking down the wall between them, until it reaches a dead end. It then
//! retreats along its path one cell at a time until some cell on the path
//! still has an unvisited neighbour, and carries on from there. The path is
//! an explicit stack, so grid size is never limited by call depth.
//!
//! Every forward step breaks exactly one wall into a cell nobody has entered,
//! which is what makes the result a spanning tree.

use crate::algorithm::random::RandomSource;
use crate::io::error::CarveWarning;
use crate::spatial::{Grid, Position};

/// Outcome of a single carve over a grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarveReport {
    /// Start position actually used after normalization
    pub start: Position,
    /// Conditions that were recovered from without stopping
    pub warnings: Vec<CarveWarning>,
    /// Number of forward steps, equal to the number of walls knocked down
    pub walls_broken: usize,
    /// Number of cells popped off the path while retreating
    pub backtrack_steps: usize,
    /// Longest the path stack ever grew
    pub max_path_depth: usize,
}

/// Carves a perfect maze into a borrowed grid
pub struct MazeCarver<'grid, R: RandomSource + ?Sized> {
    grid: &'grid mut Grid,
    random: &'grid mut R,
}

impl<'grid, R: RandomSource + ?Sized> MazeCarver<'grid, R> {
    /// Prepare to carve `grid` using `random` for direction ordering
    pub const fn new(grid: &'grid mut Grid, random: &'grid mut R) -> Self {
        Self { grid, random }
    }

    /// The grid being carved
    pub const fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Carve the whole grid starting from `(start_x, start_y)`
    ///
    /// A start outside the grid is replaced by `(0, 0)` and reported as a
    /// [`CarveWarning::StartOutOfBounds`]. On return every cell is visited and
    /// exactly `width * height - 1` walls have been removed. An empty grid is
    /// left untouched.
    pub fn carve(&mut self, start_x: i32, start_y: i32) -> CarveReport {
        let mut report = CarveReport::default();

        let requested = Position::new(start_x, start_y);
        let start = if self.grid.contains(requested) {
            requested
        } else {
            report.warnings.push(CarveWarning::StartOutOfBounds {
                requested,
                width: self.grid.width(),
                height: self.grid.height(),
            });
            Position::ORIGIN
        };
        report.start = start;

        if self.grid.is_empty() {
            return report;
        }

        let mut current = start;
        let mut path = vec![start];
        report.max_path_depth = path.len();

        loop {
            let next = self.check_neighbours(current);

            if next == current {
                self.grid.cell_mut(current).mark_visited();
                match self.backtrack(&mut path, &mut report) {
                    Some(resume) => current = resume,
                    None => break,
                }
                continue;
            }

            self.break_walls(current, next);
            self.grid.cell_mut(current).mark_visited();
            current = next;
            path.push(current);

            report.walls_broken += 1;
            report.max_path_depth = report.max_path_depth.max(path.len());
        }

        report
    }

    /// First valid neighbour of `current` in a fresh random direction order
    ///
    /// Returns `current` itself when every neighbour is off the grid or
    /// already visited.
    pub fn check_neighbours(&mut self, current: Position) -> Position {
        self.random
            .random_directions()
            .into_iter()
            .map(|direction| current.step(direction))
            .find(|&neighbour| self.is_cell_valid(neighbour))
            .unwrap_or(current)
    }

    /// Whether `position` is inside the grid and still unvisited
    pub fn is_cell_valid(&self, position: Position) -> bool {
        self.grid.is_cell_valid(position)
    }

    /// Remove the single wall separating two adjacent cells
    ///
    /// The wall is stored on whichever cell owns it: the right-hand cell for a
    /// horizontal neighbour, the lower cell for a vertical one.
    ///
    /// # Panics
    ///
    /// Panics if the owning cell is outside the grid.
    pub fn break_walls(&mut self, primary: Position, secondary: Position) {
        if secondary.x < primary.x {
            self.grid.cell_mut(primary).remove_left_wall();
        } else if secondary.x > primary.x {
            self.grid.cell_mut(secondary).remove_left_wall();
        } else if secondary.y > primary.y {
            self.grid.cell_mut(primary).remove_top_wall();
        } else if secondary.y < primary.y {
            self.grid.cell_mut(secondary).remove_top_wall();
        }
    }

    // Pops until a cell with an unvisited neighbour turns up. Cells that are
    // still dead ends when popped are closed off as visited.
    fn backtrack(
        &mut self,
        path: &mut Vec<Position>,
        report: &mut CarveReport,
    ) -> Option<Position> {
        while let Some(popped) = path.pop() {
            report.backtrack_steps += 1;

            if self.check_neighbours(popped) != popped {
                return Some(popped);
            }
            self.grid.cell_mut(popped).mark_visited();
        }
        None
    }
}
