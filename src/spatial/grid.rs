//! Rectangular cell storage for a single maze
//!
//! Cells live in an `ndarray` matrix indexed `[x, y]`, so a cell's coordinate
//! and its storage index always agree. A grid is built once per maze request
//! and never resized.

use ndarray::Array2;

use crate::spatial::cell::{Cell, CellWalls};
use crate::spatial::direction::{Direction, Position};

/// Width × height collection of maze cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Allocate a grid of fully walled, unvisited cells
    ///
    /// Each cell is created at its own coordinate, `x` in `[0, width)` and
    /// `y` in `[0, height)`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` exceeds `i32::MAX`, the largest signed
    /// coordinate.
    #[track_caller]
    pub fn new(width: usize, height: usize) -> Self {
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            too_large(width, height);
        }
        let cells = Array2::from_shape_fn((width, height), |(x, y)| {
            Cell::new(Position::new(x as i32, y as i32))
        });
        Self { cells }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// Grid dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `position` addresses a cell of this grid
    pub fn contains(&self, position: Position) -> bool {
        self.storage_index(position).is_some()
    }

    /// Cell at `position`, or `None` outside the grid
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.storage_index(position)
            .and_then(|index| self.cells.get(index))
    }

    /// Mutable cell at `position`, or `None` outside the grid
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.storage_index(position)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Cell at `position`
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the grid. Callers probing unknown
    /// coordinates must use [`Grid::get`] or [`Grid::is_cell_valid`] first.
    #[track_caller]
    pub fn cell(&self, position: Position) -> &Cell {
        let dimensions = self.dimensions();
        self.get(position)
            .unwrap_or_else(|| out_of_bounds(position, dimensions))
    }

    /// Mutable cell at `position`
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the grid.
    #[track_caller]
    pub fn cell_mut(&mut self, position: Position) -> &mut Cell {
        let dimensions = self.dimensions();
        self.get_mut(position)
            .unwrap_or_else(|| out_of_bounds(position, dimensions))
    }

    /// True if `position` is inside the grid and not yet visited
    pub fn is_cell_valid(&self, position: Position) -> bool {
        self.get(position).is_some_and(|cell| !cell.is_visited())
    }

    /// In-bounds orthogonal neighbours, regardless of walls or visited state
    ///
    /// Returned in left, right, down, up order.
    pub fn neighbours(&self, position: Position) -> Vec<Position> {
        [
            Direction::Left,
            Direction::Right,
            Direction::Down,
            Direction::Up,
        ]
        .into_iter()
        .map(|direction| position.step(direction))
        .filter(|&neighbour| self.contains(neighbour))
        .collect()
    }

    /// Boundary flags for drawing the cell at `position`
    ///
    /// The bottom row always gets a bottom wall and the last column always
    /// gets a right wall, whatever the stored flags say.
    pub fn cell_walls(&self, position: Position) -> Option<CellWalls> {
        let cell = self.get(position)?;
        Some(CellWalls {
            bottom: position.y == 0,
            left: cell.is_left_wall(),
            right: position.x as usize == self.width() - 1,
            top: cell.is_top_wall(),
        })
    }

    /// Row-major index in `[0, len)` for flat per-cell bookkeeping
    pub fn linear_index(&self, position: Position) -> Option<usize> {
        let [x, y] = self.storage_index(position)?;
        Some(y * self.width() + x)
    }

    /// Inverse of [`Grid::linear_index`]
    pub fn position_of(&self, index: usize) -> Option<Position> {
        (index < self.len()).then(|| {
            let width = self.width();
            Position::new((index % width) as i32, (index / width) as i32)
        })
    }

    /// Iterate cells column by column (`x` outer, `y` inner)
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Whether every cell has been visited
    pub fn all_visited(&self) -> bool {
        self.cells.iter().all(Cell::is_visited)
    }

    fn storage_index(&self, position: Position) -> Option<[usize; 2]> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.width() && y < self.height()).then_some([x, y])
    }
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn too_large(width: usize, height: usize) -> ! {
    panic!("a {width}x{height} grid does not fit in i32 coordinates")
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn out_of_bounds(position: Position, (width, height): (usize, usize)) -> ! {
    panic!("cell {position} is outside the {width}x{height} grid")
}
