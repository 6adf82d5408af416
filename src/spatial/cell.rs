//! Maze cell records
//!
//! A cell only stores the walls it owns: the one on its left and the one on
//! its top. The right wall of a cell is the left wall of its right-hand
//! neighbour and the bottom wall is the top wall of the cell below, so every
//! interior wall exists exactly once. The outer right column and bottom row
//! are closed by the grid edge and reported through [`CellWalls`].

use crate::spatial::direction::Position;

/// A single grid position with its two owned walls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    is_left_wall: bool,
    is_top_wall: bool,
    visited: bool,
}

impl Cell {
    /// Create a fully walled, unvisited cell at `position`
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            is_left_wall: true,
            is_top_wall: true,
            visited: false,
        }
    }

    /// Grid coordinate of this cell
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Column index
    pub const fn x(&self) -> i32 {
        self.position.x
    }

    /// Row index
    pub const fn y(&self) -> i32 {
        self.position.y
    }

    /// Whether the wall towards `x - 1` is standing
    pub const fn is_left_wall(&self) -> bool {
        self.is_left_wall
    }

    /// Whether the wall towards `y + 1` is standing
    pub const fn is_top_wall(&self) -> bool {
        self.is_top_wall
    }

    /// Whether the carver has finished with this cell
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Knock down the left wall
    pub const fn remove_left_wall(&mut self) {
        self.is_left_wall = false;
    }

    /// Knock down the top wall
    pub const fn remove_top_wall(&mut self) {
        self.is_top_wall = false;
    }

    /// Flag the cell as carved
    pub const fn mark_visited(&mut self) {
        self.visited = true;
    }
}

/// The four boundary flags a renderer needs to draw one cell
///
/// `left` and `top` come straight from the cell. `bottom` and `right` are only
/// set on the grid edge; interior bottom and right walls belong to the
/// neighbouring cells and are drawn when those are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellWalls {
    /// Outer wall below the bottom row
    pub bottom: bool,
    /// Wall shared with the cell at `x - 1`
    pub left: bool,
    /// Outer wall right of the last column
    pub right: bool,
    /// Wall shared with the cell at `y + 1`
    pub top: bool,
}
