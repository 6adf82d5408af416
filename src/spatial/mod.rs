//! Spatial data structures for the maze
//!
//! This module contains the grid data model:
//! - Cell records with their owned walls and visited flag
//! - The rectangular grid that owns every cell
//! - Cardinal directions and signed grid positions

/// Maze cell records and derived boundary flags
pub mod cell;
/// Cardinal directions and grid positions
pub mod direction;
/// Rectangular cell storage with checked and fail-fast access
pub mod grid;

pub use cell::{Cell, CellWalls};
pub use direction::{Direction, Position};
pub use grid::Grid;
