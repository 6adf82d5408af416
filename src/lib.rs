//! Perfect maze generation by randomized depth-first carving
//!
//! A maze is a rectangular grid of cells whose knocked-down walls form a
//! spanning tree: every cell is reachable from every other along exactly one
//! route. The carver walks the grid with an explicit backtracking stack and
//! leaves per-cell wall flags for renderers to draw.
//!
//! ```
//! use mazecarve::algorithm::generator::get_maze;
//! use mazecarve::algorithm::random::SeededRandom;
//! use mazecarve::analysis::MazeTopology;
//!
//! let mut random = SeededRandom::new(7);
//! let maze = get_maze(8, 5, 0, 0, &mut random);
//!
//! assert!(maze.all_visited());
//! assert!(MazeTopology::from_grid(&maze).is_perfect());
//! ```

#![forbid(unsafe_code)]

/// Maze carving, randomness and request entry points
pub mod algorithm;
/// Structural checks over carved mazes
pub mod analysis;
/// Input/output operations, rendering and error handling
pub mod io;
/// Grid, cell and direction data model
pub mod spatial;

pub use io::error::{MazeError, Result};
