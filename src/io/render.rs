//! Rendering capability shared by every maze consumer
//!
//! A renderer never sees the carver or the cell records, only the four
//! boundary flags of each cell. Drawing order follows the grid's column-major
//! storage.

use crate::spatial::{CellWalls, Grid, Position};

/// Anything that can draw a maze one cell at a time
pub trait CellRenderer {
    /// Draw the cell at `position` with the given boundary flags
    fn render_cell(&mut self, position: Position, walls: CellWalls);
}

/// Feed every cell of `grid` to `renderer`
pub fn render_maze<R: CellRenderer + ?Sized>(grid: &Grid, renderer: &mut R) {
    for cell in grid.iter() {
        let position = cell.position();
        if let Some(walls) = grid.cell_walls(position) {
            renderer.render_cell(position, walls);
        }
    }
}
