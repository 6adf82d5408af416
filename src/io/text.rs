//! Plain text maze rendering
//!
//! Each cell becomes a 4×2 block of characters. Rows are printed from the
//! highest `y` down so the picture matches the grid's "y grows up" convention:
//!
//! ```text
//! +---+---+
//! |       |
//! +---+---+
//! ```

use ndarray::Array2;

use crate::io::render::{CellRenderer, render_maze};
use crate::spatial::{CellWalls, Grid, Position};

const CORNER: char = '+';
const HORIZONTAL_WALL: &str = "---";
const VERTICAL_WALL: char = '|';
const OPEN_SPAN: &str = "   ";

/// Collects cell walls and lays them out as ASCII art
#[derive(Debug, Clone)]
pub struct TextRenderer {
    walls: Array2<CellWalls>,
}

impl TextRenderer {
    /// Create a renderer sized for a `width` × `height` maze
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            walls: Array2::default((width, height)),
        }
    }

    /// Build the final picture, one line per text row
    pub fn into_string(self) -> String {
        let (width, height) = self.walls.dim();
        let mut out = String::new();

        for y in (0..height).rev() {
            let mut ceiling = String::new();
            let mut body = String::new();

            for x in 0..width {
                let walls = self.walls.get([x, y]).copied().unwrap_or_default();

                ceiling.push(CORNER);
                ceiling.push_str(if walls.top { HORIZONTAL_WALL } else { OPEN_SPAN });

                body.push(if walls.left { VERTICAL_WALL } else { ' ' });
                body.push_str(OPEN_SPAN);
                if walls.right {
                    body.push(VERTICAL_WALL);
                }
            }
            ceiling.push(CORNER);

            out.push_str(&ceiling);
            out.push('\n');
            out.push_str(&body);
            out.push('\n');
        }

        if height > 0 {
            for x in 0..width {
                let walls = self.walls.get([x, 0]).copied().unwrap_or_default();
                out.push(CORNER);
                out.push_str(if walls.bottom { HORIZONTAL_WALL } else { OPEN_SPAN });
            }
            out.push(CORNER);
            out.push('\n');
        }

        out
    }
}

impl CellRenderer for TextRenderer {
    fn render_cell(&mut self, position: Position, walls: CellWalls) {
        let (Ok(x), Ok(y)) = (usize::try_from(position.x), usize::try_from(position.y)) else {
            return;
        };
        if let Some(slot) = self.walls.get_mut([x, y]) {
            *slot = walls;
        }
    }
}

/// Render `grid` as ASCII art
pub fn render_text(grid: &Grid) -> String {
    let mut renderer = TextRenderer::new(grid.width(), grid.height());
    render_maze(grid, &mut renderer);
    renderer.into_string()
}
