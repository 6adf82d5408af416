//! PNG export of carved mazes
//!
//! Each cell covers a `cell_pixels` square; walls are one pixel wide lines
//! along the square's edges. The image is one pixel larger than the cell
//! area in each direction so the right and bottom outer walls fit.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::io::configuration::{FLOOR_COLOUR, MIN_CELL_PIXELS, WALL_COLOUR};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::render::{CellRenderer, render_maze};
use crate::spatial::{CellWalls, Grid, Position};

/// Draws cells into an in-memory RGB image
pub struct ImageRenderer {
    image: RgbImage,
    cell_pixels: u32,
    height: u32,
}

impl ImageRenderer {
    /// Create a blank canvas for a `width` × `height` maze
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_pixels` is below `MIN_CELL_PIXELS` or the
    /// image would not fit in `u32` pixel coordinates
    pub fn new(width: usize, height: usize, cell_pixels: u32) -> Result<Self> {
        if cell_pixels < MIN_CELL_PIXELS {
            return Err(invalid_parameter(
                "cell_pixels",
                &cell_pixels,
                &format!("must be at least {MIN_CELL_PIXELS}"),
            ));
        }

        let to_pixels = |cells: usize, parameter: &'static str| {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(cell_pixels))
                .and_then(|pixels| pixels.checked_add(1))
                .ok_or_else(|| invalid_parameter(parameter, &cells, &"image would be too large"))
        };
        let image_width = to_pixels(width, "width")?;
        let image_height = to_pixels(height, "height")?;

        Ok(Self {
            image: ImageBuffer::from_pixel(image_width, image_height, Rgb(FLOOR_COLOUR)),
            cell_pixels,
            height: height as u32,
        })
    }

    /// The rendered image
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn draw_horizontal(&mut self, left: u32, row: u32) {
        for x in left..=left + self.cell_pixels {
            if let Some(pixel) = self.image.get_pixel_mut_checked(x, row) {
                *pixel = Rgb(WALL_COLOUR);
            }
        }
    }

    fn draw_vertical(&mut self, column: u32, top: u32) {
        for y in top..=top + self.cell_pixels {
            if let Some(pixel) = self.image.get_pixel_mut_checked(column, y) {
                *pixel = Rgb(WALL_COLOUR);
            }
        }
    }
}

impl CellRenderer for ImageRenderer {
    fn render_cell(&mut self, position: Position, walls: CellWalls) {
        let (Ok(x), Ok(y)) = (u32::try_from(position.x), u32::try_from(position.y)) else {
            return;
        };
        if y >= self.height {
            return;
        }

        // Image rows grow downwards while maze rows grow upwards
        let left = x * self.cell_pixels;
        let top = (self.height - 1 - y) * self.cell_pixels;
        let right = left + self.cell_pixels;
        let bottom = top + self.cell_pixels;

        if walls.top {
            self.draw_horizontal(left, top);
        }
        if walls.bottom {
            self.draw_horizontal(left, bottom);
        }
        if walls.left {
            self.draw_vertical(left, top);
        }
        if walls.right {
            self.draw_vertical(right, top);
        }
    }
}

/// Render `grid` into an RGB image
///
/// # Errors
///
/// Returns an error if the canvas cannot be created for these dimensions
pub fn render_image(grid: &Grid, cell_pixels: u32) -> Result<RgbImage> {
    let mut renderer = ImageRenderer::new(grid.width(), grid.height(), cell_pixels)?;
    render_maze(grid, &mut renderer);
    Ok(renderer.into_image())
}

/// Export `grid` as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is too small or the image too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(grid: &Grid, cell_pixels: u32, output_path: &Path) -> Result<()> {
    let image = render_image(grid, cell_pixels)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
