//! Tests for PNG rendering and export

#[cfg(test)]
mod tests {
    use mazecarve::algorithm::generator::get_maze;
    use mazecarve::algorithm::random::SeededRandom;
    use mazecarve::io::configuration::{FLOOR_COLOUR, WALL_COLOUR};
    use mazecarve::io::image::{ImageRenderer, export_maze_as_png, render_image};
    use mazecarve::spatial::{Grid, Position};

    fn is_wall(image: &image::RgbImage, x: u32, y: u32) -> bool {
        image.get_pixel_checked(x, y).map(|pixel| pixel.0) == Some(WALL_COLOUR)
    }

    // Tests image size is one pixel larger than the cell area
    #[test]
    fn test_image_dimensions() {
        let Ok(image) = render_image(&Grid::new(3, 2), 10) else {
            unreachable!("3x2 grid renders");
        };
        assert_eq!(image.dimensions(), (31, 21));
    }

    // Tests outer walls are drawn and cell interiors stay floor coloured
    // Verified by skipping the right wall of the last column
    #[test]
    fn test_fully_walled_cell() {
        let Ok(image) = render_image(&Grid::new(1, 1), 4) else {
            unreachable!("1x1 grid renders");
        };

        for i in 0..=4 {
            assert!(is_wall(&image, i, 0), "top edge at {i}");
            assert!(is_wall(&image, i, 4), "bottom edge at {i}");
            assert!(is_wall(&image, 0, i), "left edge at {i}");
            assert!(is_wall(&image, 4, i), "right edge at {i}");
        }
        assert_eq!(image.get_pixel_checked(2, 2).map(|p| p.0), Some(FLOOR_COLOUR));
    }

    // Tests a removed wall leaves a gap and rows are flipped so y grows up
    // Verified by drawing row zero at the top of the image
    #[test]
    fn test_removed_walls_leave_gaps() {
        let mut grid = Grid::new(2, 2);
        grid.cell_mut(Position::new(1, 0)).remove_left_wall();
        grid.cell_mut(Position::new(0, 0)).remove_top_wall();

        let Ok(image) = render_image(&grid, 4) else {
            unreachable!("2x2 grid renders");
        };

        // Shared wall of (0, 0) and (1, 0) sits in the lower half at x = 4
        assert!(!is_wall(&image, 4, 6));
        // Shared wall of (0, 1) and (1, 1) is still up
        assert!(is_wall(&image, 4, 2));
        // Wall between (0, 0) and (0, 1) is the horizontal line at y = 4
        assert!(!is_wall(&image, 2, 4));
        assert!(is_wall(&image, 6, 4));
    }

    #[test]
    fn test_cell_pixels_too_small() {
        assert!(ImageRenderer::new(3, 3, 1).is_err());
        assert!(render_image(&Grid::new(3, 3), 0).is_err());
    }

    #[test]
    fn test_oversized_image_rejected() {
        assert!(ImageRenderer::new(usize::MAX, 1, 10).is_err());
    }

    // Tests PNG file creation including missing parent directories
    // Verified by disabling directory creation
    #[test]
    fn test_export_creates_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Failed to create temp directory");
        };
        let path = dir.path().join("nested").join("maze.png");
        let maze = get_maze(6, 4, 0, 0, &mut SeededRandom::new(3));

        assert!(export_maze_as_png(&maze, 5, &path).is_ok());
        assert!(path.exists());

        let reloaded = image::open(&path).map(|img| (img.width(), img.height()));
        assert!(matches!(reloaded, Ok((31, 21))));
    }
}
